use rand::Rng;
use tracing::{debug, instrument, trace};

use super::*;

/// Greedy Randomized Adaptive Search Procedure for small covers.
///
/// Each of the `iterations` trials runs [`randomized_construction`] with a fixed `alpha`
/// followed by [`local_search`]; the smallest cover found is returned (the earliest on ties).
///
/// # Example
/// ```
/// use wgraphs::{prelude::*, cover::*, gens::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let mut graph = AdjList::new(6, GraphKind::undirected());
/// graph.connect_cycle(0..6).unwrap();
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(3);
/// let cover = Grasp::new().alpha(0.5).iterations(100).solve(&graph, rng);
/// assert_eq!(cover.len(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Grasp {
    alpha: f64,
    iterations: usize,
}

impl Default for Grasp {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            iterations: 100,
        }
    }
}

impl Grasp {
    /// Creates a solver with `alpha = 0.3` and `100` iterations
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the greediness of the construction; clamped into `[0, 1]`
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of trials
    /// ** Panics if `iterations == 0` **
    pub fn iterations(mut self, iterations: usize) -> Self {
        assert!(iterations > 0, "GRASP needs at least one iteration");
        self.iterations = iterations;
        self
    }

    /// Runs all trials and returns the smallest cover found.
    /// Returns an empty cover without searching if the graph has no edges.
    #[instrument(level = "debug", skip_all, fields(alpha = self.alpha, iterations = self.iterations))]
    pub fn solve<G, R>(&self, graph: &G, rng: &mut R) -> Cover
    where
        G: AdjacencyList + GraphEdgeOrder,
        R: Rng,
    {
        if graph.is_singleton_graph() {
            return Cover::new();
        }

        let mut best: Option<Cover> = None;
        for iteration in 0..self.iterations {
            let cover = local_search(graph, randomized_construction(graph, self.alpha, rng));
            trace!(iteration, size = cover.len(), "trial");

            if best.as_ref().is_none_or(|b| cover.len() < b.len()) {
                debug!(iteration, size = cover.len(), "improved");
                best = Some(cover);
            }
        }

        best.unwrap_or_default()
    }
}
