use itertools::{Itertools, MinMaxResult};
use rand::Rng;
use tracing::trace;

use super::*;

/// Number of uncovered edges incident to each node.
/// A selected node has residual degree `0`.
#[derive(Debug, Clone)]
pub(crate) struct ResidualDegrees {
    degrees: Vec<NumNodes>,
}

impl ResidualDegrees {
    pub fn new<G: AdjacencyList>(graph: &G) -> Self {
        Self {
            degrees: graph.total_degrees().collect(),
        }
    }

    /// Nodes with at least one uncovered incident edge
    pub fn candidates(&self) -> impl Iterator<Item = (Node, NumNodes)> + '_ {
        self.degrees
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d > 0)
            .map(|(u, &d)| (u as Node, d))
    }

    /// Candidate with maximum residual degree; smallest id on ties
    pub fn max_node(&self) -> Option<Node> {
        self.candidates()
            .max_by(|(u, du), (v, dv)| du.cmp(dv).then(v.cmp(u)))
            .map(|(u, _)| u)
    }

    /// Marks all edges incident to `u` as covered
    pub fn select<G: AdjacencyList>(&mut self, graph: &G, u: Node) {
        for v in graph.undirected_neighbors_of(u) {
            let d = &mut self.degrees[v as usize];
            *d = d.saturating_sub(1);
        }
        self.degrees[u as usize] = 0;
    }
}

/// Greedy randomized construction of a cover.
///
/// Until every edge is covered: among all nodes with positive residual degree (with minimum `min` and
/// maximum `max`), the *restricted candidate list* contains those with residual degree at least
/// `min + floor(alpha * (max - min))`. One of them is chosen uniformly at random and added to the cover.
///
/// `alpha = 1` only admits nodes of maximum residual degree (greedy), `alpha = 0` admits every
/// node with an uncovered edge (uniform random). `alpha` is clamped into `[0, 1]`.
pub fn randomized_construction<G, R>(graph: &G, alpha: f64, rng: &mut R) -> Cover
where
    G: AdjacencyList,
    R: Rng,
{
    let alpha = alpha.clamp(0.0, 1.0);
    let mut residual = ResidualDegrees::new(graph);
    let mut cover = Cover::new();

    loop {
        let (min, max) = match residual.candidates().map(|(_, d)| d).minmax() {
            MinMaxResult::NoElements => break,
            MinMaxResult::OneElement(d) => (d, d),
            MinMaxResult::MinMax(min, max) => (min, max),
        };

        let threshold = min + (alpha * (max - min) as f64) as NumNodes;
        let rcl = residual
            .candidates()
            .filter(|&(_, d)| d >= threshold)
            .map(|(u, _)| u)
            .collect_vec();

        let u = rcl[rng.random_range(0..rcl.len())];
        trace!(node = u, rcl = rcl.len(), min, max, "select");

        residual.select(graph, u);
        cover.push(u);
    }

    cover
}
