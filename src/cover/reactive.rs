use itertools::Itertools;
use rand::Rng;
use tracing::{debug, instrument, trace};

use super::*;

/// Exponent amplifying differences in average quality when reweighting alphas
const QUALITY_EXPONENT: i32 = 10;

/// Observations of a single alpha value during a [`ReactiveGrasp`] run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaStats {
    pub alpha: f64,
    /// Probability of choosing this alpha in the next iteration
    pub probability: f64,
    /// Sum of the sizes of all covers constructed with this alpha
    pub total_size: usize,
    /// Number of covers constructed with this alpha
    pub uses: usize,
}

impl AlphaStats {
    /// Average cover size, `None` if the alpha was never used
    pub fn average_size(&self) -> Option<f64> {
        (self.uses > 0).then(|| self.total_size as f64 / self.uses as f64)
    }
}

/// GRASP choosing `alpha` per iteration by roulette selection,
/// periodically shifting probability towards alphas that produced small covers.
///
/// The candidate alphas are `k / alphas` for `k = 1..=alphas`, initially equally likely.
/// Every `block_size` iterations the probabilities are recomputed by [`update_probabilities`].
#[derive(Debug, Clone, Copy)]
pub struct ReactiveGrasp {
    iterations: usize,
    alphas: usize,
    block_size: usize,
}

impl Default for ReactiveGrasp {
    fn default() -> Self {
        Self {
            iterations: 500,
            alphas: 10,
            block_size: 100,
        }
    }
}

impl ReactiveGrasp {
    /// Creates a solver with `500` iterations, `10` alphas and probability updates every `100` iterations
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of iterations
    /// ** Panics if `iterations == 0` **
    pub fn iterations(mut self, iterations: usize) -> Self {
        assert!(iterations > 0, "Reactive GRASP needs at least one iteration");
        self.iterations = iterations;
        self
    }

    /// Sets the number of candidate alphas
    /// ** Panics if `alphas == 0` **
    pub fn alphas(mut self, alphas: usize) -> Self {
        assert!(alphas > 0, "Reactive GRASP needs at least one alpha");
        self.alphas = alphas;
        self
    }

    /// Sets the number of iterations between probability updates
    /// ** Panics if `block_size == 0` **
    pub fn block_size(mut self, block_size: usize) -> Self {
        assert!(block_size > 0, "Block size must be positive");
        self.block_size = block_size;
        self
    }

    /// Returns the smallest cover found
    pub fn solve<G, R>(&self, graph: &G, rng: &mut R) -> Cover
    where
        G: AdjacencyList + GraphEdgeOrder,
        R: Rng,
    {
        self.solve_with_report(graph, rng).0
    }

    /// Returns the smallest cover found (the earliest on ties) together with the final statistics of every alpha.
    /// Returns an empty cover and the initial statistics without searching if the graph has no edges.
    #[instrument(level = "debug", skip_all, fields(iterations = self.iterations, alphas = self.alphas))]
    pub fn solve_with_report<G, R>(&self, graph: &G, rng: &mut R) -> (Cover, Vec<AlphaStats>)
    where
        G: AdjacencyList + GraphEdgeOrder,
        R: Rng,
    {
        let k = self.alphas;
        let mut stats = (1..=k)
            .map(|i| AlphaStats {
                alpha: i as f64 / k as f64,
                probability: 1.0 / k as f64,
                total_size: 0,
                uses: 0,
            })
            .collect_vec();

        if graph.is_singleton_graph() {
            return (Cover::new(), stats);
        }

        let mut best: Option<Cover> = None;
        for iteration in 0..self.iterations {
            let chosen = roulette(&stats, rng);
            let alpha = stats[chosen].alpha;

            let cover = local_search(graph, randomized_construction(graph, alpha, rng));
            trace!(iteration, alpha, size = cover.len(), "trial");

            stats[chosen].total_size += cover.len();
            stats[chosen].uses += 1;

            if best.as_ref().is_none_or(|b| cover.len() < b.len()) {
                debug!(iteration, alpha, size = cover.len(), "improved");
                best = Some(cover);
            }

            if (iteration + 1) % self.block_size == 0 {
                update_probabilities(&mut stats);
                debug!(
                    iteration,
                    probabilities = ?stats.iter().map(|s| s.probability).collect_vec(),
                    "reweighted alphas"
                );
            }
        }

        (best.unwrap_or_default(), stats)
    }
}

/// Picks an index with probability proportional to its `probability`
/// using one uniform draw against the cumulative sums.
fn roulette<R: Rng>(stats: &[AlphaStats], rng: &mut R) -> usize {
    let draw = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    for (i, s) in stats.iter().enumerate() {
        cumulative += s.probability;
        if draw < cumulative {
            return i;
        }
    }

    // rounding may leave the total slightly below 1
    stats
        .iter()
        .rposition(|s| s.probability > 0.0)
        .unwrap_or(stats.len() - 1)
}

/// Recomputes the probability of every alpha from its average cover size.
///
/// With `reference` the best (smallest) average over all used alphas, each used alpha gets weight
/// `(reference / average)^10` and each unused alpha weight `0`; the weights are normalized to sum `1`.
/// If no alpha was used yet, the probabilities stay unchanged.
pub fn update_probabilities(stats: &mut [AlphaStats]) {
    let Some(reference) = stats
        .iter()
        .filter_map(|s| s.average_size())
        .min_by(|a, b| a.total_cmp(b))
    else {
        return;
    };

    let weights = stats
        .iter()
        .map(|s| match s.average_size() {
            Some(avg) if avg > 0.0 => (reference / avg).powi(QUALITY_EXPONENT),
            Some(_) => 1.0,
            None => 0.0,
        })
        .collect_vec();

    let total: f64 = weights.iter().sum();
    for (s, w) in stats.iter_mut().zip(weights) {
        s.probability = w / total;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn stats(observations: &[(usize, usize)]) -> Vec<AlphaStats> {
        let k = observations.len();
        observations
            .iter()
            .enumerate()
            .map(|(i, &(total_size, uses))| AlphaStats {
                alpha: (i + 1) as f64 / k as f64,
                probability: 1.0 / k as f64,
                total_size,
                uses,
            })
            .collect()
    }

    #[test]
    fn probabilities_favour_small_averages() {
        let mut s = stats(&[(20, 2), (40, 2), (0, 0)]);
        update_probabilities(&mut s);

        let expected = 1.0 / (1.0 + 0.5f64.powi(10));
        assert!((s[0].probability - expected).abs() < 1e-12);
        assert!((s[1].probability - (1.0 - expected)).abs() < 1e-12);
        assert_eq!(s[2].probability, 0.0);
        assert!((s.iter().map(|s| s.probability).sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unobserved_probabilities_stay() {
        let mut s = stats(&[(0, 0), (0, 0)]);
        update_probabilities(&mut s);
        assert_eq!(s[0].probability, 0.5);
        assert_eq!(s[1].probability, 0.5);
    }

    #[test]
    fn roulette_respects_zero_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let mut s = stats(&[(0, 0), (0, 0), (0, 0)]);
        s[0].probability = 0.0;
        s[1].probability = 1.0;
        s[2].probability = 0.0;

        for _ in 0..100 {
            assert_eq!(roulette(&s, rng), 1);
        }
    }

    #[test]
    fn report() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let graph = AdjList::gnp(rng, 30, GraphKind::undirected(), 0.2);

        let (cover, report) = ReactiveGrasp::new()
            .iterations(250)
            .alphas(5)
            .block_size(50)
            .solve_with_report(&graph, rng);

        assert!(graph.verify_cover(&cover));
        assert_eq!(report.len(), 5);
        assert_eq!(report.iter().map(|s| s.uses).sum::<usize>(), 250);
        assert_eq!(
            report.iter().map(|s| s.alpha).collect_vec(),
            vec![0.2, 0.4, 0.6, 0.8, 1.0]
        );
        assert!((report.iter().map(|s| s.probability).sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn small_instances() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        let mut square = AdjMatrix::new(4, GraphKind::undirected());
        square.connect_cycle([0, 1, 2, 3]).unwrap();
        assert_eq!(ReactiveGrasp::new().iterations(50).solve(&square, rng).len(), 2);

        let mut path = AdjList::new(3, GraphKind::undirected());
        path.connect_path([0, 1, 2]).unwrap();
        assert_eq!(ReactiveGrasp::new().iterations(50).solve(&path, rng), vec![1]);

        let (cover, report) = ReactiveGrasp::new().solve_with_report(&AdjList::new(3, GraphKind::directed()), rng);
        assert!(cover.is_empty());
        assert!(report.iter().all(|s| s.uses == 0));
    }

    #[test]
    fn not_worse_than_mean_single_trial() {
        for seed in 0..5 {
            let rng = &mut Pcg64Mcg::seed_from_u64(seed);
            let edges = random_edges(rng, 40, 120, false);
            let graph = AdjList::from_edges(40, GraphKind::undirected(), edges.iter()).unwrap();

            let trials = (0..20)
                .map(|_| Grasp::new().alpha(0.5).iterations(1).solve(&graph, rng).len())
                .collect_vec();
            let mean = trials.iter().sum::<usize>() as f64 / trials.len() as f64;

            let reactive = ReactiveGrasp::new().iterations(200).solve(&graph, rng);
            assert!(graph.verify_cover(&reactive));
            assert!(reactive.len() as f64 <= mean);
        }
    }

    #[test]
    #[should_panic]
    fn zero_alphas() {
        ReactiveGrasp::new().alphas(0);
    }
}
