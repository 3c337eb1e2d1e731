use rand::Rng;

use super::*;

/// `G(n,p)` graphs contain every possible edge between `n` nodes with probability `p`,
/// independent from each other.
///
/// Self-loops are never generated. For undirected graphs only normalized edges `(u, v)` with `u < v`
/// are generated, so every unordered pair is drawn exactly once.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: f64,
    directed: bool,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `n`
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "p must be a probability");
        self.p = prob;
        self
    }

    /// Generate arcs `(u, v)` and `(v, u)` independently
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Creates a lazy iterator over random `G(n,p)` edges
    pub fn stream<'a, R: Rng>(&self, rng: &'a mut R) -> impl Iterator<Item = Edge> + 'a {
        let Self { n, p, directed } = *self;
        (0..n)
            .flat_map(move |u| {
                let first = if directed { 0 } else { u + 1 };
                (first..n).filter(move |&v| v != u).map(move |v| Edge(u, v))
            })
            .filter(move |_| rng.random_bool(p))
    }

    /// Generates a list of random edges
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Edge> {
        self.stream(rng).collect()
    }
}
