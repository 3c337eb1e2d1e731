/*!
# Graph Generators

Helpers to build test and benchmark instances:

- [`GeneratorSubstructures`] adds **paths**, **cycles** and **cliques** to an existing graph,
- [`Gnp`] streams the edges of an Erdős–Rényi `G(n,p)` graph,
- [`RandomGraph`] builds whole graph instances from these generators.

Generators follow the builder pattern and take the random number generator explicitly:

```rust
use wgraphs::{prelude::*, gens::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(1);
let graph = AdjList::gnp(rng, 20, GraphKind::undirected(), 0.2);
assert_eq!(graph.number_of_nodes(), 20);
```
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for building full graph instances from random models
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph without self-loops
    fn gnp<R>(rng: &mut R, n: NumNodes, kind: GraphKind, p: f64) -> Self
    where
        R: Rng;

    /// Creates a random `G(n,p)` graph with `p = avg_deg / n`
    fn gnp_avg_deg<R>(rng: &mut R, n: NumNodes, kind: GraphKind, avg_deg: f64) -> Self
    where
        R: Rng,
    {
        Self::gnp(rng, n, kind, (avg_deg / n.max(1) as f64).clamp(0.0, 1.0))
    }
}

impl<G> RandomGraph for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, kind: GraphKind, p: f64) -> Self
    where
        R: Rng,
    {
        let mut graph = Self::new(n, kind);
        for Edge(u, v) in Gnp::new().nodes(n).prob(p).directed(kind.directed).generate(rng) {
            let inserted = graph.add_edge(u, v);
            debug_assert!(matches!(inserted, Ok(true)));
        }
        graph
    }
}
