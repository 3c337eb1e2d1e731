/*!
# Edge Covers

An *edge cover* (in the sense used throughout this crate) is a set of nodes touching every edge,
i.e. every edge has at least one endpoint in the set.
Finding a smallest one is NP-hard, so this module provides heuristics:

- [`EdgeCover::greedy_cover`]: deterministic, always takes a node covering the most uncovered edges,
- [`EdgeCover::randomized_construction`]: greedy with a *restricted candidate list* controlled by `alpha`
  (`1` is greedy, `0` is uniform random),
- [`EdgeCover::local_search`]: drops redundant nodes from a cover,
- [`Grasp`]: repeated construction + local search for a fixed `alpha`,
- [`ReactiveGrasp`]: GRASP that learns which `alpha` produces small covers.

Randomized procedures take the random number generator as an argument;
given the same seed they produce the same cover on every representation.

```rust
use wgraphs::{prelude::*, cover::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let graph = AdjMatrix::from_edges(3, GraphKind::undirected(), [(0, 1), (1, 2)]).unwrap();
let rng = &mut Pcg64Mcg::seed_from_u64(5);

let cover = ReactiveGrasp::new().iterations(50).solve(&graph, rng);
assert_eq!(cover, vec![1]);
```
*/

use crate::prelude::*;

mod construction;
mod grasp;
mod local_search;
mod reactive;

pub use construction::*;
pub use grasp::*;
pub use local_search::*;
pub use reactive::*;

/// A set of nodes in the order they were selected
pub type Cover = Vec<Node>;

/// Edge cover heuristics as methods of the graph
pub trait EdgeCover: AdjacencyList + Sized {
    /// Returns *true* if every edge has at least one endpoint in `cover`.
    /// Ids that are not nodes of the graph are ignored.
    fn verify_cover(&self, cover: &[Node]) -> bool {
        let in_cover = node_bitset_with(
            self.number_of_nodes(),
            cover.iter().copied().filter(|&u| self.contains_node(u)),
        );
        self.unique_edges()
            .all(|Edge(u, v)| in_cover.contains(u as usize) || in_cover.contains(v as usize))
    }

    /// Deterministic greedy cover: repeatedly takes the node with the most uncovered
    /// incident edges (smallest id on ties) until all edges are covered
    fn greedy_cover(&self) -> Cover {
        let mut residual = ResidualDegrees::new(self);
        let mut cover = Cover::new();
        while let Some(u) = residual.max_node() {
            residual.select(self, u);
            cover.push(u);
        }
        cover
    }

    /// Greedy randomized construction with restricted candidate list.
    /// See [`randomized_construction`] for details.
    fn randomized_construction<R: rand::Rng>(&self, alpha: f64, rng: &mut R) -> Cover {
        randomized_construction(self, alpha, rng)
    }

    /// Removes redundant nodes from a cover.
    /// See [`local_search`] for details.
    fn local_search(&self, cover: Cover) -> Cover {
        local_search(self, cover)
    }
}

impl<G> EdgeCover for G where G: AdjacencyList + Sized {}
