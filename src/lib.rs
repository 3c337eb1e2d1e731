/*!
`wgraphs` is a graph data structure & algorithms library for small to medium graphs that are
- optionally **w**eighted : Nodes and/or edges may carry a `f64` weight
- directed or undirected : fixed at construction time via [`GraphKind`](ops::GraphKind)

It answers structural queries (connectivity, bipartiteness, completeness, tree-ness, bridges,
articulation points, weighted distances) and approximates small **edge covers**
(sets of nodes touching every edge) with GRASP and Reactive GRASP.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Deleting a node renames every larger node `v` to `v - 1`, hence ids always stay dense.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

- In an **undirected** graph, `Edge(u, v)` is stored in both directions and counted once.
- In a **directed** graph, `Edge(u, v)` and `Edge(v, u)` are distinct.
- Self-loops are rejected.

### Available Representations

See the [`repr`] module:

- [`AdjMatrix`](crate::repr::AdjMatrix)
- [`AdjList`](crate::repr::AdjList)
- [`AnyGraph`](crate::repr::AnyGraph) if the representation is only known at runtime

# Design

Algorithms are implemented as traits on every type implementing the traits of [`ops`],
so `graph.count_components()` or `graph.has_bridge()` work on all representations.
Configurable procedures such as [`Grasp`](cover::Grasp) follow the *Builder* pattern
and take the random number generator as an explicit argument, making every run reproducible.

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and all representations,
- [`algo`] includes structural queries,
- [`cover`] includes edge cover construction, local search, GRASP and Reactive GRASP,
- [`gens`] includes helpers to add paths/cycles/cliques and random `G(n,p)` graphs,
- [`io`] reads the graph description and configuration formats,
- [`report`] bundles all structural queries into a printable summary.

```rust
use wgraphs::{prelude::*, algo::*, cover::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let mut graph = AdjList::new(4, GraphKind::undirected());
graph.add_edges([(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();

assert!(graph.is_bipartite());
assert_eq!(graph.count_components(), 1);

let rng = &mut Pcg64Mcg::seed_from_u64(1);
let cover = Grasp::new().alpha(0.3).iterations(20).solve(&graph, rng);
assert_eq!(cover.len(), 2);
assert!(graph.verify_cover(&cover));
```
*/

pub mod algo;
pub mod cover;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod report;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::{GraphError, Result};
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
