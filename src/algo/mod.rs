/*!
# Graph Algorithms

Read-only structural queries built on top of the traits in [`crate::ops`].
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and call them as methods on any graph representation.

Unless stated otherwise, algorithms work on the *underlying undirected graph*:
for directed graphs, connectivity means weak connectivity.

Bridges and articulation points are offered twice: the plain variants delete every edge/node
in turn and recount components (`O(m * (n + m))` and `O(n * (n + m))`), the `*_lowlink`
variants run a single depth-first search and return the same sets.
*/

mod articulation;
mod bipartite;
mod bridges;
mod connectivity;
mod properties;
mod shortest_path;
mod traversal;

use crate::prelude::*;

pub use articulation::*;
pub use bipartite::*;
pub use bridges::*;
pub use connectivity::*;
pub use properties::*;
pub use shortest_path::*;
pub use traversal::*;
