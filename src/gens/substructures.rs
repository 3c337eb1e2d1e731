/*!
# Substructure Generators

Utility methods to add common motifs (**paths**, **cycles**, **cliques**) to an existing graph.

# Example

```rust
use wgraphs::{prelude::*, gens::*};

let mut g = AdjList::new(5, GraphKind::directed());
g.connect_path([0, 1, 2]).unwrap();
g.connect_cycle([2, 3, 4]).unwrap();
g.connect_clique([0, 2, 4]).unwrap();

assert_eq!(
    g.ordered_edges(false).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(0, 2), Edge(0, 4), Edge(1, 2), Edge(2, 0), Edge(2, 3), Edge(2, 4), Edge(3, 4), Edge(4, 0), Edge(4, 2)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph. Edges use the default weight.
///
/// All methods stop at the first edge the graph rejects and return its error.
pub trait GeneratorSubstructures {
    /// Connects consecutive nodes of the sequence by an edge
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>;

    /// Connects consecutive nodes of the sequence and the last node back to the first.
    /// Sequences with fewer than three nodes are connected as a path.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>;

    /// Connects every pair of distinct nodes; in directed graphs in both directions
    fn connect_clique<C>(&mut self, nodes: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes_in_cycle.into_iter().collect_vec();
        self.connect_path(nodes.iter().copied())?;

        if nodes.len() > 2 {
            self.add_edge(nodes[nodes.len() - 1], nodes[0])?;
        }
        Ok(())
    }

    fn connect_clique<C>(&mut self, nodes: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for &u in &nodes {
            for &v in &nodes {
                if u != v {
                    self.add_edge(u, v)?;
                }
            }
        }
        Ok(())
    }
}
