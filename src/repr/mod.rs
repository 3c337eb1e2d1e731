/*!
# Representations

Two interchangeable storage backends implementing all traits of [`crate::ops`]:

- [`AdjMatrix`]: an `order x order` table of optional edge weights.
  `O(1)` edge lookup, `O(n)` degree, `O(n^2)` space.
  Inserting nodes beyond the current capacity doubles the capacity.
- [`AdjList`]: one ordered `(neighbor, weight)` sequence per node (plus incoming sequences for directed graphs).
  `O(1)` amortized edge insertion, `O(deg)` lookup and removal.

[`AnyGraph`] wraps either of them when the representation is chosen at runtime (e.g. by a configuration file).
Both backends answer every query identically for the same logical graph.
*/

use crate::{error::*, ops::*, *};

mod any;
mod list;
mod matrix;
mod neighborhood;

pub use any::*;
pub use list::*;
pub use matrix::*;
pub use neighborhood::*;

pub(crate) mod macros {
    /// Implements the bookkeeping shared by all backends.
    /// Expects the fields `kind: GraphKind`, `weights: Vec<Weight>` (one per node) and `num_edges: NumEdges`.
    macro_rules! impl_common_graph_ops {
        ($struct:ident) => {
            impl GraphType for $struct {
                fn kind(&self) -> GraphKind {
                    self.kind
                }
            }

            impl GraphNodeOrder for $struct {
                fn number_of_nodes(&self) -> NumNodes {
                    self.weights.len() as NumNodes
                }
            }

            impl GraphEdgeOrder for $struct {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl VertexWeights for $struct {
                fn vertex_weight(&self, u: Node) -> Weight {
                    self.weights[u as usize]
                }

                fn set_vertex_weight(&mut self, u: Node, weight: Weight) -> Result<()> {
                    self.check_node(u)?;
                    self.weights[u as usize] = weight;
                    Ok(())
                }
            }
        };
    }

    pub(crate) use impl_common_graph_ops;

    /// Validates the endpoints of an edge that is about to be inserted
    macro_rules! check_new_edge {
        ($self:ident, $u:ident, $v:ident) => {
            $self.check_node($u)?;
            $self.check_node($v)?;
            if $u == $v {
                return Err(GraphError::SelfLoopRejected($u));
            }
        };
    }

    pub(crate) use check_new_edge;
}

/// Maps the weight passed on insertion to the stored weight
pub(crate) fn stored_edge_weight(kind: GraphKind, weight: Weight) -> Weight {
    if kind.edge_weighted {
        weight
    } else {
        DEFAULT_EDGE_WEIGHT
    }
}

#[cfg(test)]
crate::testing::test_graph_ops!(test_adj_matrix, AdjMatrix);

#[cfg(test)]
crate::testing::test_graph_ops!(test_adj_list, AdjList);
