/*!
# Bipartite Graph Algorithms

A bipartition is represented by a [`NodeBitSet`]:
nodes in the set are on the **right** side, all other nodes on the **left** side.

Candidates are proposed by a BFS (a node goes to the side opposite of its predecessor)
and verified afterwards.
*/

use super::*;

/// Testing and computing bipartitions
pub trait BipartiteTest: AdjacencyList + Sized {
    /// Returns *true* if no edge connects two nodes on the same side
    fn is_bipartition(&self, bipartition: &NodeBitSet) -> bool {
        self.edges(false)
            .all(|Edge(u, v)| bipartition.contains(u as usize) != bipartition.contains(v as usize))
    }

    /// Two-colors the nodes reachable from node `0` and returns *false* on a conflict.
    /// Edges outside of this component are not inspected; a graph without nodes is bipartite.
    /// For directed graphs the search follows edges in their orientation.
    ///
    /// See [`BipartiteTest::is_bipartite_all_components`] for a check of the whole graph.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjList::new(10, GraphKind::undirected());
    /// g.connect_path(0..10).unwrap();
    /// assert!(g.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        if self.is_empty() {
            return true;
        }

        let (right, reached) = propose_bipartition(self.bfs_with_predecessor(0).along_out_edges(), false);
        reached.ones().all(|u| {
            self.neighbor_nodes_of(u as Node)
                .all(|v| right.contains(u) != right.contains(v as usize))
        })
    }

    /// Computes a bipartition of the whole graph, if one exists
    fn compute_bipartition(&self) -> Option<NodeBitSet> {
        let (right, _) = propose_bipartition(BFSWithPredecessor::new_unstarted(self), true);
        self.is_bipartition(&right).then_some(right)
    }

    /// Returns *true* if every connected component is bipartite
    fn is_bipartite_all_components(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G> BipartiteTest for G where G: AdjacencyList + Sized {}

/// Runs the search (restarting at unvisited nodes if requested) and returns
/// the proposed right side together with the set of reached nodes.
/// The proposal is valid iff the searched part of the graph is bipartite.
fn propose_bipartition<G>(mut bfs: BFSWithPredecessor<'_, G>, restart: bool) -> (NodeBitSet, NodeBitSet)
where
    G: AdjacencyList,
{
    let mut right = NodeBitSet::with_capacity(bfs.visited().len());

    loop {
        for (node, pred) in bfs
            .by_ref()
            .filter_map(|x| Some((x.item(), x.predecessor()?)))
        {
            if !right.contains(pred as usize) {
                right.insert(node as usize);
            }
        }

        if !restart || !bfs.try_restart_at_unvisited() {
            break;
        }
    }

    (right, bfs.visited().clone())
}
