use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

/// Connected components of the underlying undirected graph.
/// For directed graphs these are the *weakly* connected components.
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over all connected components, ordered by their smallest node
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connected components; `0` for a graph without nodes
    fn count_components(&self) -> NumNodes {
        self.connected_components().count() as NumNodes
    }

    /// Returns *true* if the graph consists of exactly one connected component
    fn is_connected(&self) -> bool {
        self.count_components() == 1
    }

    /// Returns the number of connected components after deleting `u`
    /// ** Panics if `u >= n` **
    fn count_components_without_node(&self, u: Node) -> NumNodes {
        assert!(self.contains_node(u));
        self.connected_components().exclude_node(u).count() as NumNodes
    }

    /// Returns the number of connected components after deleting the edge `(u, v)`.
    /// The graph is not modified; the edge does not need to exist.
    fn count_components_without_edge(&self, edge: Edge) -> NumNodes {
        self.connected_components().skip_edge(edge).count() as NumNodes
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over the connected components of a graph.
/// Each component is yielded as a list of its nodes in BFS order.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: BFS<'a, G>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: BFS::new_unstarted(graph),
        }
    }

    /// Ignores `u` as if it was deleted
    pub fn exclude_node(mut self, u: Node) -> Self {
        self.bfs.exclude_node(u);
        self
    }

    /// Ignores `edge` as if it was deleted
    pub fn skip_edge(mut self, edge: Edge) -> Self {
        self.bfs.skip_edge(edge);
        self
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.bfs.try_restart_at_unvisited() {
            return None;
        }
        Some(self.bfs.by_ref().collect_vec())
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyList {}
