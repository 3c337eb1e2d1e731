/*!
Graph traversal iterators.

This module provides:
- A generic traversal iterator [`TraversalSearch`] (BFS and DFS, with and without predecessor tracking).
- The [`Traversal`] trait exposing these iterators directly as methods on graph data structures.

Traversals run on the *underlying undirected graph* by default: for directed graphs both
out- and in-neighbors are followed. Use [`TraversalSearch::along_out_edges`] to follow the orientation.
Single nodes can be excluded and a single edge can be skipped, which lets connectivity queries
simulate deletions without mutating the graph.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a traversal iterator.
///
/// Two implementations are provided:
/// - [`Node`]: stores only the node (no predecessor information).
/// - [`PredecessorOfNode`]: stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)`.
/// The absence of a predecessor is encoded by setting both entries to the same node.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// The frontier of a traversal.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T>: Default {
    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn push(&mut self, u: T) {
        Vec::push(self, u)
    }
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Every node is yielded at most once; nodes are marked visited when they are pushed.
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    follow_incoming: bool,
    skipped_edge: Option<Edge>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator visiting nodes in breadth-first order.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A DFS traversal iterator visiting nodes in depth-first order.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A BFS traversal iterator that records the predecessor of each node.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        let graph = self.graph;
        let directed = graph.is_directed();
        let skipped = self.skipped_edge;

        let outgoing = graph.neighbors_of(u).map(move |(v, _)| (Edge(u, v), v));
        let incoming = (directed && self.follow_incoming)
            .then(|| graph.in_neighbors_of(u))
            .into_iter()
            .flatten()
            .map(move |(v, _)| (Edge(v, u), v));

        for (edge, v) in outgoing.chain(incoming) {
            if skipped == Some(edge) || (!directed && skipped == Some(edge.reverse())) {
                continue;
            }

            if !self.visited.put(v as usize) {
                self.sequencer.push(I::new_with_predecessor(u, v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.count_ones(..) + self.sequencer.cardinality()),
        )
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(graph.contains_node(start));
        let mut search = Self::new_unstarted(graph);
        search.visited.insert(start as usize);
        search.sequencer.push(I::new_without_predecessor(start));
        search
    }

    /// Creates a traversal iterator with an empty frontier.
    /// It yields nothing until [`TraversalSearch::try_restart_at_unvisited`] is called.
    pub fn new_unstarted(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            sequencer: S::default(),
            follow_incoming: true,
            skipped_edge: None,
            _item: PhantomData,
        }
    }

    /// Returns the set of nodes visited (or excluded) so far
    pub fn visited(&self) -> &NodeBitSet {
        &self.visited
    }

    /// Returns *true* if `u` was visited (or excluded)
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.contains(u as usize)
    }

    /// Tries to restart the search at the smallest unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        match (0..self.graph.len()).find(|&u| !self.visited.contains(u)) {
            None => false,
            Some(x) => {
                self.visited.insert(x);
                self.sequencer.push(I::new_without_predecessor(x as Node));
                true
            }
        }
    }

    /// For directed graphs, only follow edges in their orientation.
    /// Has no effect on undirected graphs.
    pub fn along_out_edges(mut self) -> Self {
        self.follow_incoming = false;
        self
    }

    /// Excludes a node from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that node will be taken.
    ///
    /// # Warning
    /// Calling this method has no effect if the node is already on the stack. It is therefore highly
    /// recommended to call this method directly after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.insert(u as usize);
    }

    /// Builder-variant of [`TraversalSearch::exclude_node`]
    pub fn with_node_excluded(mut self, u: Node) -> Self {
        self.exclude_node(u);
        self
    }

    /// Ignores the edge `(u, v)` during the search as if it was deleted.
    /// In undirected graphs this also ignores `(v, u)`; in directed graphs only the arc `(u, v)` is ignored.
    pub fn skip_edge(&mut self, edge: Edge) {
        self.skipped_edge = Some(edge);
    }

    /// Builder-variant of [`TraversalSearch::skip_edge`]
    pub fn with_edge_skipped(mut self, edge: Edge) -> Self {
        self.skip_edge(edge);
        self
    }
}

/// Traversal algorithms as methods of the graph
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator traversing nodes in breadth-first-search order
    /// ** Panics if `start >= n` **
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator traversing nodes in depth-first-search order
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns an iterator traversing nodes in breadth-first-search order
    /// together with their predecessor in the search tree.
    /// ** Panics if `start >= n` **
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns *true* if there is a path from `u` to `v`, ignoring edge orientation
    /// ** Panics if `u >= n || v >= n` **
    fn is_reachable(&self, u: Node, v: Node) -> bool {
        self.bfs(u).any(|x| x == v)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
