/*!
# Graph Operations

The capability traits every graph representation implements.
Algorithms in [`crate::algo`] and solvers in [`crate::cover`] are written against these traits only,
never against a concrete representation.

[`GraphStore`] bundles all of them and is implemented automatically for every type providing the full set.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::{error::*, *};

/// Flags fixed at construction time of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GraphKind {
    /// Edges have an orientation
    pub directed: bool,
    /// Nodes carry a weight used as traversal cost
    pub vertex_weighted: bool,
    /// Edges carry a weight; otherwise every edge weighs [`DEFAULT_EDGE_WEIGHT`]
    pub edge_weighted: bool,
}

impl GraphKind {
    /// Undirected graph without any weights
    pub const fn undirected() -> Self {
        Self {
            directed: false,
            vertex_weighted: false,
            edge_weighted: false,
        }
    }

    /// Directed graph without any weights
    pub const fn directed() -> Self {
        Self {
            directed: true,
            vertex_weighted: false,
            edge_weighted: false,
        }
    }

    /// Enables vertex weights
    pub const fn with_vertex_weights(mut self) -> Self {
        self.vertex_weighted = true;
        self
    }

    /// Enables edge weights
    pub const fn with_edge_weights(mut self) -> Self {
        self.edge_weighted = true;
        self
    }
}

/// Provides the flags a graph was created with
pub trait GraphType {
    /// Returns the flags of the graph
    fn kind(&self) -> GraphKind;

    /// Returns *true* if edges have an orientation
    fn is_directed(&self) -> bool {
        self.kind().directed
    }

    /// Returns *true* if edges have no orientation
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }

    /// Returns *true* if nodes carry weights
    fn is_vertex_weighted(&self) -> bool {
        self.kind().vertex_weighted
    }

    /// Returns *true* if edges carry weights
    fn is_edge_weighted(&self) -> bool {
        self.kind().edge_weighted
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns the range of all nodes.
    /// The range does not borrow self and may be used while mutating the graph.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::with_capacity(self.len())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns *true* if `u` is a node of the graph
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns `InvalidVertexId` if `u` is not a node of the graph
    fn check_node(&self, u: Node) -> Result<()> {
        if self.contains_node(u) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertexId {
                id: u,
                order: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// An undirected edge is counted once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

macro_rules! node_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(|u| self.$single(u))
        }
    };
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphType + Sized {
    /// Returns an iterator over the out-neighbors of a given vertex together with the edge weight.
    /// For undirected graphs these are all neighbors.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns an iterator over nodes `v` with edges `(v, u)` together with the edge weight.
    /// For undirected graphs this equals `neighbors_of`.
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    fn out_degree_of(&self, u: Node) -> NumNodes;

    /// Returns the number of incoming edges of `u`
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_degree_of(u)
    }

    /// Returns the degree of `u` or `InvalidVertexId`
    fn try_degree_of(&self, u: Node) -> Result<NumNodes> {
        self.check_node(u)?;
        Ok(self.degree_of(u))
    }

    /// Returns the number of edges incident to `u` regardless of their orientation
    /// ** Panics if `u >= n` **
    fn total_degree_of(&self, u: Node) -> NumNodes {
        if self.is_directed() {
            self.out_degree_of(u) + self.in_degree_of(u)
        } else {
            self.degree_of(u)
        }
    }

    /// Returns an iterator over the out-neighbors of a given vertex without weights
    /// ** Panics if `u >= n` **
    fn neighbor_nodes_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns the neighbors of `u` in the underlying undirected graph.
    /// For directed graphs, nodes connected in both directions are returned twice.
    /// ** Panics if `u >= n` **
    fn undirected_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        let incoming = self
            .is_directed()
            .then(|| self.in_neighbors_of(u))
            .into_iter()
            .flatten();
        self.neighbors_of(u).chain(incoming).map(|(v, _)| v)
    }

    node_iterator!(degrees, degree_of, NumNodes);
    node_iterator!(total_degrees, total_degree_of, NumNodes);

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbor_nodes_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all stored edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all stored edges in sorted order.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.edges(only_normalized).sorted()
    }

    /// Returns every logical edge exactly once:
    /// arcs of directed graphs and normalized edges of undirected graphs.
    fn unique_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges(self.is_undirected())
    }

    /// Returns every logical edge exactly once together with its weight
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        let only_normalized = self.is_undirected();
        self.vertices_range().flat_map(move |u| {
            self.neighbors_of(u)
                .filter(move |&(v, _)| !only_normalized || u <= v)
                .map(move |(v, w)| (Edge(u, v), w))
        })
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns the weight of the edge `(u, v)` if it exists.
    /// ** Panics if `u >= n || v >= n` **
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge_weight(u, v).is_some()
    }

    /// Returns *true* if `(u, v)` or `(v, u)` exists.
    /// ** Panics if `u >= n || v >= n` **
    fn is_adjacent(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) || self.has_edge(v, u)
    }
}

/// Access to node weights
pub trait VertexWeights: GraphNodeOrder {
    /// Returns the weight of `u`
    /// ** Panics if `u >= n` **
    fn vertex_weight(&self, u: Node) -> Weight;

    /// Updates the weight of `u`
    fn set_vertex_weight(&mut self, u: Node, weight: Weight) -> Result<()>;
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Largest number of nodes readers will allocate for this representation
    const MAX_ORDER: NumNodes = NumNodes::MAX;

    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes, kind: GraphKind) -> Self;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing {
    /// Adds the edge `(u, v)` with the given weight; undirected graphs also store `(v, u)`.
    /// If the edge is already present, its weight is overwritten.
    /// Returns *true* exactly if the edge was not present previously.
    ///
    /// Graphs without edge weights ignore `weight` and store [`DEFAULT_EDGE_WEIGHT`].
    fn insert_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<bool>;

    /// Adds the edge `(u, v)` with the default weight
    fn add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.insert_edge(u, v, DEFAULT_EDGE_WEIGHT)
    }

    /// Adds all edges in the collection with the default weight
    fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    /// Removes the edge `(u, v)` (and `(v, u)` for undirected graphs) and returns its weight.
    /// Returns `EdgeNotFound` without changing the graph if the edge does not exist.
    fn remove_edge(&mut self, u: Node, v: Node) -> Result<Weight>;
}

/// Provides functions to insert/delete nodes
pub trait GraphNodeEditing {
    /// Appends a singleton node of weight [`DEFAULT_NODE_WEIGHT`] and returns its id
    fn insert_vertex(&mut self) -> Node;

    /// Removes `u` and all incident edges.
    /// Every node `v > u` is renamed to `v - 1` afterwards, keeping the ids dense.
    fn delete_vertex(&mut self, u: Node) -> Result<()>;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges<I>(n: NumNodes, kind: GraphKind, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges<I>(n: NumNodes, kind: GraphKind, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut graph = Self::new(n, kind);
        graph.add_edges(edges)?;
        Ok(graph)
    }
}

/// Everything a graph representation has to provide to be analyzed and covered
pub trait GraphStore:
    GraphType
    + GraphNodeOrder
    + GraphEdgeOrder
    + AdjacencyList
    + AdjacencyTest
    + VertexWeights
    + GraphEdgeEditing
    + GraphNodeEditing
    + Clone
{
}

impl<G> GraphStore for G where
    G: GraphType
        + GraphNodeOrder
        + GraphEdgeOrder
        + AdjacencyList
        + AdjacencyTest
        + VertexWeights
        + GraphEdgeEditing
        + GraphNodeEditing
        + Clone
{
}
