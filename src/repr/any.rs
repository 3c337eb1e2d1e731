use std::{fmt::Display, str::FromStr};

use itertools::Either;

use super::*;

/// Identifier of a storage backend
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    /// [`AdjMatrix`]
    Matrix,
    /// [`AdjList`]
    #[default]
    List,
}

impl FromStr for Backend {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "matriz" | "matrix" => Ok(Backend::Matrix),
            "lista" | "list" => Ok(Backend::List),
            _ => Err(GraphError::UnknownBackend(s.to_string())),
        }
    }
}

impl Backend {
    /// Returns the [`GraphNew::MAX_ORDER`] of the backend's representation
    pub fn max_order(&self) -> NumNodes {
        match self {
            Backend::Matrix => AdjMatrix::MAX_ORDER,
            Backend::List => AdjList::MAX_ORDER,
        }
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Matrix => write!(f, "matrix"),
            Backend::List => write!(f, "list"),
        }
    }
}

/// A graph whose representation is chosen at runtime.
/// Every operation is forwarded to the wrapped backend.
#[derive(Debug, Clone)]
pub enum AnyGraph {
    Matrix(AdjMatrix),
    List(AdjList),
}

macro_rules! dispatch {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            AnyGraph::Matrix($g) => $body,
            AnyGraph::List($g) => $body,
        }
    };
}

macro_rules! dispatch_iter {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            AnyGraph::Matrix($g) => Either::Left($body),
            AnyGraph::List($g) => Either::Right($body),
        }
    };
}

impl AnyGraph {
    /// Creates an empty graph with `n` singleton nodes using the given backend
    pub fn new(backend: Backend, n: NumNodes, kind: GraphKind) -> Self {
        match backend {
            Backend::Matrix => AnyGraph::Matrix(AdjMatrix::new(n, kind)),
            Backend::List => AnyGraph::List(AdjList::new(n, kind)),
        }
    }

    /// Returns the backend currently in use
    pub fn backend(&self) -> Backend {
        match self {
            AnyGraph::Matrix(_) => Backend::Matrix,
            AnyGraph::List(_) => Backend::List,
        }
    }
}

impl From<AdjMatrix> for AnyGraph {
    fn from(graph: AdjMatrix) -> Self {
        AnyGraph::Matrix(graph)
    }
}

impl From<AdjList> for AnyGraph {
    fn from(graph: AdjList) -> Self {
        AnyGraph::List(graph)
    }
}

impl GraphType for AnyGraph {
    fn kind(&self) -> GraphKind {
        dispatch!(self, g => g.kind())
    }
}

impl GraphNodeOrder for AnyGraph {
    fn number_of_nodes(&self) -> NumNodes {
        dispatch!(self, g => g.number_of_nodes())
    }
}

impl GraphEdgeOrder for AnyGraph {
    fn number_of_edges(&self) -> NumEdges {
        dispatch!(self, g => g.number_of_edges())
    }
}

impl AdjacencyList for AnyGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        dispatch_iter!(self, g => g.neighbors_of(u))
    }

    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        dispatch_iter!(self, g => g.in_neighbors_of(u))
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        dispatch!(self, g => g.out_degree_of(u))
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        dispatch!(self, g => g.in_degree_of(u))
    }
}

impl AdjacencyTest for AnyGraph {
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight> {
        dispatch!(self, g => g.edge_weight(u, v))
    }
}

impl VertexWeights for AnyGraph {
    fn vertex_weight(&self, u: Node) -> Weight {
        dispatch!(self, g => g.vertex_weight(u))
    }

    fn set_vertex_weight(&mut self, u: Node, weight: Weight) -> Result<()> {
        dispatch!(self, g => g.set_vertex_weight(u, weight))
    }
}

impl GraphEdgeEditing for AnyGraph {
    fn insert_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<bool> {
        dispatch!(self, g => g.insert_edge(u, v, weight))
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> Result<Weight> {
        dispatch!(self, g => g.remove_edge(u, v))
    }
}

impl GraphNodeEditing for AnyGraph {
    fn insert_vertex(&mut self) -> Node {
        dispatch!(self, g => g.insert_vertex())
    }

    fn delete_vertex(&mut self, u: Node) -> Result<()> {
        dispatch!(self, g => g.delete_vertex(u))
    }
}
