//! Errors raised at the boundary of a graph store and by the loaders.

use std::{io, path::PathBuf};

use crate::{Edge, Node, NumNodes};

/// Result type used throughout the crate
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

/// Errors returned by store operations and graph loaders.
///
/// Store operations never leave the graph in a modified state when they fail.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A node id outside of `0..order` was passed.
    #[error("invalid vertex id {id}: graph has {order} vertices")]
    InvalidVertexId { id: Node, order: NumNodes },

    /// An edge `(u, u)` was about to be inserted.
    #[error("self-loop at vertex {0} rejected")]
    SelfLoopRejected(Node),

    /// The edge to be removed does not exist.
    #[error("edge {0} not found")]
    EdgeNotFound(Edge),

    /// A description or configuration file could not be opened or read.
    #[error("cannot read {path:?}: {source}")]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration names a backend other than matrix/list.
    #[error("unknown backend {0:?}: expected \"matriz\" or \"lista\"")]
    UnknownBackend(String),

    /// A token in a graph description could not be parsed.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },
}

impl GraphError {
    /// Short stable identifier of the error kind, used for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidVertexId { .. } => "invalid_vertex_id",
            Self::SelfLoopRejected(_) => "self_loop_rejected",
            Self::EdgeNotFound(_) => "edge_not_found",
            Self::UnreadableSource { .. } => "unreadable_source",
            Self::UnknownBackend(_) => "unknown_backend",
            Self::MalformedInput { .. } => "malformed_input",
        }
    }
}
