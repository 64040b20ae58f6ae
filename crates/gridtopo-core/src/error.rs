//! Error taxonomy for topology construction and queries.
//!
//! Every variant describes malformed input. None of them are retried; callers
//! get them back unchanged from [`TopologyGraph::new`](crate::TopologyGraph::new)
//! or from the start of a query.
//!
//! # Example
//!
//! ```
//! use gridtopo_core::{EdgeId, TopologyError};
//!
//! let err = TopologyError::EdgeAlreadyDisabled(EdgeId::new(7));
//! assert!(err.to_string().contains("Edge#7"));
//! ```

use crate::{EdgeId, VertexId};
use std::fmt;
use thiserror::Error;

/// Which identifier lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// A vertex referenced by an endpoint pair.
    Vertex,
    /// An edge named in a query.
    Edge,
    /// The designated source vertex.
    Source,
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IdKind::Vertex => "vertex",
            IdKind::Edge => "edge",
            IdKind::Source => "source vertex",
        };
        f.write_str(name)
    }
}

/// Unified error type for topology operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// An identifier is declared twice, either as both a vertex and an edge
    /// or twice within the same list.
    #[error("identifier {id} is not unique across vertices and edges")]
    IdentifierCollision { id: i64 },

    /// A positional edge list does not line up with the edge identifiers.
    #[error("{list} has {actual} entries but there are {expected} edge ids")]
    LengthMismatch {
        list: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("unknown {kind} identifier {id}")]
    UnknownIdentifier { kind: IdKind, id: i64 },

    /// The enabled edges leave some vertices unreachable.
    #[error("network is not fully connected: {unreached} vertices unreachable over enabled edges")]
    NotFullyConnected { unreached: usize },

    /// The enabled edges contain a loop; `edge` is the one that closed it.
    #[error("network contains a cycle closed by {edge}")]
    ContainsCycle { edge: EdgeId },

    #[error("{0} is already disabled")]
    EdgeAlreadyDisabled(EdgeId),
}

impl TopologyError {
    pub(crate) fn unknown_vertex(id: VertexId) -> Self {
        TopologyError::UnknownIdentifier {
            kind: IdKind::Vertex,
            id: id.value(),
        }
    }

    pub(crate) fn unknown_source(id: VertexId) -> Self {
        TopologyError::UnknownIdentifier {
            kind: IdKind::Source,
            id: id.value(),
        }
    }

    pub(crate) fn unknown_edge(id: EdgeId) -> Self {
        TopologyError::UnknownIdentifier {
            kind: IdKind::Edge,
            id: id.value(),
        }
    }
}

/// Convenience type alias for Results using TopologyError.
pub type TopologyResult<T> = Result<T, TopologyError>;
