use crate::graph::VertexId;
use thiserror::Error;

/// Errors surfaced by graph operations and path queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An operation referenced a vertex that was never registered.
    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: VertexId },

    /// A path was requested between two vertices with no connecting route.
    #[error("no path from {from} to {to}")]
    NoPath { from: VertexId, to: VertexId },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
