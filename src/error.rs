/*!
# Errors

All fallible operations of this crate return [`Result`], whose error type [`GraphError`] covers
- violations of the graph model's invariants (duplicate edges, self-loops, duplicate labels, bad weights),
- precondition violations of the algorithms (empty, disconnected or unweighted graphs),
- failures while reading or writing the persisted form.

Queries that simply have no answer (e.g. no path between two vertices) are **not** errors and
return `None` instead.
*/

use thiserror::Error;

use crate::{Node, Weight};

/// Error type of all fallible operations in this crate
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("there is already an edge between {u} and {v}")]
    DuplicateEdge { u: String, v: String },

    #[error("cannot create an edge from vertex {0} to itself")]
    SelfLoop(String),

    #[error("all edges must be weighted to run this algorithm")]
    InvalidWeight,

    #[error("edge weights cannot be negative (got {0})")]
    NegativeWeight(Weight),

    #[error("cannot run algorithms on disconnected graphs")]
    DisconnectedGraph,

    #[error("cannot run algorithms on empty graphs")]
    EmptyGraph,

    #[error("there is already a vertex labelled {0}")]
    DuplicateLabel(String),

    #[error("vertex {0} does not exist")]
    UnknownVertex(Node),

    #[error("no vertex is labelled {0}")]
    UnknownLabel(String),

    #[error("{found} odd vertices exceed the configured limit of {limit}")]
    TooManyOddVertices { found: usize, limit: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Shorthand for results of this crate
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
