//! Error types for tour construction and improvement.

use thiserror::Error;

/// Errors raised by cost lookups, cycle manipulation, and heuristics.
///
/// Nodes are rendered with their `Debug` representation so the error type
/// stays independent of the node type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourError {
    /// The cost oracle has no cost for the arc `(tail, head)`.
    #[error("missing edge cost for arc ({tail}, {head})")]
    MissingEdgeCost { tail: String, head: String },

    /// A heuristic was given no nodes to route.
    #[error("node universe is empty")]
    EmptyUniverse,

    /// A cycle has too few entries for the requested operation.
    #[error("cycle with {len} entries is too short")]
    EmptyCycle { len: usize },

    /// A referenced node does not appear on the cycle (or in the universe).
    #[error("node {node} not found")]
    NodeNotFound { node: String },

    /// A flip was requested on a cycle with fewer than 5 entries.
    ///
    /// The cycle is left unchanged when this is returned.
    #[error("cycle with {len} entries cannot be flipped")]
    DegenerateFlip { len: usize },

    /// A node sequence is not a closed cycle over distinct nodes.
    #[error("invalid cycle: {0}")]
    InvalidCycle(String),

    /// The node is already on the cycle.
    #[error("node {node} is already on the cycle")]
    DuplicateNode { node: String },
}

impl TourError {
    pub(crate) fn missing_edge<N: std::fmt::Debug>(tail: &N, head: &N) -> Self {
        Self::MissingEdgeCost {
            tail: format!("{tail:?}"),
            head: format!("{head:?}"),
        }
    }

    pub(crate) fn node_not_found<N: std::fmt::Debug>(node: &N) -> Self {
        Self::NodeNotFound {
            node: format!("{node:?}"),
        }
    }
}

/// Result type alias for tour operations.
pub type Result<T> = std::result::Result<T, TourError>;
