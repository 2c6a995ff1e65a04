//! Graph-specific error types.

use ohm_core::{EdgeId, NodeId, OhmError, Real};

pub type GraphResult<T> = Result<T, GraphError>;

/// Network construction and lookup errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Resistance is negative or not finite. The edge was not inserted.
    InvalidResistance {
        a: NodeId,
        b: NodeId,
        value: Real,
        source: OhmError,
    },

    /// A node ID does not refer to a live node.
    UnknownNode { node: NodeId },

    /// An edge ID does not refer to a live edge.
    UnknownEdge { edge: EdgeId },

    /// A terminal is not part of the network.
    UnknownTerminal { node: NodeId },

    /// Both terminals name the same node.
    IdenticalTerminals { node: NodeId },

    /// ID not found in index map.
    IdNotFound { what: &'static str },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidResistance { a, b, value, .. } => {
                write!(f, "Invalid resistance {} between nodes {} and {}", value, a, b)
            }
            GraphError::UnknownNode { node } => write!(f, "Node {} does not exist", node),
            GraphError::UnknownEdge { edge } => write!(f, "Edge {} does not exist", edge),
            GraphError::UnknownTerminal { node } => {
                write!(f, "Terminal {} is not a node of the network", node)
            }
            GraphError::IdenticalTerminals { node } => {
                write!(f, "Terminals must differ (both are node {})", node)
            }
            GraphError::IdNotFound { what } => write!(f, "{} not found in index map", what),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphError::InvalidResistance { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<GraphError> for OhmError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::InvalidResistance { source, .. } => source,
            other => OhmError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}
