//! Error types for reduction.

use ohm_core::OhmError;
use ohm_graph::{GraphError, Network};
use thiserror::Error;

/// Errors that can occur while collapsing a network.
#[derive(Error, Debug)]
pub enum ReduceError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// A combined resistance left the representable range, or a rewrite
    /// found the graph in a state it cannot act on.
    #[error("Numeric error: {0}")]
    Numeric(#[from] OhmError),

    /// Series/parallel rules reached a fixpoint with more than the two
    /// terminals left. The residual graph is attached for diagnostics.
    #[error(
        "Network is not series-parallel reducible: {nodes} nodes and {edges} edges remain"
    )]
    NonSeriesParallelResidual {
        residual: Box<Network>,
        nodes: usize,
        edges: usize,
    },
}

impl ReduceError {
    pub(crate) fn residual(network: Network) -> Self {
        Self::NonSeriesParallelResidual {
            nodes: network.node_count(),
            edges: network.edge_count(),
            residual: Box::new(network),
        }
    }
}

pub type ReduceResult<T> = Result<T, ReduceError>;
