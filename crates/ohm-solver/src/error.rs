//! Error types for solver operations.

use ohm_core::OhmError;
use ohm_graph::GraphError;
use ohm_reduce::ReduceError;
use thiserror::Error;

/// Errors that can occur while computing an equivalent resistance.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Reduction error: {0}")]
    Reduce(#[from] ReduceError),

    #[error("No node labelled '{label}'")]
    UnknownLabel { label: String },

    /// The linear solve failed or produced a value out of range.
    #[error("Numeric error: {0}")]
    Numeric(#[from] OhmError),
}

pub type SolverResult<T> = Result<T, SolverError>;
