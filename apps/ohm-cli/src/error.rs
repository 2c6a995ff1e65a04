//! Error type for the command-line front end.

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Project(#[from] ohm_project::ProjectError),

    #[error("{0}")]
    Reduce(#[from] ohm_reduce::ReduceError),

    #[error("{0}")]
    Solver(#[from] ohm_solver::SolverError),

    #[error("Unknown node '{0}'")]
    UnknownNode(String),

    #[error("No terminals given: pass --from and --to or declare `terminals` in the file")]
    MissingTerminals,
}

pub type CliResult<T> = Result<T, CliError>;
