use thiserror::Error;

pub type OhmResult<T> = Result<T, OhmError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OhmError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative value for {what}: {value}")]
    Negative { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
