//! ohm-core: stable foundation for ohmic.
//!
//! Contains:
//! - numeric (Real + tolerances + resistance/conductance helpers)
//! - ids (compact IDs for network objects)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{OhmError, OhmResult};
pub use ids::*;
pub use numeric::*;
