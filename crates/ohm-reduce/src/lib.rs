//! Series-parallel reduction of resistor networks.
//!
//! The engine works on a clone of the caller's [`Network`](ohm_graph::Network)
//! and rewrites it with four local rules until none applies:
//!
//! - self-loops are dropped,
//! - parallel edges merge into `1 / Σ 1/r` (zero if any member is a short),
//! - non-terminal nodes of degree 0 or 1 are pruned,
//! - non-terminal degree-2 nodes fuse their edges in series.
//!
//! If only the terminals survive the result is read off directly; otherwise
//! the residual graph is returned as
//! [`ReduceError::NonSeriesParallelResidual`]. Nothing here guesses a value
//! for a bridge.
//!
//! # Example
//!
//! ```
//! use ohm_graph::from_edge_list;
//! use ohm_reduce::{Resistance, equivalent_resistance};
//!
//! let net = from_edge_list(&[("A", "B", 6.0), ("A", "B", 3.0)]).unwrap();
//! let (a, b) = (net.find_node("A").unwrap(), net.find_node("B").unwrap());
//! let r = equivalent_resistance(&net, a, b).unwrap();
//! assert!((r.ohms() - 2.0).abs() < 1e-12);
//! ```

pub mod engine;
pub mod error;
pub mod extract;
pub mod rules;
pub mod schedule;

pub use engine::{Reduction, ReductionStats, equivalent_resistance, reduce, reduce_with};
pub use error::{ReduceError, ReduceResult};
pub use extract::{Resistance, extract};
pub use rules::Rewrite;
pub use schedule::{Fifo, Lifo, PickWith, Schedule};
