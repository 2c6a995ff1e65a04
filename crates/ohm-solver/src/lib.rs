//! Equivalent-resistance queries for resistor networks.
//!
//! This crate ties the pieces together: a query clones the network, collapses
//! it with series/parallel rewrites (`ohm-reduce`), and, when a bridge blocks
//! the rewrites, falls back to nodal analysis on the conductance Laplacian.
//!
//! ```
//! use ohm_solver::{Method, SolveOptions, solve_edge_list};
//!
//! let bridge = [
//!     ("A", "B", 1.0),
//!     ("B", "C", 1.0),
//!     ("A", "D", 1.0),
//!     ("D", "C", 1.0),
//!     ("B", "D", 1.0),
//! ];
//! let sol = solve_edge_list(&bridge, "A", "C", &SolveOptions::default()).unwrap();
//! assert_eq!(sol.method, Method::Nodal);
//! assert!((sol.resistance.ohms() - 1.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod nodal;
pub mod solve;

pub use error::{SolverError, SolverResult};
pub use nodal::nodal_resistance;
pub use ohm_reduce::{ReductionStats, Resistance};
pub use solve::{
    Fallback, Method, Solution, SolveOptions, equivalent_resistance, solve_edge_list, solve_many,
};
