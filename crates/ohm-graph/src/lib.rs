//! ohm-graph: network/model layer for ohmic.
//!
//! Provides:
//! - A mutable resistor multigraph over node and edge arenas
//! - A label-keyed builder for edge lists
//! - Terminal validation and dense indexing for matrix solvers
//!
//! # Example
//!
//! ```
//! use ohm_graph::NetworkBuilder;
//!
//! let mut builder = NetworkBuilder::new();
//! builder.resistor("A", "B", 6.0).unwrap();
//! builder.resistor("A", "B", 3.0).unwrap();
//! let net = builder.build();
//!
//! let a = net.find_node("A").unwrap();
//! let b = net.find_node("B").unwrap();
//! assert_eq!(net.edges_between(a, b).len(), 2);
//! assert_eq!(net.degree(a), 2);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub mod validate;

// Re-exports for ergonomics
pub use builder::{NetworkBuilder, from_edge_list};
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Network, Node};
pub use indexing::IndexMap;
pub use validate::check_terminals;
