//! Random layered DAG generation for illustrative pipeline topologies.
//!
//! Produces small synthetic directed acyclic graphs: nodes arranged in
//! layers, one forward edge per non-final node, and a uniform random latency
//! per node. Output is deterministic for a fixed seed.
//!
//! # Quick start
//!
//! ```rust
//! use styx_graph::{DagConfig, generate};
//!
//! let dag = generate(&DagConfig::new().with_seed(42)).unwrap();
//! assert_eq!(dag.n_nodes(), 12);
//! assert!(dag.is_acyclic());
//! ```

pub mod config;
pub mod error;
pub mod generate;

pub use config::DagConfig;
pub use error::GraphError;
pub use generate::{LayeredDag, generate};
