//! Per-case timing table reduction.
//!
//! Reads a CSV table with one row per benchmark case and columns for each
//! pipeline stage's latency, and reduces every case to two scalar
//! aggregates:
//!
//! ```text
//!  t_chain = t1 + t2 + ... + tk          stages run sequentially
//!  t_graph = max(t1, ..., tk) + t_agg    stages fan out, then merge
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use styx_makespan::parse_table;
//!
//! let cases = parse_table("case_id,t1,t2,t_agg\nc1,1.0,3.0,0.5\n").unwrap();
//! let m = cases[0].aggregate();
//! assert_eq!(m.t_chain, 4.0);
//! assert_eq!(m.t_graph, 3.5);
//! ```

pub mod error;
pub mod table;

pub use error::MakespanError;
pub use table::{CaseMakespan, CaseTiming, parse_table, read_table};
