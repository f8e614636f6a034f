//! Absorbing discrete-time Markov chain analysis.
//!
//! A chain's state space splits into transient states (the process can still
//! move on) and absorbing states (entered once, never left). Given the
//! transient-to-transient probabilities `Q` and the transient-to-absorbing
//! probabilities `R`, this crate computes the classic absorption quantities:
//!
//! ```text
//!  N = (I - Q)⁻¹    fundamental matrix (expected visit counts)
//!  t = N·1          expected steps until absorption
//!  B = N·R          absorption probabilities per absorbing state
//! ```
//!
//! The solve is a pure, single-shot computation in double precision. The
//! inversion runs through LU decomposition with partial pivoting and a
//! reciprocal-condition-number gate, so a chain with a closed transient loop
//! fails loudly instead of returning garbage.
//!
//! # Quick start
//!
//! ```rust
//! use ndarray::array;
//! use styx_chain::{TransitionModel, solve};
//!
//! // One transient state that leaves with probability 0.5 each step.
//! let model = TransitionModel::new(array![[0.5]], array![[0.5]]).unwrap();
//! let result = solve(&model).unwrap();
//!
//! assert!((result.expected_steps()[0] - 2.0).abs() < 1e-12);
//! assert!((result.absorption_probs()[[0, 0]] - 1.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod linalg;
pub mod model;
pub mod solver;

pub use error::ChainError;
pub use model::{PROB_EPS, ROW_SUM_EPS, TransitionModel};
pub use solver::{Absorption, RCOND_MIN, solve};
