//! Error types for the styx-chain crate.

/// Error type for all fallible operations in the styx-chain crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChainError {
    /// Returned when Q is not square or R's row count differs from Q's.
    #[error("shape mismatch: Q is {q_rows}x{q_cols}, R has {r_rows} rows")]
    ShapeMismatch {
        /// Number of rows in Q.
        q_rows: usize,
        /// Number of columns in Q.
        q_cols: usize,
        /// Number of rows in R.
        r_rows: usize,
    },

    /// Returned when an entry of Q or R is non-finite or outside `[0, 1]`.
    #[error("{matrix}[{row}][{col}] = {value} is outside [0, 1]")]
    ProbabilityOutOfRange {
        /// Which matrix held the offending entry (`"Q"` or `"R"`).
        matrix: &'static str,
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a row of `[Q | R]` does not sum to 1.
    #[error("row {row} of [Q|R] sums to {sum}, expected 1")]
    RowNotStochastic {
        /// Index of the offending row.
        row: usize,
        /// The computed row sum.
        sum: f64,
    },

    /// Returned when `I - Q` is singular or ill-conditioned, meaning some
    /// transient state can never reach an absorbing state.
    #[error("chain is not absorbing: I - Q is singular or ill-conditioned (rcond = {rcond:.3e})")]
    NonAbsorbing {
        /// Reciprocal 1-norm condition number of `I - Q` (0.0 when a pivot
        /// collapsed during factorization).
        rcond: f64,
    },
}
