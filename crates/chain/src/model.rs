//! Transition model for an absorbing discrete-time Markov chain.

use ndarray::Array2;

use crate::error::ChainError;

/// Tolerance applied when checking that a probability lies in `[0, 1]`.
///
/// Entries may drift slightly outside the interval through floating-point
/// arithmetic in the caller's model construction.
pub const PROB_EPS: f64 = 1e-9;

/// Tolerance applied when checking that a row of `[Q | R]` sums to 1.
pub const ROW_SUM_EPS: f64 = 1e-9;

/// One absorbing-chain instance: the transient part of the transition matrix.
///
/// The full chain's state space splits into `n` transient states and `m`
/// absorbing states. `q` (n×n) holds the one-step probabilities among
/// transient states and `r` (n×m) the one-step probabilities from transient
/// states directly into absorbing states. Row and column order is the
/// caller's and is preserved by the solver.
///
/// A model is immutable once built. Construction checks shapes only; the
/// stochasticity invariants are checked by [`validate`](Self::validate)
/// (called again by [`solve`](crate::solve)).
#[derive(Debug, Clone)]
pub struct TransitionModel {
    q: Array2<f64>,
    r: Array2<f64>,
}

impl TransitionModel {
    /// Builds a model from the transient-to-transient matrix `q` and the
    /// transient-to-absorbing matrix `r`.
    ///
    /// Fails with [`ChainError::ShapeMismatch`] when `q` is not square or
    /// `r` has a different number of rows.
    pub fn new(q: Array2<f64>, r: Array2<f64>) -> Result<Self, ChainError> {
        if q.nrows() != q.ncols() || r.nrows() != q.nrows() {
            return Err(ChainError::ShapeMismatch {
                q_rows: q.nrows(),
                q_cols: q.ncols(),
                r_rows: r.nrows(),
            });
        }
        Ok(Self { q, r })
    }

    /// Number of transient states.
    pub fn n_transient(&self) -> usize {
        self.q.nrows()
    }

    /// Number of absorbing states.
    pub fn n_absorbing(&self) -> usize {
        self.r.ncols()
    }

    /// The transient-to-transient matrix Q.
    pub fn q(&self) -> &Array2<f64> {
        &self.q
    }

    /// The transient-to-absorbing matrix R.
    pub fn r(&self) -> &Array2<f64> {
        &self.r
    }

    /// Validates the stochasticity invariants.
    ///
    /// Checks, in order: every entry of Q finite and in `[0, 1]` (within
    /// [`PROB_EPS`]), every entry of R likewise, then for each row i that
    /// `sum(Q[i,:]) + sum(R[i,:])` equals 1 within [`ROW_SUM_EPS`]. The
    /// first offending entry or row wins.
    pub fn validate(&self) -> Result<(), ChainError> {
        Self::check_entries(&self.q, "Q")?;
        Self::check_entries(&self.r, "R")?;
        for row in 0..self.n_transient() {
            let sum = self.q.row(row).sum() + self.r.row(row).sum();
            if (sum - 1.0).abs() > ROW_SUM_EPS {
                return Err(ChainError::RowNotStochastic { row, sum });
            }
        }
        Ok(())
    }

    fn check_entries(matrix: &Array2<f64>, name: &'static str) -> Result<(), ChainError> {
        for ((row, col), &value) in matrix.indexed_iter() {
            if !value.is_finite() || value < -PROB_EPS || value > 1.0 + PROB_EPS {
                return Err(ChainError::ProbabilityOutOfRange {
                    matrix: name,
                    row,
                    col,
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn accepts_valid_model() {
        let model =
            TransitionModel::new(array![[0.5, 0.3], [0.2, 0.6]], array![[0.2], [0.2]]).unwrap();
        assert_eq!(model.n_transient(), 2);
        assert_eq!(model.n_absorbing(), 1);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn rejects_non_square_q() {
        let err = TransitionModel::new(Array2::zeros((2, 3)), Array2::zeros((2, 1))).unwrap_err();
        assert!(matches!(
            err,
            ChainError::ShapeMismatch {
                q_rows: 2,
                q_cols: 3,
                r_rows: 2
            }
        ));
    }

    #[test]
    fn rejects_row_count_mismatch() {
        let err = TransitionModel::new(Array2::zeros((2, 2)), Array2::zeros((3, 1))).unwrap_err();
        assert!(matches!(err, ChainError::ShapeMismatch { r_rows: 3, .. }));
    }

    #[test]
    fn rejects_entry_above_one() {
        let model = TransitionModel::new(array![[1.5]], array![[0.5]]).unwrap();
        let err = model.validate().unwrap_err();
        assert!(matches!(
            err,
            ChainError::ProbabilityOutOfRange {
                matrix: "Q",
                row: 0,
                col: 0,
                ..
            }
        ));
    }

    #[test]
    fn rejects_negative_entry_in_r() {
        let model = TransitionModel::new(array![[0.5]], array![[-0.1]]).unwrap();
        let err = model.validate().unwrap_err();
        assert!(matches!(
            err,
            ChainError::ProbabilityOutOfRange { matrix: "R", .. }
        ));
    }

    #[test]
    fn rejects_nan_entry() {
        let model = TransitionModel::new(array![[f64::NAN]], array![[0.5]]).unwrap();
        assert!(matches!(
            model.validate().unwrap_err(),
            ChainError::ProbabilityOutOfRange { matrix: "Q", .. }
        ));
    }

    #[test]
    fn rejects_row_sum_above_one() {
        let model = TransitionModel::new(array![[0.6]], array![[0.5]]).unwrap();
        let err = model.validate().unwrap_err();
        match err {
            ChainError::RowNotStochastic { row, sum } => {
                assert_eq!(row, 0);
                assert!((sum - 1.1).abs() < 1e-12);
            }
            other => panic!("expected RowNotStochastic, got {other:?}"),
        }
    }

    #[test]
    fn rejects_row_sum_below_one() {
        let model =
            TransitionModel::new(array![[0.2, 0.1], [0.0, 0.0]], array![[0.2], [1.0]]).unwrap();
        assert!(matches!(
            model.validate().unwrap_err(),
            ChainError::RowNotStochastic { row: 0, .. }
        ));
    }

    #[test]
    fn tolerates_tiny_drift() {
        let model = TransitionModel::new(array![[0.5 + 1e-12]], array![[0.5]]).unwrap();
        assert!(model.validate().is_ok());
    }

    #[test]
    fn empty_model_is_valid() {
        let model = TransitionModel::new(Array2::zeros((0, 0)), Array2::zeros((0, 2))).unwrap();
        assert_eq!(model.n_transient(), 0);
        assert_eq!(model.n_absorbing(), 2);
        assert!(model.validate().is_ok());
    }
}
