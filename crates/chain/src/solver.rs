//! Absorbing-chain solver: fundamental matrix, expected steps, absorption
//! probabilities.

use ndarray::{Array1, Array2, Axis};
use tracing::debug;

use crate::error::ChainError;
use crate::linalg;
use crate::model::TransitionModel;

/// Minimum reciprocal 1-norm condition number of `I - Q` accepted by
/// [`solve`]. Below this the chain is treated as non-absorbing: some
/// transient mass (nearly) never escapes.
pub const RCOND_MIN: f64 = 1e-12;

/// Result of one absorbing-chain analysis.
///
/// Produced fresh by every [`solve`] call; carries no relation to prior
/// results. State ordering matches the input model: row i everywhere is the
/// i-th transient state of Q, column k of the absorption matrix is the k-th
/// absorbing state of R.
#[derive(Debug, Clone, PartialEq)]
pub struct Absorption {
    n: Array2<f64>,
    t: Array1<f64>,
    b: Array2<f64>,
}

impl Absorption {
    /// The fundamental matrix `N = (I - Q)⁻¹`: `N[i][j]` is the expected
    /// number of visits to transient state j before absorption, starting
    /// from transient state i.
    pub fn fundamental(&self) -> &Array2<f64> {
        &self.n
    }

    /// Expected number of steps until absorption from each transient state
    /// (`t = N·1`).
    pub fn expected_steps(&self) -> &Array1<f64> {
        &self.t
    }

    /// Absorption probabilities `B = N·R`: `B[i][k]` is the probability of
    /// ending up in absorbing state k starting from transient state i. Each
    /// row sums to 1 up to numerical tolerance.
    pub fn absorption_probs(&self) -> &Array2<f64> {
        &self.b
    }
}

/// Solves an absorbing chain: validates the model, inverts `I - Q`, and
/// derives expected steps and absorption probabilities.
///
/// Pure function of its input: no I/O, no caching, no shared state, so
/// independent models can be solved concurrently. A model with zero
/// transient states yields empty outputs without touching the matrix
/// kernels.
///
/// # Errors
///
/// Propagates the model's validation errors
/// ([`ChainError::ProbabilityOutOfRange`], [`ChainError::RowNotStochastic`])
/// and fails with [`ChainError::NonAbsorbing`] when `I - Q` is singular or
/// its reciprocal condition number falls below [`RCOND_MIN`].
pub fn solve(model: &TransitionModel) -> Result<Absorption, ChainError> {
    model.validate()?;

    let n = model.n_transient();
    let m = model.n_absorbing();
    if n == 0 {
        return Ok(Absorption {
            n: Array2::zeros((0, 0)),
            t: Array1::zeros(0),
            b: Array2::zeros((0, m)),
        });
    }

    // D = I - Q.
    let mut d = model.q().mapv(|p| -p);
    for i in 0..n {
        d[[i, i]] += 1.0;
    }

    let fundamental = linalg::invert(&d).ok_or(ChainError::NonAbsorbing { rcond: 0.0 })?;
    let rcond = linalg::rcond_1(&d, &fundamental);
    if rcond < RCOND_MIN {
        return Err(ChainError::NonAbsorbing { rcond });
    }
    debug!(n_transient = n, n_absorbing = m, rcond, "inverted I - Q");

    // t as row sums of N makes t[i] == sum(N[i,:]) exact, not just equal up
    // to a second solve's rounding.
    let t = fundamental.sum_axis(Axis(1));
    let b = fundamental.dot(model.r());

    Ok(Absorption {
        n: fundamental,
        t,
        b,
    })
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn single_state_boundary_case() {
        // One transient state, half chance of leaving each step: two expected
        // steps, certain absorption.
        let model = TransitionModel::new(array![[0.5]], array![[0.5]]).unwrap();
        let result = solve(&model).unwrap();
        assert!((result.fundamental()[[0, 0]] - 2.0).abs() < 1e-12);
        assert!((result.expected_steps()[0] - 2.0).abs() < 1e-12);
        assert!((result.absorption_probs()[[0, 0]] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_model_returns_empty_result() {
        let model =
            TransitionModel::new(Array2::zeros((0, 0)), Array2::zeros((0, 3))).unwrap();
        let result = solve(&model).unwrap();
        assert_eq!(result.fundamental().dim(), (0, 0));
        assert_eq!(result.expected_steps().len(), 0);
        assert_eq!(result.absorption_probs().dim(), (0, 3));
    }

    #[test]
    fn closed_transient_loop_is_non_absorbing() {
        let model = TransitionModel::new(array![[1.0]], array![[0.0]]).unwrap();
        match solve(&model).unwrap_err() {
            ChainError::NonAbsorbing { rcond } => assert_eq!(rcond, 0.0),
            other => panic!("expected NonAbsorbing, got {other:?}"),
        }
    }

    #[test]
    fn near_closed_loop_is_non_absorbing() {
        // Two states bouncing between each other with a 1e-13 leak: I - Q is
        // invertible but hopelessly ill-conditioned.
        let leak = 1e-13;
        let q = array![[0.0, 1.0], [1.0 - leak, 0.0]];
        let r = array![[0.0], [leak]];
        let model = TransitionModel::new(q, r).unwrap();
        match solve(&model).unwrap_err() {
            ChainError::NonAbsorbing { rcond } => assert!(rcond < RCOND_MIN),
            other => panic!("expected NonAbsorbing, got {other:?}"),
        }
    }

    #[test]
    fn slow_but_absorbing_single_state_still_solves() {
        // A tiny leak is slow, not degenerate: a 1x1 system is perfectly
        // conditioned whatever its scale.
        let leak = 1e-9;
        let model = TransitionModel::new(array![[1.0 - leak]], array![[leak]]).unwrap();
        let result = solve(&model).unwrap();
        assert!((result.expected_steps()[0] - 1.0 / leak).abs() / (1.0 / leak) < 1e-6);
    }

    #[test]
    fn validation_failure_stops_before_computation() {
        let model = TransitionModel::new(array![[0.6]], array![[0.5]]).unwrap();
        assert!(matches!(
            solve(&model).unwrap_err(),
            ChainError::RowNotStochastic { row: 0, .. }
        ));
    }

    #[test]
    fn expected_steps_are_exact_row_sums() {
        let model = TransitionModel::new(
            array![[0.5, 0.3], [0.2, 0.6]],
            array![[0.2], [0.2]],
        )
        .unwrap();
        let result = solve(&model).unwrap();
        for i in 0..2 {
            let row_sum = result.fundamental().row(i).sum();
            assert_eq!(result.expected_steps()[i], row_sum);
        }
    }
}
