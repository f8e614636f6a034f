//! Dense linear algebra kernels: LU inversion and conditioning checks.
//!
//! The conditioning helpers are public because detecting an ill-conditioned
//! `I - Q` is how a non-absorbing chain shows up numerically, and callers may
//! want the same check for their own matrices.

use ndarray::Array2;

/// Matrix 1-norm (maximum absolute column sum).
///
/// Returns 0.0 for an empty matrix.
pub fn norm_1(a: &Array2<f64>) -> f64 {
    let mut max = 0.0_f64;
    for col in a.columns() {
        let sum: f64 = col.iter().map(|v| v.abs()).sum();
        if sum > max {
            max = sum;
        }
    }
    max
}

/// Reciprocal 1-norm condition number `1 / (‖A‖₁ · ‖A⁻¹‖₁)`.
///
/// Expects the inverse to be precomputed (the solver forms it in full
/// anyway). Close to 1 for well-conditioned matrices, close to 0 for
/// nearly singular ones. Returns 0.0 when either norm vanishes.
pub fn rcond_1(a: &Array2<f64>, a_inv: &Array2<f64>) -> f64 {
    let denom = norm_1(a) * norm_1(a_inv);
    if denom > 0.0 { 1.0 / denom } else { 0.0 }
}

/// Inverts a square matrix by LU decomposition with partial pivoting.
///
/// Returns `None` when a pivot collapses below `f64::EPSILON` relative to
/// the matrix's 1-norm, i.e. the matrix is singular or numerically
/// indistinguishable from singular. Callers wanting a graded diagnostic
/// should follow up with [`rcond_1`].
///
/// # Panics
///
/// Panics in debug builds if `a` is not square.
pub fn invert(a: &Array2<f64>) -> Option<Array2<f64>> {
    let n = a.nrows();
    debug_assert_eq!(n, a.ncols(), "invert expects a square matrix");

    let mut lu = a.clone();
    // Row permutation applied during pivoting: perm[i] is the original row
    // now stored at position i.
    let mut perm: Vec<usize> = (0..n).collect();
    let pivot_floor = f64::EPSILON * norm_1(a).max(1.0);

    for k in 0..n {
        // Partial pivoting: largest magnitude in column k, on or below the
        // diagonal.
        let mut pivot_row = k;
        let mut pivot_abs = lu[[k, k]].abs();
        for i in (k + 1)..n {
            let v = lu[[i, k]].abs();
            if v > pivot_abs {
                pivot_abs = v;
                pivot_row = i;
            }
        }
        if pivot_abs <= pivot_floor {
            return None;
        }
        if pivot_row != k {
            for j in 0..n {
                lu.swap([k, j], [pivot_row, j]);
            }
            perm.swap(k, pivot_row);
        }
        let pivot = lu[[k, k]];
        for i in (k + 1)..n {
            let factor = lu[[i, k]] / pivot;
            lu[[i, k]] = factor;
            for j in (k + 1)..n {
                lu[[i, j]] -= factor * lu[[k, j]];
            }
        }
    }

    // Solve A·x = e_c for each unit vector to assemble the inverse one
    // column at a time.
    let mut inv = Array2::zeros((n, n));
    let mut x = vec![0.0_f64; n];
    for c in 0..n {
        for i in 0..n {
            x[i] = if perm[i] == c { 1.0 } else { 0.0 };
        }
        // Forward substitution with the unit lower triangle.
        for i in 1..n {
            for j in 0..i {
                x[i] -= lu[[i, j]] * x[j];
            }
        }
        // Back substitution with the upper triangle.
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                x[i] -= lu[[i, j]] * x[j];
            }
            x[i] /= lu[[i, i]];
        }
        for i in 0..n {
            inv[[i, c]] = x[i];
        }
    }
    Some(inv)
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn assert_close(a: &Array2<f64>, b: &Array2<f64>, tol: f64) {
        assert_eq!(a.dim(), b.dim());
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < tol, "{x} vs {y}");
        }
    }

    #[test]
    fn norm_1_column_sums() {
        let a = array![[1.0, -4.0], [-2.0, 3.0]];
        assert!((norm_1(&a) - 7.0).abs() < 1e-15);
    }

    #[test]
    fn norm_1_empty() {
        assert_eq!(norm_1(&Array2::zeros((0, 0))), 0.0);
    }

    #[test]
    fn inverts_identity() {
        let eye = Array2::eye(4);
        let inv = invert(&eye).unwrap();
        assert_close(&inv, &eye, 1e-15);
        assert!((rcond_1(&eye, &inv) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn inverts_known_2x2() {
        let a = array![[0.5, -0.3], [-0.2, 0.4]];
        let inv = invert(&a).unwrap();
        // det = 0.14, inverse = [[0.4, 0.3], [0.2, 0.5]] / 0.14
        let expected = array![[0.4 / 0.14, 0.3 / 0.14], [0.2 / 0.14, 0.5 / 0.14]];
        assert_close(&inv, &expected, 1e-12);
    }

    #[test]
    fn inverse_times_original_is_identity() {
        let a = array![[2.0, 1.0, 0.5], [0.1, 3.0, 0.2], [0.3, 0.4, 1.5]];
        let inv = invert(&a).unwrap();
        assert_close(&a.dot(&inv), &Array2::eye(3), 1e-12);
    }

    #[test]
    fn pivoting_handles_zero_diagonal() {
        // Leading diagonal entry is zero; only row exchange makes this solvable.
        let a = array![[0.0, 1.0], [1.0, 0.0]];
        let inv = invert(&a).unwrap();
        assert_close(&inv, &a, 1e-15);
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        assert!(invert(&a).is_none());
    }

    #[test]
    fn zero_matrix_is_rejected() {
        assert!(invert(&Array2::zeros((1, 1))).is_none());
    }

    #[test]
    fn empty_matrix_inverts_to_empty() {
        let inv = invert(&Array2::zeros((0, 0))).unwrap();
        assert_eq!(inv.dim(), (0, 0));
    }

    #[test]
    fn rcond_small_for_near_singular() {
        let a = array![[1.0, 1.0], [1.0, 1.0 + 1e-10]];
        let inv = invert(&a).unwrap();
        assert!(rcond_1(&a, &inv) < 1e-9);
    }
}
