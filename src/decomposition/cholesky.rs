//! Cholesky decomposition for symmetric positive definite matrices.

use crate::error::{MatrizError, Result};
use crate::primitives::{Matrix, Real, Vector};

/// Cholesky factorization `A = L Lᵗ` of a symmetric positive definite
/// matrix.
///
/// This is the solver of choice for normal-equations systems `XᵗX β = Xᵗy`,
/// whose Gram matrix is symmetric positive definite whenever the design
/// matrix has full column rank.
#[derive(Debug, Clone)]
pub struct Cholesky<T> {
    l: Matrix<T>,
}

impl<T: Real> Cholesky<T> {
    /// Factors a symmetric positive definite matrix.
    ///
    /// Only the lower triangle of the input is read; symmetry is assumed.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for a non-square input. A non-positive pivot
    /// means the matrix is singular (or indefinite) to working precision
    /// and surfaces as `SingularMatrix`.
    pub fn new(a: &Matrix<T>) -> Result<Self> {
        if !a.is_square() {
            return Err(MatrizError::NotSquare {
                rows: a.n_rows(),
                cols: a.n_cols(),
            });
        }
        let n = a.n_rows();
        let mut l = Matrix::zeros(n, n);

        for i in 0..n {
            for j in 0..=i {
                let mut sum = T::ZERO;

                if i == j {
                    for k in 0..j {
                        sum += l.get(j, k) * l.get(j, k);
                    }
                    let diag = a.get(j, j) - sum;
                    // Pivot threshold scales with the diagonal entry so that
                    // cancellation residue on a rank-deficient Gram matrix is
                    // still caught.
                    let tol = a.get(j, j).abs() * T::EPSILON * T::from_usize(n);
                    if diag <= tol {
                        return Err(MatrizError::SingularMatrix {
                            det: diag.to_f64(),
                        });
                    }
                    l.set(j, j, diag.sqrt());
                } else {
                    for k in 0..j {
                        sum += l.get(i, k) * l.get(j, k);
                    }
                    l.set(i, j, (a.get(i, j) - sum) / l.get(j, j));
                }
            }
        }

        Ok(Self { l })
    }

    /// Solves `A x = b` by forward and backward substitution.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `b.len()` does not equal the matrix
    /// order.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>> {
        let n = self.l.n_rows();
        if b.len() != n {
            return Err(MatrizError::dimension_mismatch("rows", n, b.len()));
        }

        // Forward substitution: L y = b.
        let mut y = vec![T::ZERO; n];
        for i in 0..n {
            let mut sum = T::ZERO;
            for j in 0..i {
                sum += self.l.get(i, j) * y[j];
            }
            y[i] = (b[i] - sum) / self.l.get(i, i);
        }

        // Backward substitution: Lᵗ x = y.
        let mut x = vec![T::ZERO; n];
        for i in (0..n).rev() {
            let mut sum = T::ZERO;
            for j in (i + 1)..n {
                sum += self.l.get(j, i) * x[j];
            }
            x[i] = (y[i] - sum) / self.l.get(i, i);
        }

        Ok(Vector::from_vec(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_spd_system() {
        let a = Matrix::from_vec(2, 2, vec![4.0, 2.0, 2.0, 3.0]).expect("2x2 data");
        let b = Vector::from_slice(&[8.0, 7.0]);
        let chol = Cholesky::new(&a).expect("matrix is positive definite");
        let x = chol.solve(&b).expect("lengths match");

        // 4*1.25 + 2*1.5 = 8, 2*1.25 + 3*1.5 = 7
        assert!((x[0] - 1.25).abs() < 1e-12);
        assert!((x[1] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_not_square() {
        let a = Matrix::<f64>::zeros(2, 3);
        let err = Cholesky::new(&a).unwrap_err();
        assert!(matches!(err, MatrizError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    fn test_not_positive_definite_is_singular() {
        // Rank-1 Gram matrix.
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).expect("2x2 data");
        let err = Cholesky::new(&a).unwrap_err();
        assert!(matches!(err, MatrizError::SingularMatrix { .. }));
    }

    #[test]
    fn test_rhs_length_mismatch() {
        let a = Matrix::from_vec(2, 2, vec![4.0, 2.0, 2.0, 3.0]).expect("2x2 data");
        let chol = Cholesky::new(&a).expect("matrix is positive definite");
        let b = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert!(chol.solve(&b).is_err());
    }

    #[test]
    fn test_f32_mirror() {
        let a = Matrix::from_vec(2, 2, vec![4.0_f32, 2.0, 2.0, 3.0]).expect("2x2 data");
        let b = Vector::from_slice(&[8.0_f32, 7.0]);
        let x = Cholesky::new(&a)
            .expect("matrix is positive definite")
            .solve(&b)
            .expect("lengths match");
        assert!((x[0] - 1.25).abs() < 1e-5);
        assert!((x[1] - 1.5).abs() < 1e-5);
    }
}
