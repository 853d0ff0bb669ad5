//! LU decomposition with partial pivoting.

use crate::error::{MatrizError, Result};
use crate::primitives::{Matrix, Real, Vector};

/// LU decomposition of a square matrix with partial (row) pivoting.
///
/// Stores the packed L/U factors and the row permutation. Solving a linear
/// system through the factorization is numerically stable for
/// ill-conditioned inputs where an explicit inverse would not be.
///
/// # Examples
///
/// ```
/// use matriz::decomposition::Lu;
/// use matriz::primitives::{Matrix, Vector};
///
/// let a = Matrix::<f64>::from_vec(2, 2, vec![2.0, 1.0, 5.0, 3.0]).unwrap();
/// let lu = Lu::new(&a).unwrap();
///
/// let b = Vector::from_slice(&[4.0, 11.0]);
/// let x = lu.solve(&b).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Lu<T> {
    lu: Matrix<T>,
    perm: Vec<usize>,
    even: bool,
}

impl<T: Real> Lu<T> {
    /// Factors a square matrix.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for a non-square input and `SingularMatrix` when
    /// a pivot collapses below working precision.
    pub fn new(a: &Matrix<T>) -> Result<Self> {
        if !a.is_square() {
            return Err(MatrizError::NotSquare {
                rows: a.n_rows(),
                cols: a.n_cols(),
            });
        }
        let n = a.n_rows();
        let mut lu = a.clone();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut even = true;
        let mut det_so_far = 1.0_f64;

        for k in 0..n {
            // Partial pivoting: largest magnitude in the remaining column.
            let mut p = k;
            let mut max = lu.get(k, k).abs();
            for i in (k + 1)..n {
                let v = lu.get(i, k).abs();
                if v > max {
                    max = v;
                    p = i;
                }
            }

            if max < T::EPSILON {
                return Err(MatrizError::SingularMatrix {
                    det: det_so_far * lu.get(p, k).to_f64(),
                });
            }

            if p != k {
                for j in 0..n {
                    let tmp = lu.get(p, j);
                    lu.set(p, j, lu.get(k, j));
                    lu.set(k, j, tmp);
                }
                perm.swap(p, k);
                even = !even;
            }

            let pivot = lu.get(k, k);
            det_so_far *= pivot.to_f64();
            for i in (k + 1)..n {
                let factor = lu.get(i, k) / pivot;
                lu.set(i, k, factor);
                for j in (k + 1)..n {
                    lu.set(i, j, lu.get(i, j) - factor * lu.get(k, j));
                }
            }
        }

        Ok(Self { lu, perm, even })
    }

    /// Determinant from the factorization: signed product of the pivots.
    #[must_use]
    pub fn det(&self) -> T {
        let n = self.lu.n_rows();
        let mut d = if self.even { T::ONE } else { -T::ONE };
        for i in 0..n {
            d *= self.lu.get(i, i);
        }
        d
    }

    /// Solves `A x = b`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `b.len()` does not equal the matrix
    /// order.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>> {
        let n = self.lu.n_rows();
        if b.len() != n {
            return Err(MatrizError::dimension_mismatch("rows", n, b.len()));
        }

        // Permute, then forward substitution with unit-diagonal L.
        let mut x: Vec<T> = self.perm.iter().map(|&i| b[i]).collect();
        for i in 1..n {
            let mut sum = x[i];
            for j in 0..i {
                sum -= self.lu.get(i, j) * x[j];
            }
            x[i] = sum;
        }

        // Back substitution with U.
        for i in (0..n).rev() {
            let mut sum = x[i];
            for j in (i + 1)..n {
                sum -= self.lu.get(i, j) * x[j];
            }
            x[i] = sum / self.lu.get(i, i);
        }

        Ok(Vector::from_vec(x))
    }

    /// Solves `A X = B` for a matrix of right-hand sides, column by column.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `rhs.n_rows()` does not equal the
    /// matrix order.
    pub fn solve_matrix(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        let n = self.lu.n_rows();
        if rhs.n_rows() != n {
            return Err(MatrizError::dimension_mismatch("rows", n, rhs.n_rows()));
        }
        let cols = rhs.n_cols();
        let mut out = Matrix::zeros(n, cols);
        for j in 0..cols {
            let x = self.solve(&rhs.column(j))?;
            for i in 0..n {
                out.set(i, j, x[i]);
            }
        }
        Ok(out)
    }

    /// Computes the matrix inverse by solving against the identity.
    ///
    /// # Errors
    ///
    /// Propagates any solve failure.
    pub fn inverse(&self) -> Result<Matrix<T>> {
        self.solve_matrix(&Matrix::eye(self.lu.n_rows()))
    }
}

#[cfg(test)]
#[path = "lu_tests.rs"]
mod tests;
