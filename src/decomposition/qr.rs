//! QR decomposition by Householder reflections.

use crate::error::{MatrizError, Result};
use crate::primitives::{Matrix, Real, Vector};

/// Householder QR decomposition of an m×n matrix with m ≥ n.
///
/// Solving through the factorization yields the least-squares solution of
/// an overdetermined system `A x = b`, which is how non-square matrix
/// division is carried out.
///
/// # Examples
///
/// ```
/// use matriz::decomposition::Qr;
/// use matriz::primitives::{Matrix, Vector};
///
/// // Overdetermined: best fit of y = 2x through three points.
/// let a = Matrix::<f64>::from_vec(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
/// let b = Vector::from_slice(&[2.0, 4.0, 6.0]);
/// let qr = Qr::new(&a).unwrap();
/// let x = qr.solve(&b).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Qr<T> {
    qr: Matrix<T>,
    rdiag: Vec<T>,
}

impl<T: Real> Qr<T> {
    /// Factors an m×n matrix with m ≥ n.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrix has fewer rows than
    /// columns.
    pub fn new(a: &Matrix<T>) -> Result<Self> {
        let (m, n) = a.shape();
        if m < n {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("at least {n} rows for {n} columns"),
                actual: format!("{m}x{n}"),
            });
        }
        let mut qr = a.clone();
        let mut rdiag = vec![T::ZERO; n];

        for k in 0..n {
            let mut nrm = T::ZERO;
            for i in k..m {
                nrm += qr.get(i, k) * qr.get(i, k);
            }
            let mut nrm = nrm.sqrt();

            if nrm != T::ZERO {
                if qr.get(k, k) < T::ZERO {
                    nrm = -nrm;
                }
                for i in k..m {
                    qr.set(i, k, qr.get(i, k) / nrm);
                }
                qr.set(k, k, qr.get(k, k) + T::ONE);

                // Apply the reflector to the remaining columns.
                for j in (k + 1)..n {
                    let mut s = T::ZERO;
                    for i in k..m {
                        s += qr.get(i, k) * qr.get(i, j);
                    }
                    s = -s / qr.get(k, k);
                    for i in k..m {
                        qr.set(i, j, qr.get(i, j) + s * qr.get(i, k));
                    }
                }
            }
            rdiag[k] = -nrm;
        }

        Ok(Self { qr, rdiag })
    }

    /// Returns true if R has no collapsed diagonal entry.
    ///
    /// The threshold scales with the largest diagonal magnitude, so a
    /// column that cancels to rounding residue still reads as deficient.
    #[must_use]
    pub fn is_full_rank(&self) -> bool {
        let m = self.qr.n_rows().max(1);
        let scale = self
            .rdiag
            .iter()
            .fold(T::ZERO, |acc, d| if d.abs() > acc { d.abs() } else { acc });
        let tol = scale * T::EPSILON * T::from_usize(m);
        self.rdiag.iter().all(|d| d.abs() > tol)
    }

    fn check_full_rank(&self) -> Result<()> {
        if self.is_full_rank() {
            return Ok(());
        }
        let mut det = 1.0_f64;
        for d in &self.rdiag {
            det *= d.to_f64();
        }
        Err(MatrizError::SingularMatrix { det })
    }

    /// Least-squares solve of `A x = b`: minimizes `‖A x − b‖`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `b.len()` does not equal the row
    /// count, and `SingularMatrix` if the matrix is rank deficient.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>> {
        let (m, n) = self.qr.shape();
        if b.len() != m {
            return Err(MatrizError::dimension_mismatch("rows", m, b.len()));
        }
        self.check_full_rank()?;

        // y = Qᵗ b, applied reflector by reflector.
        let mut x: Vec<T> = b.as_slice().to_vec();
        for k in 0..n {
            let mut s = T::ZERO;
            for i in k..m {
                s += self.qr.get(i, k) * x[i];
            }
            s = -s / self.qr.get(k, k);
            for i in k..m {
                x[i] += s * self.qr.get(i, k);
            }
        }

        // Back substitution with R.
        for k in (0..n).rev() {
            x[k] /= self.rdiag[k];
            for i in 0..k {
                x[i] = x[i] - x[k] * self.qr.get(i, k);
            }
        }

        x.truncate(n);
        Ok(Vector::from_vec(x))
    }

    /// Least-squares solve of `A X = B` for a matrix of right-hand sides.
    ///
    /// # Errors
    ///
    /// Same failure conditions as [`Qr::solve`].
    pub fn solve_matrix(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        let (m, n) = self.qr.shape();
        if rhs.n_rows() != m {
            return Err(MatrizError::dimension_mismatch("rows", m, rhs.n_rows()));
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
}

#[cfg(test)]
#[path = "qr_tests.rs"]
mod tests;
