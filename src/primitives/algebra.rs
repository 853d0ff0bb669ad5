//! Arithmetic operations over dense matrices and vectors.
//!
//! Every operation validates operand shapes before touching any output, so
//! a failure never leaves a partial result. The in-place `*_into` variants
//! write into a caller-supplied, pre-sized output; the borrow checker rules
//! out aliasing between inputs and the output buffer.

use super::{Matrix, Real, Vector};
use crate::decomposition::{Lu, Qr};
use crate::error::{MatrizError, Result};

/// Selects the broadcast dimension for matrix-vector addition and
/// subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Broadcast the vector across every row; its length must equal the
    /// matrix column count.
    Row,
    /// Broadcast the vector down every column; its length must equal the
    /// matrix row count.
    Column,
}

impl<T: Real> Matrix<T> {
    fn check_mul(&self, other: &Self) -> Result<()> {
        if self.n_cols() != other.n_rows() {
            return Err(MatrizError::DimensionMismatch {
                expected: format!(
                    "rhs with {} rows (lhs is {}x{})",
                    self.n_cols(),
                    self.n_rows(),
                    self.n_cols()
                ),
                actual: format!("{}x{}", other.n_rows(), other.n_cols()),
            });
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{}x{}", self.n_rows(), self.n_cols()),
                actual: format!("{}x{}", other.n_rows(), other.n_cols()),
            });
        }
        Ok(())
    }

    /// Matrix-matrix multiplication: `C[i][j] = Σ_k A[i][k] * B[k][j]`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `self.n_cols() != other.n_rows()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
    /// let c = a.matmul(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    /// ```
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        self.check_mul(other)?;
        let (m, n) = self.shape();
        let p = other.n_cols();

        let mut data = vec![T::ZERO; m * p];
        for i in 0..m {
            for j in 0..p {
                let mut sum = T::ZERO;
                for k in 0..n {
                    sum += self.get(i, k) * other.get(k, j);
                }
                data[i * p + j] = sum;
            }
        }
        Matrix::from_vec(m, p, data)
    }

    /// Matrix-matrix multiplication writing into a pre-sized output.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the operand shapes are incompatible or
    /// `out` is not exactly `self.n_rows() x other.n_cols()`. Nothing is
    /// written on failure.
    pub fn matmul_into(&self, other: &Self, out: &mut Self) -> Result<()> {
        self.check_mul(other)?;
        let (m, n) = self.shape();
        let p = other.n_cols();
        if out.shape() != (m, p) {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{m}x{p} output"),
                actual: format!("{}x{}", out.n_rows(), out.n_cols()),
            });
        }

        for i in 0..m {
            for j in 0..p {
                let mut sum = T::ZERO;
                for k in 0..n {
                    sum += self.get(i, k) * other.get(k, j);
                }
                out.set(i, j, sum);
            }
        }
        Ok(())
    }

    /// Computes `A · Bᵗ` without materializing the transpose.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `self.n_cols() != other.n_cols()`.
    pub fn matmul_transpose(&self, other: &Self) -> Result<Self> {
        let (m, p) = (self.n_rows(), other.n_rows());
        let mut out = Matrix::zeros(m, p);
        self.matmul_transpose_into(other, &mut out)?;
        Ok(out)
    }

    /// `A · Bᵗ` writing into a pre-sized output.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` on incompatible operands or a wrongly
    /// sized `out`. Nothing is written on failure.
    pub fn matmul_transpose_into(&self, other: &Self, out: &mut Self) -> Result<()> {
        if self.n_cols() != other.n_cols() {
            return Err(MatrizError::DimensionMismatch {
                expected: format!(
                    "rhs with {} columns (lhs is {}x{})",
                    self.n_cols(),
                    self.n_rows(),
                    self.n_cols()
                ),
                actual: format!("{}x{}", other.n_rows(), other.n_cols()),
            });
        }
        let (m, n) = self.shape();
        let p = other.n_rows();
        if out.shape() != (m, p) {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{m}x{p} output"),
                actual: format!("{}x{}", out.n_rows(), out.n_cols()),
            });
        }

        for i in 0..m {
            for j in 0..p {
                let mut sum = T::ZERO;
                for k in 0..n {
                    sum += self.get(i, k) * other.get(j, k);
                }
                out.set(i, j, sum);
            }
        }
        Ok(())
    }

    /// Computes `Aᵗ · B` without materializing the transpose.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `self.n_rows() != other.n_rows()`.
    pub fn transpose_matmul(&self, other: &Self) -> Result<Self> {
        let (n, p) = (self.n_cols(), other.n_cols());
        let mut out = Matrix::zeros(n, p);
        self.transpose_matmul_into(other, &mut out)?;
        Ok(out)
    }

    /// `Aᵗ · B` writing into a pre-sized output.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` on incompatible operands or a wrongly
    /// sized `out`. Nothing is written on failure.
    pub fn transpose_matmul_into(&self, other: &Self, out: &mut Self) -> Result<()> {
        if self.n_rows() != other.n_rows() {
            return Err(MatrizError::DimensionMismatch {
                expected: format!(
                    "rhs with {} rows (lhs is {}x{})",
                    self.n_rows(),
                    self.n_rows(),
                    self.n_cols()
                ),
                actual: format!("{}x{}", other.n_rows(), other.n_cols()),
            });
        }
        let (m, n) = self.shape();
        let p = other.n_cols();
        if out.shape() != (n, p) {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{n}x{p} output"),
                actual: format!("{}x{}", out.n_rows(), out.n_cols()),
            });
        }

        for i in 0..n {
            for j in 0..p {
                let mut sum = T::ZERO;
                for k in 0..m {
                    sum += self.get(k, i) * other.get(k, j);
                }
                out.set(i, j, sum);
            }
        }
        Ok(())
    }

    /// Computes `Aᵗ · v` without materializing the transpose.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `self.n_rows() != v.len()`.
    pub fn transpose_matvec(&self, v: &Vector<T>) -> Result<Vector<T>> {
        if self.n_rows() != v.len() {
            return Err(MatrizError::dimension_mismatch(
                "rows",
                self.n_rows(),
                v.len(),
            ));
        }
        let (m, n) = self.shape();
        let mut data = vec![T::ZERO; n];
        for (j, r) in data.iter_mut().enumerate() {
            let mut sum = T::ZERO;
            for k in 0..m {
                sum += self.get(k, j) * v[k];
            }
            *r = sum;
        }
        Ok(Vector::from_vec(data))
    }

    /// Matrix-vector multiplication `A · v`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `self.n_cols() != v.len()`.
    pub fn matvec(&self, v: &Vector<T>) -> Result<Vector<T>> {
        if self.n_cols() != v.len() {
            return Err(MatrizError::dimension_mismatch(
                "cols",
                self.n_cols(),
                v.len(),
            ));
        }
        let (m, n) = self.shape();
        let mut data = vec![T::ZERO; m];
        for (i, r) in data.iter_mut().enumerate() {
            let mut sum = T::ZERO;
            for k in 0..n {
                sum += self.get(i, k) * v[k];
            }
            *r = sum;
        }
        Ok(Vector::from_vec(data))
    }

    /// `A · v` writing into a pre-sized output vector.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` on incompatible operands or a wrongly
    /// sized `out`. Nothing is written on failure.
    pub fn matvec_into(&self, v: &Vector<T>, out: &mut Vector<T>) -> Result<()> {
        if self.n_cols() != v.len() {
            return Err(MatrizError::dimension_mismatch(
                "cols",
                self.n_cols(),
                v.len(),
            ));
        }
        if out.len() != self.n_rows() {
            return Err(MatrizError::dimension_mismatch(
                "output len",
                self.n_rows(),
                out.len(),
            ));
        }
        let (m, n) = self.shape();
        for i in 0..m {
            let mut sum = T::ZERO;
            for k in 0..n {
                sum += self.get(i, k) * v[k];
            }
            out[i] = sum;
        }
        Ok(())
    }

    /// Row-vector times matrix product `vᵗ · A`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `v.len() != self.n_rows()`.
    pub fn vecmat(&self, v: &Vector<T>) -> Result<Vector<T>> {
        if v.len() != self.n_rows() {
            return Err(MatrizError::dimension_mismatch(
                "rows",
                self.n_rows(),
                v.len(),
            ));
        }
        let (m, n) = self.shape();
        let mut data = vec![T::ZERO; n];
        for (j, r) in data.iter_mut().enumerate() {
            let mut sum = T::ZERO;
            for i in 0..m {
                sum += v[i] * self.get(i, j);
            }
            *r = sum;
        }
        Ok(Vector::from_vec(data))
    }

    /// Element-wise addition.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice().iter())
            .map(|(a, b)| *a + *b)
            .collect();
        Matrix::from_vec(self.n_rows(), self.n_cols(), data)
    }

    /// Element-wise subtraction.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice().iter())
            .map(|(a, b)| *a - *b)
            .collect();
        Matrix::from_vec(self.n_rows(), self.n_cols(), data)
    }

    fn broadcast<F>(&self, v: &Vector<T>, axis: Axis, op: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        let (rows, cols) = self.shape();
        match axis {
            Axis::Row => {
                if v.len() != cols {
                    return Err(MatrizError::dimension_mismatch("cols", cols, v.len()));
                }
            }
            Axis::Column => {
                if v.len() != rows {
                    return Err(MatrizError::dimension_mismatch("rows", rows, v.len()));
                }
            }
        }
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                let b = match axis {
                    Axis::Row => v[j],
                    Axis::Column => v[i],
                };
                data.push(op(self.get(i, j), b));
            }
        }
        Matrix::from_vec(rows, cols, data)
    }

    /// Adds a vector broadcast across one dimension of the matrix.
    ///
    /// With [`Axis::Row`] the vector is added to every row (its length must
    /// equal the column count); with [`Axis::Column`] it is added down every
    /// column (its length must equal the row count).
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the vector length does not match the
    /// size of the broadcast dimension.
    pub fn add_vector(&self, v: &Vector<T>, axis: Axis) -> Result<Self> {
        self.broadcast(v, axis, |a, b| a + b)
    }

    /// Subtracts a vector broadcast across one dimension of the matrix.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the vector length does not match the
    /// size of the broadcast dimension.
    pub fn sub_vector(&self, v: &Vector<T>, axis: Axis) -> Result<Self> {
        self.broadcast(v, axis, |a, b| a - b)
    }

    /// Multiplies each element by a scalar: `r[i][j] = a[i][j] * x`.
    #[must_use]
    pub fn mul_scalar(&self, x: T) -> Self {
        self.map(|a| a * x)
    }

    /// Divides each element by a scalar: `r[i][j] = a[i][j] / x`.
    ///
    /// A zero divisor is not checked; IEEE-754 infinities and NaNs propagate.
    #[must_use]
    pub fn div_scalar(&self, x: T) -> Self {
        self.map(|a| a / x)
    }

    /// Divides a scalar by each element: `r[i][j] = x / a[i][j]`.
    ///
    /// This is the reciprocal-scaled counterpart of [`Matrix::div_scalar`];
    /// the two operand orders are distinct operations. Zero elements are not
    /// checked; IEEE-754 infinities and NaNs propagate.
    #[must_use]
    pub fn scalar_div(&self, x: T) -> Self {
        self.map(|a| x / a)
    }

    /// Adds a scalar to each element.
    #[must_use]
    pub fn add_scalar(&self, x: T) -> Self {
        self.map(|a| a + x)
    }

    /// Subtracts a scalar from each element: `r[i][j] = a[i][j] - x`.
    #[must_use]
    pub fn sub_scalar(&self, x: T) -> Self {
        self.map(|a| a - x)
    }

    /// Subtracts each element from a scalar: `r[i][j] = x - a[i][j]`.
    #[must_use]
    pub fn scalar_sub(&self, x: T) -> Self {
        self.map(|a| x - a)
    }

    fn map<F: Fn(T) -> T>(&self, op: F) -> Self {
        let data = self.as_slice().iter().map(|a| op(*a)).collect();
        Matrix::from_vec(self.n_rows(), self.n_cols(), data)
            .expect("map preserves element count")
    }

    /// Multiplies by a diagonal matrix given as its diagonal vector:
    /// `C = A · diag(d)`, i.e. `C[i][j] = A[i][j] * d[j]`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `d.len() != self.n_cols()`.
    pub fn mul_diag(&self, d: &Vector<T>) -> Result<Self> {
        if d.len() != self.n_cols() {
            return Err(MatrizError::dimension_mismatch(
                "cols",
                self.n_cols(),
                d.len(),
            ));
        }
        let (rows, cols) = self.shape();
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(self.get(i, j) * d[j]);
            }
        }
        Matrix::from_vec(rows, cols, data)
    }

    /// Divides by a diagonal matrix given as its diagonal vector:
    /// `C = A · diag(d)⁻¹`, i.e. `C[i][j] = A[i][j] / d[j]`.
    ///
    /// Zero entries in `d` are not checked; IEEE-754 infinities and NaNs
    /// propagate rather than failing.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `d.len() != self.n_cols()`.
    pub fn div_diag(&self, d: &Vector<T>) -> Result<Self> {
        if d.len() != self.n_cols() {
            return Err(MatrizError::dimension_mismatch(
                "cols",
                self.n_cols(),
                d.len(),
            ));
        }
        let (rows, cols) = self.shape();
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(self.get(i, j) / d[j]);
            }
        }
        Matrix::from_vec(rows, cols, data)
    }

    /// Kronecker product: output shape is
    /// `(rows(A)*rows(B), cols(A)*cols(B))` with
    /// `R[i*rb+k][j*cb+l] = A[i][j] * B[k][l]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let a = Matrix::from_vec(1, 2, vec![1.0, 2.0]).unwrap();
    /// let b = Matrix::from_vec(2, 1, vec![3.0, 4.0]).unwrap();
    /// let k = a.kronecker(&b);
    /// assert_eq!(k.shape(), (2, 2));
    /// assert_eq!(k.as_slice(), &[3.0, 6.0, 4.0, 8.0]);
    /// ```
    #[must_use]
    pub fn kronecker(&self, other: &Self) -> Self {
        let (ra, ca) = self.shape();
        let (rb, cb) = other.shape();
        let mut out = Matrix::zeros(ra * rb, ca * cb);
        for i in 0..ra {
            for j in 0..ca {
                let a = self.get(i, j);
                for k in 0..rb {
                    for l in 0..cb {
                        out.set(i * rb + k, j * cb + l, a * other.get(k, l));
                    }
                }
            }
        }
        out
    }

    /// Raises a square matrix to the `n`-th power by repeated squaring.
    /// `n == 0` returns the identity matrix of matching size.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` if the matrix is not square.
    pub fn pow(&self, n: u32) -> Result<Self> {
        if !self.is_square() {
            return Err(MatrizError::NotSquare {
                rows: self.n_rows(),
                cols: self.n_cols(),
            });
        }
        let mut result = Matrix::eye(self.n_rows());
        let mut base = self.clone();
        let mut e = n;
        while e > 0 {
            if e & 1 == 1 {
                result = result.matmul(&base)?;
            }
            e >>= 1;
            if e > 0 {
                base = base.matmul(&base)?;
            }
        }
        Ok(result)
    }

    /// Matrix division `A · B⁻¹`, solved through a decomposition rather
    /// than an explicit inverse.
    ///
    /// The system `X · B = A` is transposed to `Bᵗ · Xᵗ = Aᵗ` and solved
    /// with an LU factorization when `B` is square, or a QR least-squares
    /// factorization when it is not.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `self.n_cols() != other.n_cols()` (or,
    /// in the non-square case, if `Bᵗ` is underdetermined), and
    /// `SingularMatrix` when `B` is not invertible to working precision.
    pub fn matdiv(&self, other: &Self) -> Result<Self> {
        if self.n_cols() != other.n_cols() {
            return Err(MatrizError::DimensionMismatch {
                expected: format!(
                    "divisor with {} columns (dividend is {}x{})",
                    self.n_cols(),
                    self.n_rows(),
                    self.n_cols()
                ),
                actual: format!("{}x{}", other.n_rows(), other.n_cols()),
            });
        }
        let bt = other.transpose();
        let at = self.transpose();
        let xt = if other.is_square() {
            Lu::new(&bt)?.solve_matrix(&at)?
        } else {
            Qr::new(&bt)?.solve_matrix(&at)?
        };
        Ok(xt.transpose())
    }
}

#[cfg(test)]
#[path = "algebra_tests.rs"]
mod tests;
