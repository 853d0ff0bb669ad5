//! Linear models fit by ordinary least squares.

use crate::decomposition::Cholesky;
use crate::error::{MatrizError, Result};
use crate::metrics::r_squared;
use crate::primitives::{Matrix, Vector};
use crate::traits::Estimator;

/// Ordinary Least Squares (OLS) linear regression.
///
/// Fits a linear model by minimizing the residual sum of squares between
/// observed targets and predicted targets:
///
/// ```text
/// y = X β + ε
/// ```
///
/// # Solver
///
/// Uses normal equations `XᵗX β = Xᵗy`, built with the kernel's
/// transpose-product operations and solved through a Cholesky
/// decomposition.
///
/// # Examples
///
/// ```
/// use matriz::prelude::*;
///
/// // Simple linear regression: y = 2x + 1
/// let x = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let y = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);
///
/// let mut model = LinearRegression::new();
/// model.fit(&x, &y).unwrap();
///
/// let r2 = model.score(&x, &y);
/// assert!(r2 > 0.99);
/// ```
#[derive(Debug, Clone)]
pub struct LinearRegression {
    /// Coefficients for features (excluding intercept).
    coefficients: Option<Vector<f64>>,
    /// Intercept (bias) term.
    intercept: f64,
    /// Whether to fit an intercept.
    fit_intercept: bool,
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRegression {
    /// Creates a new `LinearRegression` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: 0.0,
            fit_intercept: true,
        }
    }

    /// Sets whether to fit an intercept term.
    #[must_use]
    pub fn with_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    /// Returns the coefficients (excluding intercept).
    ///
    /// # Panics
    ///
    /// Panics if model is not fitted.
    #[must_use]
    pub fn coefficients(&self) -> &Vector<f64> {
        self.coefficients
            .as_ref()
            .expect("Model not fitted. Call fit() first.")
    }

    /// Returns the intercept term.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }

    /// Adds an intercept column of ones to the design matrix.
    fn add_intercept_column(x: &Matrix<f64>) -> Matrix<f64> {
        let (n_rows, n_cols) = x.shape();
        let mut data = Vec::with_capacity(n_rows * (n_cols + 1));

        for i in 0..n_rows {
            data.push(1.0);
            for j in 0..n_cols {
                data.push(x.get(i, j));
            }
        }

        Matrix::from_vec(n_rows, n_cols + 1, data)
            .expect("intercept column preserves row count")
    }
}

impl Estimator for LinearRegression {
    /// Fits the linear regression model using normal equations.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Input dimensions don't match
    /// - Not enough samples for the number of features (underdetermined
    ///   system)
    /// - The Gram matrix is singular (collinear features)
    fn fit(&mut self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<()> {
        let (n_samples, n_features) = x.shape();

        if n_samples != y.len() {
            return Err(MatrizError::dimension_mismatch(
                "samples",
                n_samples,
                y.len(),
            ));
        }

        if n_samples == 0 {
            return Err(MatrizError::Other(
                "Cannot fit with zero samples".to_string(),
            ));
        }

        let required_samples = if self.fit_intercept {
            n_features + 1
        } else {
            n_features
        };

        if n_samples < required_samples {
            return Err(MatrizError::Other(format!(
                "Insufficient samples: need at least {required_samples}, got {n_samples}"
            )));
        }

        let x_design = if self.fit_intercept {
            Self::add_intercept_column(x)
        } else {
            x.clone()
        };

        // Normal equations: XᵗX β = Xᵗy.
        let xtx = x_design.transpose_matmul(&x_design)?;
        let xty = x_design.transpose_matvec(y)?;

        let beta = Cholesky::new(&xtx)?.solve(&xty)?;

        if self.fit_intercept {
            self.intercept = beta[0];
            self.coefficients = Some(beta.slice(1, n_features + 1));
        } else {
            self.intercept = 0.0;
            self.coefficients = Some(beta);
        }

        Ok(())
    }

    /// Predicts target values for input data.
    ///
    /// # Panics
    ///
    /// Panics if model is not fitted or if the feature count differs from
    /// the training data.
    fn predict(&self, x: &Matrix<f64>) -> Vector<f64> {
        let coefficients = self
            .coefficients
            .as_ref()
            .expect("Model not fitted. Call fit() first.");

        x.matvec(coefficients)
            .expect("feature count must match training data")
            .add_scalar(self.intercept)
    }

    /// Computes R² on the given data.
    fn score(&self, x: &Matrix<f64>, y: &Vector<f64>) -> f64 {
        let predictions = self.predict(x);
        r_squared(&predictions, y)
    }
}

#[cfg(test)]
#[path = "linear_model_tests.rs"]
mod tests;
