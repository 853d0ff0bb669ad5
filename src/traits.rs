//! Core trait for model fitting over the kernel's primitives.

use crate::error::Result;
use crate::primitives::{Matrix, Vector};

/// Supervised estimator fit on a design matrix and target vector.
///
/// Estimators consume the kernel's arithmetic primitives; the kernel itself
/// knows nothing about models or coefficients.
///
/// # Examples
///
/// ```
/// use matriz::prelude::*;
///
/// // y = 2x + 1
/// let x = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let y = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);
///
/// let mut model = LinearRegression::new();
/// model.fit(&x, &y).unwrap();
/// assert!(model.score(&x, &y) > 0.99);
/// ```
pub trait Estimator {
    /// Fits the model to training data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails (dimension mismatch, singular
    /// matrix, etc.).
    fn fit(&mut self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<()>;

    /// Predicts target values for input data.
    fn predict(&self, x: &Matrix<f64>) -> Vector<f64>;

    /// Computes the score (R² for regression).
    fn score(&self, x: &Matrix<f64>, y: &Vector<f64>) -> f64;
}
