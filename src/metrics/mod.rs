//! Evaluation metrics for regression models.

use crate::primitives::{Real, Vector};

/// Computes the coefficient of determination R².
///
/// R² = 1 − SS_res / SS_tot. A constant target (SS_tot = 0) yields 0.
///
/// # Panics
///
/// Panics if the vectors have different lengths.
///
/// # Examples
///
/// ```
/// use matriz::metrics::r_squared;
/// use matriz::primitives::Vector;
///
/// let y_true = Vector::<f64>::from_slice(&[1.0, 2.0, 3.0]);
/// let y_pred = Vector::<f64>::from_slice(&[1.0, 2.0, 3.0]);
/// assert!((r_squared(&y_pred, &y_true) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn r_squared<T: Real>(y_pred: &Vector<T>, y_true: &Vector<T>) -> T {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");

    let y_mean = y_true.mean();

    let mut ss_res = T::ZERO;
    for (t, p) in y_true.iter().zip(y_pred.iter()) {
        let d = *t - *p;
        ss_res += d * d;
    }

    let mut ss_tot = T::ZERO;
    for t in y_true.iter() {
        let d = *t - y_mean;
        ss_tot += d * d;
    }

    if ss_tot == T::ZERO {
        return T::ZERO;
    }

    T::ONE - ss_res / ss_tot
}

/// Computes the Mean Squared Error: `(1/n) Σ (y_true − y_pred)²`.
///
/// # Panics
///
/// Panics if the vectors have different lengths.
#[must_use]
pub fn mse<T: Real>(y_pred: &Vector<T>, y_true: &Vector<T>) -> T {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");

    let mut sum = T::ZERO;
    for (t, p) in y_true.iter().zip(y_pred.iter()) {
        let d = *t - *p;
        sum += d * d;
    }
    sum / T::from_usize(y_true.len())
}
