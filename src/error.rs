//! Error types for matriz operations.
//!
//! All failures are local, synchronous, and non-retryable: the kernel
//! performs no I/O and has no dependency that can fail intermittently.

use std::fmt;

/// Main error type for matriz operations.
///
/// Every operation validates its operands before touching any output, so a
/// returned error always means no partial result was produced.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "3x2".to_string(),
///     actual: "2x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Operation requires a square matrix.
    NotSquare {
        /// Row count of the offending matrix
        rows: usize,
        /// Column count of the offending matrix
        cols: usize,
    },

    /// Operand has the wrong number of elements for a fixed-size operation.
    InvalidDimension {
        /// Required element count
        expected: usize,
        /// Actual element count
        actual: usize,
    },

    /// Matrix is singular (non-invertible) to the required precision.
    SingularMatrix {
        /// Determinant value (close to zero)
        det: f64,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square, got {rows}x{cols}")
            }
            MatrizError::InvalidDimension { expected, actual } => {
                write!(
                    f,
                    "Invalid operand dimension: expected {expected} elements, got {actual}"
                )
            }
            MatrizError::SingularMatrix { det } => {
                write!(
                    f,
                    "Singular matrix detected: determinant = {det}, cannot invert"
                )
            }
            MatrizError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MatrizError {}

impl From<&str> for MatrizError {
    fn from(msg: &str) -> Self {
        MatrizError::Other(msg.to_string())
    }
}

impl From<String> for MatrizError {
    fn from(msg: String) -> Self {
        MatrizError::Other(msg)
    }
}

impl MatrizError {
    /// Create a dimension mismatch error with descriptive context.
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
