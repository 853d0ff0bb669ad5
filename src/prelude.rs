//! Convenience re-exports for common usage.
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::decomposition::{Cholesky, Lu, Qr};
pub use crate::error::{MatrizError, Result};
pub use crate::linear_model::LinearRegression;
pub use crate::metrics::{mse, r_squared};
pub use crate::primitives::{cartesian_product, Axis, Matrix, Real, Vector};
pub use crate::traits::Estimator;
