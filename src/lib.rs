//! Matriz: dense matrix algebra kernel in pure Rust.
//!
//! Matriz provides correct, allocation-predictable arithmetic over dense
//! vectors and matrices, a decomposition-backed matrix division, and a
//! linear regression fitter built on the normal equations.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
//!
//! let c = a.matmul(&b).unwrap();
//! assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
//!
//! // A · A⁻¹ through an LU solve, never an explicit inverse.
//! let i = a.matdiv(&a).unwrap();
//! assert!((i.get(0, 0) - 1.0).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types and their arithmetic
//! - [`decomposition`]: LU, QR and Cholesky factorizations for stable solves
//! - [`linear_model`]: Ordinary least squares regression
//! - [`metrics`]: Evaluation metrics (R², MSE)
//! - [`error`]: Error taxonomy shared by every operation
//!
//! # Numeric semantics
//!
//! All arithmetic follows IEEE-754 exactly: no clamping, rounding, or
//! tolerance is applied anywhere in the kernel, and NaN or infinity results
//! from degenerate inputs (such as division by a zero diagonal entry)
//! propagate unchanged. Dimension mismatches, by contrast, always fail
//! before any output is produced. `f64` is the primary element type; every
//! operation is also available at `f32` through the same generic code.

pub mod decomposition;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod prelude;
pub mod primitives;
pub mod traits;
