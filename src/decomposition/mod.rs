//! Matrix decompositions backing the solve operations.
//!
//! The arithmetic kernel never inverts a matrix directly; `matdiv` and the
//! linear model delegate to these factorizations for numerically stable
//! solving.

mod cholesky;
mod lu;
mod qr;

pub use cholesky::Cholesky;
pub use lu::Lu;
pub use qr::Qr;
