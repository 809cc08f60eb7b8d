//! densemat: dense real matrices with exact, predictable small-to-medium linear algebra
//!
//! This crate provides a single owned value type, [`Matrix`], storing `f64`
//! elements in one contiguous row-major buffer. It supports element access,
//! tolerance-based equality, addition/subtraction, scalar and matrix
//! multiplication, transpose, minors and cofactors, the determinant via
//! Gaussian elimination with partial pivoting, and inversion via the
//! adjugate. Every precondition violation is reported as a [`MatrixError`].
//!
//! ```
//! use densemat::Matrix;
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
//! assert!((a.determinant()? + 2.0).abs() < 1e-12);
//! let inv = a.inverse()?;
//! assert_eq!(&a * &inv, Matrix::identity(2)?);
//! # Ok::<(), densemat::MatrixError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod solver;

// Re-exports for convenience
pub use config::*;
pub use crate::core::traits::{approx_eq, MatShape, MatrixGet};
pub use error::*;
pub use matrix::*;
