//! Matrix module: the dense `Matrix` value type and its arithmetic.

pub mod dense;
pub use dense::Matrix;
pub mod ops;
