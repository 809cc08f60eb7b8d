//! Direct algorithms on square matrices: determinant, cofactors, inverse.

pub mod cofactor;
pub mod elimination;
