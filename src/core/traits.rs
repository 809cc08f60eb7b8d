//! Core matrix traits for densemat.

use num_traits::Float;

/// Shape of a two-dimensional matrix.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
}

/// Element read by `(row, col)`.
///
/// Callers guarantee `i < nrows()` and `j < ncols()`; implementations may
/// panic otherwise.
pub trait MatrixGet<T> {
    fn get(&self, i: usize, j: usize) -> T;
}

/// Returns `true` when `a` and `b` have the same shape and every pair of
/// corresponding elements differs by at most `tol`.
pub fn approx_eq<T, A, B>(a: &A, b: &B, tol: T) -> bool
where
    T: Float,
    A: MatShape + MatrixGet<T> + ?Sized,
    B: MatShape + MatrixGet<T> + ?Sized,
{
    if a.nrows() != b.nrows() || a.ncols() != b.ncols() {
        return false;
    }
    (0..a.nrows()).all(|i| (0..a.ncols()).all(|j| (a.get(i, j) - b.get(i, j)).abs() <= tol))
}
