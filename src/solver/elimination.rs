//! Determinant by Gaussian elimination with partial pivoting.
//!
//! Elimination runs on a scratch copy of the matrix, so `Matrix::determinant`
//! never disturbs the receiver. At step `i` the row among `i..n` with the
//! largest `|a[r][i]|` (first one on ties) is swapped into place, flipping
//! the sign; a pivot below [`PIVOT_TOLERANCE`] short-circuits to `0.0`.
//! Otherwise the entries below the pivot are eliminated and the pivot is
//! folded into the running product.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §3.4

use crate::config::PIVOT_TOLERANCE;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Determinant of the `n x n` row-major matrix in `a`, destroying `a`.
pub(crate) fn determinant_in_place(n: usize, a: &mut [f64]) -> f64 {
    debug_assert_eq!(a.len(), n * n);
    let mut det = 1.0;
    let mut sign = 1.0;
    for i in 0..n {
        let mut pivot_row = i;
        for r in i + 1..n {
            if a[r * n + i].abs() > a[pivot_row * n + i].abs() {
                pivot_row = r;
            }
        }
        if pivot_row != i {
            tracing::trace!(step = i, pivot_row, "swapping pivot row");
            let (upper, lower) = a.split_at_mut(pivot_row * n);
            upper[i * n..(i + 1) * n].swap_with_slice(&mut lower[..n]);
            sign = -sign;
        }

        let pivot = a[i * n + i];
        if pivot.abs() < PIVOT_TOLERANCE {
            tracing::debug!(step = i, pivot, "singular pivot, determinant is zero");
            return 0.0;
        }

        for r in i + 1..n {
            let factor = a[r * n + i] / pivot;
            for k in i..n {
                a[r * n + k] -= factor * a[i * n + k];
            }
        }
        det *= pivot;
    }
    det * sign
}

impl Matrix {
    /// Determinant of a square matrix.
    ///
    /// Returns exactly `0.0` as soon as a pivot smaller than
    /// [`PIVOT_TOLERANCE`] in magnitude is met.
    ///
    /// # Errors
    /// `NotSquare` if `rows() != cols()`.
    pub fn determinant(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let mut scratch = self.as_slice().to_vec();
        Ok(determinant_in_place(self.rows(), &mut scratch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn two_by_two() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_abs_diff_eq!(a.determinant().unwrap(), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn receiver_is_not_mutated() {
        let a = Matrix::from_rows(&[[0.0, 1.0], [2.0, 3.0]]).unwrap();
        let before = a.clone();
        assert_abs_diff_eq!(a.determinant().unwrap(), -2.0, epsilon = 1e-12);
        assert_eq!(a.as_slice(), before.as_slice());
    }

    #[test]
    fn pivoting_handles_zero_leading_entry() {
        let a = Matrix::from_rows(&[[0.0, 2.0, 1.0], [1.0, 1.0, 1.0], [2.0, 0.0, 3.0]]).unwrap();
        assert_abs_diff_eq!(a.determinant().unwrap(), -4.0, epsilon = 1e-12);
    }

    #[test]
    fn singular_short_circuits_to_exact_zero() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]]).unwrap();
        assert_eq!(a.determinant().unwrap(), 0.0);
        let tiny = Matrix::from_rows(&[[1e-12]]).unwrap();
        assert_eq!(tiny.determinant().unwrap(), 0.0);
    }

    #[test]
    fn non_square_is_rejected() {
        let a = Matrix::new(2, 3).unwrap();
        assert_eq!(a.determinant(), Err(MatrixError::NotSquare { rows: 2, cols: 3 }));
    }
}
