//! Minors, cofactor matrix and inverse via the adjugate.
//!
//! The cofactor of `(i, j)` is `(-1)^(i+j)` times the determinant of the
//! minor obtained by deleting row `i` and column `j`. The inverse is the
//! transposed cofactor matrix (the adjugate) scaled by `1 / det`.
//!
//! A `1 x 1` matrix has an empty minor whose determinant is taken as `1`,
//! so its cofactor matrix is `[[1]]` and the inverse of `[[a]]` is `[[1/a]]`.

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::solver::elimination::determinant_in_place;

/// Copy `src` (`n x n`, row-major) without row `row` and column `col` into
/// `dst` (`(n-1) x (n-1)`).
fn fill_minor(n: usize, src: &[f64], row: usize, col: usize, dst: &mut [f64]) {
    let mut k = 0;
    for i in (0..n).filter(|&i| i != row) {
        for j in (0..n).filter(|&j| j != col) {
            dst[k] = src[i * n + j];
            k += 1;
        }
    }
}

impl Matrix {
    fn require_square(&self) -> Result<usize> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.rows())
    }

    /// The `(n-1) x (n-1)` submatrix left after deleting `row` and `col`.
    ///
    /// # Errors
    /// - `NotSquare` for a non-square matrix.
    /// - `OutOfRange` if `row` or `col` is not a valid index.
    /// - `InvalidDimension` for a `1 x 1` matrix, whose minor is empty.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        let n = self.require_square()?;
        self.at(row, col)?;
        let mut data = vec![0.0; (n - 1) * (n - 1)];
        fill_minor(n, self.as_slice(), row, col, &mut data);
        Matrix::from_vec(n - 1, n - 1, data)
    }

    /// Matrix of signed minor determinants, `c[(i, j)] = (-1)^(i+j) * det(minor(i, j))`.
    ///
    /// # Errors
    /// `NotSquare` for a non-square matrix.
    pub fn cofactors(&self) -> Result<Matrix> {
        let n = self.require_square()?;
        if n == 1 {
            return Matrix::from_vec(1, 1, vec![1.0]);
        }
        let src = self.as_slice();
        let m = n - 1;
        let mut scratch = vec![0.0; m * m];
        let mut out = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                fill_minor(n, src, i, j, &mut scratch);
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                out.push(sign * determinant_in_place(m, &mut scratch));
            }
        }
        Matrix::from_vec(n, n, out)
    }

    /// Inverse via the adjugate: `cofactors().transpose() * (1 / det)`.
    ///
    /// # Errors
    /// - `NotSquare` for a non-square matrix.
    /// - `Singular` if `determinant()` is exactly zero, which includes every
    ///   matrix whose elimination meets a pivot below `PIVOT_TOLERANCE`.
    pub fn inverse(&self) -> Result<Matrix> {
        self.require_square()?;
        let det = self.determinant()?;
        if det == 0.0 {
            tracing::debug!(n = self.rows(), "refusing to invert singular matrix");
            return Err(MatrixError::Singular);
        }
        let mut adjugate = self.cofactors()?.transpose();
        adjugate.mul_scalar(1.0 / det);
        Ok(adjugate)
    }
}
