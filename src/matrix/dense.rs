//! Dense row-major matrix storage.
//!
//! This module provides [`Matrix`], an owned `rows x cols` buffer of `f64`
//! elements stored contiguously in row-major order (`i * cols + j`). It
//! covers construction, resizing, element access and tolerance-based
//! equality; arithmetic lives in [`super::ops`] and the determinant family
//! in [`crate::solver`].
//!
//! Dimensions are always at least `1 x 1` and `data.len() == rows * cols`
//! holds after every public call.

use crate::config::{DEFAULT_DIM, EQ_TOLERANCE};
use crate::error::{MatrixError, Result};
use std::ops::{Index, IndexMut};

/// Dense real matrix owning a contiguous row-major buffer.
#[derive(Clone, Debug)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

fn check_dims(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidDimension { rows, cols });
    }
    Ok(())
}

impl Matrix {
    /// Create a zero-filled `rows x cols` matrix.
    ///
    /// # Errors
    /// `InvalidDimension` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_dims(rows, cols)?;
        Ok(Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        })
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Matrix::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Build from a row-major buffer.
    ///
    /// # Errors
    /// `InvalidDimension` for a zero dimension, `DimensionMismatch` when
    /// `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        check_dims(rows, cols)?;
        if data.len() != rows * cols {
            return Err(MatrixError::DimensionMismatch {
                op: "from_vec",
                lhs: (rows, cols),
                rhs: (data.len(), 1),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Build from fixed-width rows, e.g. `Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])`.
    pub fn from_rows<const C: usize>(rows: &[[f64; C]]) -> Result<Self> {
        Matrix::from_vec(rows.len(), C, rows.iter().flatten().copied().collect())
    }

    /// Build a `rows x cols` matrix whose `(i, j)` element is `f(i, j)`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Result<Self> {
        check_dims(rows, cols)?;
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Wrap a buffer whose shape is already known to be valid.
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows > 0 && cols > 0 && data.len() == rows * cols);
        Matrix { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub(crate) fn same_shape(&self, other: &Matrix) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Row-major view of the elements.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Change the row count, keeping the overlapping top rows and
    /// zero-filling new ones. No-op if `rows` is unchanged.
    ///
    /// # Errors
    /// `InvalidDimension` if `rows == 0`; the matrix is left untouched.
    pub fn set_rows(&mut self, rows: usize) -> Result<()> {
        check_dims(rows, self.cols)?;
        if rows != self.rows {
            self.reshape(rows, self.cols);
        }
        Ok(())
    }

    /// Change the column count, keeping the overlapping left columns and
    /// zero-filling new ones. No-op if `cols` is unchanged.
    ///
    /// # Errors
    /// `InvalidDimension` if `cols == 0`; the matrix is left untouched.
    pub fn set_cols(&mut self, cols: usize) -> Result<()> {
        check_dims(self.rows, cols)?;
        if cols != self.cols {
            self.reshape(self.rows, cols);
        }
        Ok(())
    }

    fn reshape(&mut self, rows: usize, cols: usize) {
        tracing::trace!(
            from_rows = self.rows,
            from_cols = self.cols,
            rows,
            cols,
            "reallocating matrix buffer"
        );
        let mut data = vec![0.0; rows * cols];
        let keep_cols = cols.min(self.cols);
        for i in 0..rows.min(self.rows) {
            let src = i * self.cols;
            data[i * cols..i * cols + keep_cols].copy_from_slice(&self.data[src..src + keep_cols]);
        }
        self.rows = rows;
        self.cols = cols;
        self.data = data;
    }

    fn check_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Checked read access to element `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> Result<&f64> {
        let k = self.check_index(row, col)?;
        Ok(&self.data[k])
    }

    /// Checked write access to element `(row, col)`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        let k = self.check_index(row, col)?;
        Ok(&mut self.data[k])
    }

    /// `true` iff shapes match and every element pair differs by at most
    /// [`EQ_TOLERANCE`].
    pub fn equals(&self, other: &Matrix) -> bool {
        self.same_shape(other)
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= EQ_TOLERANCE)
    }
}

impl Default for Matrix {
    /// A `3 x 3` zero matrix.
    fn default() -> Self {
        Matrix {
            rows: DEFAULT_DIM,
            cols: DEFAULT_DIM,
            data: vec![0.0; DEFAULT_DIM * DEFAULT_DIM],
        }
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

/// Unchecked-by-`Result` indexing.
///
/// # Panics
/// Panics if `(row, col)` is out of range.
impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        let k = self.check_index(row, col).unwrap_or_else(|e| panic!("{e}"));
        &self.data[k]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        let k = self.check_index(row, col).unwrap_or_else(|e| panic!("{e}"));
        &mut self.data[k]
    }
}
