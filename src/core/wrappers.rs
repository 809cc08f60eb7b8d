//! Wrappers connecting `Matrix` with `faer` dense matrices.
//!
//! `faer::Mat` gets the crate's [`MatShape`] and [`MatrixGet`] traits so it
//! can be compared against a [`Matrix`] with [`approx_eq`](super::traits::approx_eq),
//! and `Matrix` converts to and from `faer::Mat<f64>` by copying elements.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::Result;
use crate::matrix::Matrix;
use faer::Mat;
use num_traits::Float;

impl<T: Copy + Float> MatrixGet<T> for Mat<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T: Copy + Float> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl MatrixGet<f64> for Matrix {
    fn get(&self, i: usize, j: usize) -> f64 {
        self[(i, j)]
    }
}

impl MatShape for Matrix {
    fn nrows(&self) -> usize {
        self.rows()
    }
    fn ncols(&self) -> usize {
        self.cols()
    }
}

impl Matrix {
    /// Copy a `faer` matrix into a new `Matrix`.
    ///
    /// Fails with `InvalidDimension` if `m` has zero rows or columns.
    pub fn from_faer(m: &Mat<f64>) -> Result<Self> {
        Matrix::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }

    /// Copy this matrix into a column-major `faer::Mat<f64>`.
    pub fn to_faer(&self) -> Mat<f64> {
        Mat::from_fn(self.rows(), self.cols(), |i, j| self[(i, j)])
    }
}
