//! Arithmetic on [`Matrix`]: elementwise sum/difference, scaling, matrix
//! product and transpose.
//!
//! Every operation has an in-place form (`add_matrix`, `sub_matrix`,
//! `mul_scalar`, `mul_matrix`) and a value-returning form (`sum`,
//! `difference`, `scaled`, `product`) that clones `self` and applies the
//! in-place form. Shapes are validated before anything is written, so a
//! failed call never leaves `self` partially updated.
//!
//! The `std::ops` operators forward to the checked methods and panic on a
//! shape mismatch.

use super::Matrix;
use crate::error::{MatrixError, Result};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

impl Matrix {
    fn check_same_shape(&self, other: &Matrix, op: &'static str) -> Result<()> {
        if !self.same_shape(other) {
            return Err(MatrixError::DimensionMismatch {
                op,
                lhs: (self.rows(), self.cols()),
                rhs: (other.rows(), other.cols()),
            });
        }
        Ok(())
    }

    /// `self += other`, elementwise.
    pub fn add_matrix(&mut self, other: &Matrix) -> Result<()> {
        self.check_same_shape(other, "add")?;
        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a += b;
        }
        Ok(())
    }

    /// `self -= other`, elementwise.
    pub fn sub_matrix(&mut self, other: &Matrix) -> Result<()> {
        self.check_same_shape(other, "sub")?;
        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a -= b;
        }
        Ok(())
    }

    /// Multiply every element by `k`.
    pub fn mul_scalar(&mut self, k: f64) {
        for a in self.as_mut_slice() {
            *a *= k;
        }
    }

    /// Replace `self` with `self * other`.
    ///
    /// The product is accumulated into a fresh `rows x other.cols` buffer
    /// and swapped in once complete.
    ///
    /// # Errors
    /// `DimensionMismatch` unless `self.cols() == other.rows()`.
    pub fn mul_matrix(&mut self, other: &Matrix) -> Result<()> {
        if self.cols() != other.rows() {
            return Err(MatrixError::DimensionMismatch {
                op: "mul",
                lhs: (self.rows(), self.cols()),
                rhs: (other.rows(), other.cols()),
            });
        }
        let (n, m, p) = (self.rows(), self.cols(), other.cols());
        let a = self.as_slice();
        let b = other.as_slice();
        let mut out = vec![0.0; n * p];
        for i in 0..n {
            for j in 0..p {
                out[i * p + j] = (0..m).map(|k| a[i * m + k] * b[k * p + j]).sum();
            }
        }
        *self = Matrix::from_raw(n, p, out);
        Ok(())
    }

    /// New matrix holding `self + other`.
    pub fn sum(&self, other: &Matrix) -> Result<Matrix> {
        let mut out = self.clone();
        out.add_matrix(other)?;
        Ok(out)
    }

    /// New matrix holding `self - other`.
    pub fn difference(&self, other: &Matrix) -> Result<Matrix> {
        let mut out = self.clone();
        out.sub_matrix(other)?;
        Ok(out)
    }

    /// New matrix holding `k * self`.
    pub fn scaled(&self, k: f64) -> Matrix {
        let mut out = self.clone();
        out.mul_scalar(k);
        out
    }

    /// New matrix holding `self * other`.
    pub fn product(&self, other: &Matrix) -> Result<Matrix> {
        let mut out = self.clone();
        out.mul_matrix(other)?;
        Ok(out)
    }

    /// New `cols x rows` matrix with `result[(i, j)] == self[(j, i)]`.
    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = (self.rows(), self.cols());
        let data = self.as_slice();
        let mut out = Vec::with_capacity(data.len());
        for i in 0..cols {
            for j in 0..rows {
                out.push(data[j * cols + i]);
            }
        }
        Matrix::from_raw(cols, rows, out)
    }
}

fn expect_shape<T>(r: Result<T>) -> T {
    r.unwrap_or_else(|e| panic!("{e}"))
}

impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        expect_shape(self.add_matrix(rhs))
    }
}

impl SubAssign<&Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: &Matrix) {
        expect_shape(self.sub_matrix(rhs))
    }
}

impl MulAssign<&Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: &Matrix) {
        expect_shape(self.mul_matrix(rhs))
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, k: f64) {
        self.mul_scalar(k)
    }
}

impl Add<&Matrix> for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Matrix {
        expect_shape(self.sum(rhs))
    }
}

impl Add<&Matrix> for Matrix {
    type Output = Matrix;

    fn add(mut self, rhs: &Matrix) -> Matrix {
        self += rhs;
        self
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &Matrix) -> Matrix {
        expect_shape(self.difference(rhs))
    }
}

impl Sub<&Matrix> for Matrix {
    type Output = Matrix;

    fn sub(mut self, rhs: &Matrix) -> Matrix {
        self -= rhs;
        self
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        expect_shape(self.product(rhs))
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: &Matrix) -> Matrix {
        self *= rhs;
        self
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, k: f64) -> Matrix {
        self.scaled(k)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, k: f64) -> Matrix {
        self *= k;
        self
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, m: &Matrix) -> Matrix {
        m.scaled(self)
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, m: Matrix) -> Matrix {
        m * self
    }
}
