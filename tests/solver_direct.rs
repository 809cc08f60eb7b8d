//! Tests for the direct algorithms: determinant, cofactors and inverse.
//!
//! The inverse is validated both by the defining identity `A · A⁻¹ = I` and
//! against `faer`'s full-pivot LU applied to the identity right-hand side.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use densemat::{approx_eq, Matrix, MatrixError};
use faer::linalg::solvers::{FullPivLu, SolveCore};
use faer::{Conj, Mat, MatMut};
use rand::Rng;

/// Random `n x n` matrix made strictly diagonally dominant, hence non-singular.
fn random_nonsingular(n: usize) -> Matrix {
    let mut rng = rand::thread_rng();
    let mut a = Matrix::from_fn(n, n, |_, _| rng.r#gen::<f64>() * 2.0 - 1.0).unwrap();
    for i in 0..n {
        a[(i, i)] += n as f64 + 1.0;
    }
    a
}

/// Inverse computed by `faer`: solve A X = I column by column.
fn faer_inverse(a: &Mat<f64>) -> Mat<f64> {
    let n = a.nrows();
    let factor = FullPivLu::new(a.as_ref());
    let mut x: Vec<f64> = (0..n * n).map(|k| if k % (n + 1) == 0 { 1.0 } else { 0.0 }).collect();
    let x_mat = MatMut::from_column_major_slice_mut(&mut x, n, n);
    factor.solve_in_place_with_conj(Conj::No, x_mat);
    Mat::from_fn(n, n, |i, j| x[j * n + i])
}

/// Determinant of the identity is one for every size.
#[test]
fn identity_determinant_is_one() {
    for n in 1..9 {
        let id = Matrix::identity(n).unwrap();
        assert_abs_diff_eq!(id.determinant().unwrap(), 1.0, epsilon = 1e-15);
    }
}

/// Any zero row forces a zero determinant.
#[test]
fn zero_row_determinant_is_zero() {
    let mut rng = rand::thread_rng();
    for n in 2..7 {
        let mut a = random_nonsingular(n);
        let r = rng.gen_range(0..n);
        for j in 0..n {
            a[(r, j)] = 0.0;
        }
        assert_eq!(a.determinant().unwrap(), 0.0);
        assert_eq!(a.inverse(), Err(MatrixError::Singular));
    }
}

/// A · A⁻¹ is the identity for random non-singular matrices.
#[test]
fn inverse_times_matrix_is_identity() {
    for n in 1..7 {
        let a = random_nonsingular(n);
        let inv = a.inverse().unwrap();
        let id = Matrix::identity(n).unwrap();
        assert!(approx_eq(&a.product(&inv).unwrap(), &id, 1e-6));
        assert!(approx_eq(&inv.product(&a).unwrap(), &id, 1e-6));
    }
}

/// The adjugate-based inverse agrees with `faer`'s LU solve.
#[test]
fn inverse_matches_faer() {
    let a = random_nonsingular(5);
    let reference = faer_inverse(&a.to_faer());
    assert!(approx_eq(&a.inverse().unwrap(), &reference, 1e-9));
}

/// det(A·B) = det(A)·det(B).
#[test]
fn determinant_is_multiplicative() {
    let a = random_nonsingular(4);
    let b = random_nonsingular(4);
    let ab = a.product(&b).unwrap().determinant().unwrap();
    assert_relative_eq!(
        ab,
        a.determinant().unwrap() * b.determinant().unwrap(),
        max_relative = 1e-9
    );
}

/// Swapping two rows flips the sign of the determinant.
#[test]
fn row_swap_flips_sign() {
    let a = random_nonsingular(4);
    let mut swapped = a.clone();
    for j in 0..4 {
        let tmp = swapped[(0, j)];
        swapped[(0, j)] = swapped[(2, j)];
        swapped[(2, j)] = tmp;
    }
    assert_relative_eq!(
        swapped.determinant().unwrap(),
        -a.determinant().unwrap(),
        max_relative = 1e-9
    );
}

/// Fixed 2x2 scenario: determinant and inverse.
#[test]
fn two_by_two_scenario() {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    assert_abs_diff_eq!(a.determinant().unwrap(), -2.0, epsilon = 1e-12);
    assert_eq!(
        a.inverse().unwrap(),
        Matrix::from_rows(&[[-2.0, 1.0], [1.5, -0.5]]).unwrap()
    );
}

/// The determinant family rejects non-square input.
#[test]
fn non_square_rejected() {
    let a = Matrix::new(3, 2).unwrap();
    let err = MatrixError::NotSquare { rows: 3, cols: 2 };
    assert_eq!(a.determinant(), Err(err.clone()));
    assert_eq!(a.cofactors(), Err(err.clone()));
    assert_eq!(a.inverse(), Err(err));
}
