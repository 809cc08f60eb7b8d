use thiserror::Error;

// Unified error type for densemat

pub type Result<T> = std::result::Result<T, MatrixError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("invalid matrix size {rows}x{cols}: both dimensions must be positive")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("{op}: dimension mismatch between {}x{} and {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    #[error("matrix should be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix is singular (determinant is zero)")]
    Singular,
}
