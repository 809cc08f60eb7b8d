//! Numeric tolerances and defaults used throughout the crate.
//!
//! These are fixed constants rather than options: equality, singularity
//! detection and default construction all behave identically for every
//! caller.

/// Largest absolute per-element difference still considered equal.
pub const EQ_TOLERANCE: f64 = 1e-7;

/// Pivot magnitude below which elimination treats the matrix as singular.
pub const PIVOT_TOLERANCE: f64 = 1e-10;

/// Row and column count of a default-constructed matrix.
pub const DEFAULT_DIM: usize = 3;
