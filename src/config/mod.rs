//! Fixed numeric design constants.

pub mod tolerances;
pub use tolerances::*;
