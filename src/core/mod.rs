//! Core matrix traits and interop with `faer`.

pub mod traits;
pub mod wrappers;
