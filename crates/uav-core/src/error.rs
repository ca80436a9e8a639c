//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` covers the checks made
//! by the types in this crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("field size must be finite and non-negative, got ({0}, {1})")]
    InvalidField(f64, f64),

    #[error("node count {0} exceeds the NodeId range")]
    TooManyNodes(usize),
}

/// Shorthand result type for `uav-core`.
pub type CoreResult<T> = Result<T, CoreError>;
