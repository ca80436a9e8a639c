//! Error types for uav-output.

use thiserror::Error;

/// Errors that can occur when writing or reading a per-cycle log.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unrecognised log header: {0:?}")]
    UnknownHeader(Vec<String>),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
