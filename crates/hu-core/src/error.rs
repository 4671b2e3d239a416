//! Error types for hep-utils

use thiserror::Error;

/// hep-utils error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Array shapes do not line up
    #[error("Shape error: {0}")]
    Shape(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Column not present in a data handle or table
    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),

    /// Column exists but holds the wrong kind of values
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
