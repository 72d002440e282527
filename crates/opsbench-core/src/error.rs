//! Error types for benchmark execution and result handling.

use thiserror::Error;

/// Main error type for benchmark operations.
#[derive(Error, Debug)]
pub enum BenchError {
    /// A suite id that is not present in the registry
    #[error("Unknown suite: {0}")]
    UnknownSuite(String),

    /// File access or I/O error
    #[error("File error: {0}")]
    File(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BenchError {
    /// Check if this is a user-facing error (vs internal)
    pub fn is_user_error(&self) -> bool {
        matches!(self, BenchError::UnknownSuite(_) | BenchError::File(_))
    }
}

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        BenchError::File(err.to_string())
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::Serialization(format!("JSON error: {}", err))
    }
}

/// Result type alias for benchmark operations
pub type Result<T> = std::result::Result<T, BenchError>;
