//! Context logging error types.

use thiserror::Error;

/// Errors that can occur while building contexts or emitting records.
#[derive(Debug, Error)]
pub enum ContextLogError {
    /// A context was built from a value that is not a JSON object.
    #[error("Invalid context: {0}")]
    InvalidContextError(String),

    /// A sink failed to encode a record.
    #[error("Encode error: {0}")]
    EncodeError(#[from] serde_json::Error),

    /// A sink failed to write a record.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Sink-specific failure.
    #[error("Sink error: {0}")]
    SinkError(String),
}

/// Result type for context logging operations.
pub type ContextLogResult<T> = Result<T, ContextLogError>;
