//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing durable storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage area cannot be reached (e.g., localStorage disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Failed to (de)serialize a value.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing store rejected the operation (e.g., quota exceeded).
    #[error("storage operation failed: {0}")]
    Backend(String),
}
