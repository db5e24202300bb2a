/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
///
/// These only surface from `KeyValueBackend` implementations; the stores
/// built on top of a backend log and absorb them.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The persistence facility cannot be used (disabled, quota, poisoned lock)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Database error from `redb`
    #[error(transparent)]
    Database(#[from] redb::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Create an unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
