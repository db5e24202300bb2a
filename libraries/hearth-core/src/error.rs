/// Core error types for Hearth
use thiserror::Error;

/// Result type alias using `HearthError`
pub type Result<T> = std::result::Result<T, HearthError>;

/// Core error type for Hearth
#[derive(Error, Debug)]
pub enum HearthError {
    /// Catalog contents are unusable
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl HearthError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }
}
