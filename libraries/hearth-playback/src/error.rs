//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No episode is currently loaded
    #[error("No episode loaded")]
    NoEpisodeLoaded,

    /// The audio device rejected a request (bad URL, decode error, permission)
    #[error("Audio device error: {0}")]
    Device(String),

    /// Playback rate must be finite and positive
    #[error("Invalid playback rate: {0}")]
    InvalidPlaybackRate(f32),

    /// Index out of bounds
    #[error("Index {index} out of bounds for playlist of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl PlaybackError {
    /// Create a device error
    pub fn device(msg: impl Into<String>) -> Self {
        Self::Device(msg.into())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
