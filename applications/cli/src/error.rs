/// Host error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Episode not found: {0}")]
    EpisodeNotFound(String),

    #[error("No episodes for {0}")]
    EmptySelection(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] hearth_core::HearthError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
