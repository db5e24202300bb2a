//! Hearth Core
//!
//! Platform-agnostic domain types and collaborator traits for the Hearth
//! podcast client.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Episode`, `ProgressRecord`, `FavoriteRecord`, `ListenerId`
//! - **Core Traits**: `Catalog` (remote episode catalog), `ProgressSink`
//! - **Error Handling**: Unified `HearthError` and `Result` types
//!
//! The playback and storage crates both depend on this one and never on
//! each other; `ProgressSink` is the seam between them.
//!
//! # Example
//!
//! ```rust
//! use hearth_core::types::{Episode, EpisodeId, ProgressRecord};
//!
//! let episode = Episode::new("ep-1", "Pilot", "https://cdn.example.com/ep-1.mp3", "science");
//! let record = ProgressRecord::from_position(episode.id.clone(), 30.0, 120.0);
//!
//! assert_eq!(record.episode_id, EpisodeId::new("ep-1"));
//! assert_eq!(record.progress_percent, 25.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use catalog::{Catalog, InMemoryCatalog};
pub use error::{HearthError, Result};
pub use traits::ProgressSink;
pub use types::{Episode, EpisodeId, FavoriteRecord, ListenerId, ProgressRecord};
