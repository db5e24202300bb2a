//! Hearth Storage
//!
//! Local, login-free persistence for the Hearth podcast client.
//!
//! Everything here is a keyed upsert over a durable key-value facility:
//! - **Progress**: per-episode position and derived percentage
//! - **Favorites**: per-episode boolean, absence means `false`
//! - **Identity**: the locally cached listener id
//!
//! # Failure policy
//!
//! Storage is never allowed to interrupt listening. Every store in this crate
//! swallows backend errors: reads fall back to "no record", writes are logged
//! and dropped. Callers get plain values, not `Result`s.
//!
//! Concurrent access from several processes against the same data directory
//! is unguarded and last-writer-wins.
//!
//! # Example
//!
//! ```rust
//! use hearth_core::{EpisodeId, ProgressRecord};
//! use hearth_storage::{ListeningLog, MemoryBackend};
//! use std::sync::Arc;
//!
//! let log = ListeningLog::new(Arc::new(MemoryBackend::new()));
//! let id = EpisodeId::new("ep-1");
//!
//! log.progress().set(&id, ProgressRecord::from_position(id.clone(), 30.0, 60.0));
//! assert_eq!(log.get_progress(&id).map(|r| r.progress_percent), Some(50.0));
//!
//! assert!(log.toggle_favorite(&id));
//! assert!(log.get_favorite(&id));
//! ```

mod error;

pub mod backend;
pub mod favorites;
pub mod identity;
pub mod listening_log;
pub mod progress;

pub use backend::{KeyValueBackend, MemoryBackend, RedbBackend};
pub use error::{Result, StorageError};
pub use favorites::FavoriteStore;
pub use identity::ListenerIdentity;
pub use listening_log::{EpisodeView, ListeningLog};
pub use progress::ProgressStore;
