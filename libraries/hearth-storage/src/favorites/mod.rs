//! Per-episode favorite flags

use crate::backend::{read_record, write_record, KeyValueBackend};
use hearth_core::{EpisodeId, FavoriteRecord};
use std::sync::Arc;

/// Namespace holding one `FavoriteRecord` per episode id
pub const NAMESPACE: &str = "favorites";

/// Keyed upsert store of favorite flags
///
/// Only explicit user toggles write here. No record means not favorite.
#[derive(Clone)]
pub struct FavoriteStore {
    backend: Arc<dyn KeyValueBackend>,
}

impl FavoriteStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// Stored record, if the episode was ever toggled
    pub fn get_record(&self, episode_id: &EpisodeId) -> Option<FavoriteRecord> {
        read_record(self.backend.as_ref(), NAMESPACE, episode_id.as_str())
    }

    /// Favorite flag, defaulting to `false`
    pub fn get(&self, episode_id: &EpisodeId) -> bool {
        self.get_record(episode_id)
            .is_some_and(|record| record.is_favorite)
    }

    /// Replace the flag for an episode
    pub fn set(&self, episode_id: &EpisodeId, is_favorite: bool) {
        let record = FavoriteRecord {
            episode_id: episode_id.clone(),
            is_favorite,
        };
        write_record(self.backend.as_ref(), NAMESPACE, episode_id.as_str(), &record);
    }

    /// Flip the flag and return the new value
    ///
    /// The returned value is what the UI shows immediately, even when the
    /// write could not be persisted.
    pub fn toggle(&self, episode_id: &EpisodeId) -> bool {
        let is_favorite = !self.get(episode_id);
        self.set(episode_id, is_favorite);
        tracing::debug!("Favorite {} -> {}", episode_id, is_favorite);
        is_favorite
    }
}

impl std::fmt::Debug for FavoriteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoriteStore").finish_non_exhaustive()
    }
}
