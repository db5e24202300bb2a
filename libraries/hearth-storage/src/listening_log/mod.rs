//! Persistence surface consumed by the UI and catalog layers
//!
//! Bundles the progress and favorite stores over one backend and decorates
//! catalog episodes with what the listener has done with them.

use crate::backend::KeyValueBackend;
use crate::favorites::FavoriteStore;
use crate::identity::ListenerIdentity;
use crate::progress::ProgressStore;
use hearth_core::{Episode, EpisodeId, ListenerId, ProgressRecord};
use serde::Serialize;
use std::sync::Arc;

/// An episode decorated with local listening state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeView {
    pub episode: Episode,
    pub progress: Option<ProgressRecord>,
    pub is_favorite: bool,
}

impl EpisodeView {
    /// Percent listened, 0 when never played
    pub fn progress_percent(&self) -> f64 {
        self.progress
            .as_ref()
            .map_or(0.0, |record| record.progress_percent)
    }
}

/// Synchronous local read/write surface
#[derive(Debug, Clone)]
pub struct ListeningLog {
    progress: ProgressStore,
    favorites: FavoriteStore,
    identity: ListenerIdentity,
}

impl ListeningLog {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self {
            progress: ProgressStore::new(backend.clone()),
            favorites: FavoriteStore::new(backend.clone()),
            identity: ListenerIdentity::new(backend),
        }
    }

    /// Progress store, also usable as the playback `ProgressSink`
    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    pub fn favorites(&self) -> &FavoriteStore {
        &self.favorites
    }

    pub fn get_progress(&self, episode_id: &EpisodeId) -> Option<ProgressRecord> {
        self.progress.get(episode_id)
    }

    pub fn get_favorite(&self, episode_id: &EpisodeId) -> bool {
        self.favorites.get(episode_id)
    }

    pub fn toggle_favorite(&self, episode_id: &EpisodeId) -> bool {
        self.favorites.toggle(episode_id)
    }

    pub fn listener_id(&self) -> ListenerId {
        self.identity.get_or_create()
    }

    /// Attach progress and favorite state to each episode, preserving order
    pub fn decorate(&self, episodes: &[Episode]) -> Vec<EpisodeView> {
        episodes
            .iter()
            .map(|episode| EpisodeView {
                progress: self.progress.get(&episode.id),
                is_favorite: self.favorites.get(&episode.id),
                episode: episode.clone(),
            })
            .collect()
    }

    /// Episodes started but not finished ("continue listening")
    pub fn in_progress(&self, episodes: &[Episode]) -> Vec<EpisodeView> {
        self.decorate(episodes)
            .into_iter()
            .filter(|view| view.progress.as_ref().is_some_and(ProgressRecord::is_in_progress))
            .collect()
    }
}
