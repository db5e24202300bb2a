//! Episode catalog collaborator
//!
//! The real catalog is a remote table owned by another layer; the playback
//! core only consumes these three reads.

use crate::error::{HearthError, Result};
use crate::types::{Episode, EpisodeId};
use async_trait::async_trait;
use std::path::Path;

/// Read access to the episode catalog
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch a single episode
    async fn fetch_episode_by_id(&self, id: &EpisodeId) -> Result<Option<Episode>>;

    /// Fetch all episodes in an area, in catalog order
    async fn fetch_episodes_by_area(&self, area: &str) -> Result<Vec<Episode>>;

    /// Fetch the episodes of one theme within an area, in catalog order
    async fn fetch_episodes_by_theme(&self, theme: &str, area: &str) -> Result<Vec<Episode>>;
}

/// Catalog backed by an in-memory episode list
///
/// Used by hosts running against a local catalog dump and by tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    episodes: Vec<Episode>,
}

impl InMemoryCatalog {
    /// Create a catalog from episodes, preserving their order
    pub fn new(episodes: Vec<Episode>) -> Self {
        Self { episodes }
    }

    /// Load a catalog from a JSON array of episodes
    ///
    /// Every entry needs a non-empty id; ids are the storage keys.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let episodes: Vec<Episode> = serde_json::from_str(&contents)?;
        if let Some(index) = episodes.iter().position(|e| e.id.as_str().is_empty()) {
            return Err(HearthError::catalog(format!(
                "entry {} in {} has an empty id",
                index,
                path.display()
            )));
        }
        tracing::debug!("Loaded {} episodes from {}", episodes.len(), path.display());
        Ok(Self::new(episodes))
    }

    /// All episodes in catalog order
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn fetch_episode_by_id(&self, id: &EpisodeId) -> Result<Option<Episode>> {
        Ok(self.episodes.iter().find(|e| &e.id == id).cloned())
    }

    async fn fetch_episodes_by_area(&self, area: &str) -> Result<Vec<Episode>> {
        Ok(self
            .episodes
            .iter()
            .filter(|e| e.area == area)
            .cloned()
            .collect())
    }

    async fn fetch_episodes_by_theme(&self, theme: &str, area: &str) -> Result<Vec<Episode>> {
        Ok(self
            .episodes
            .iter()
            .filter(|e| e.area == area && e.theme.as_deref() == Some(theme))
            .cloned()
            .collect())
    }
}
