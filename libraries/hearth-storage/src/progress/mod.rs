//! Per-episode listening progress

use crate::backend::{read_record, write_record, KeyValueBackend};
use hearth_core::{EpisodeId, ProgressRecord, ProgressSink};
use std::sync::Arc;

/// Namespace holding one `ProgressRecord` per episode id
pub const NAMESPACE: &str = "progress";

/// Keyed upsert store of `ProgressRecord`s
///
/// Written by the playback side through `ProgressSink` on every time tick,
/// read by the catalog layer to decorate episodes.
#[derive(Clone)]
pub struct ProgressStore {
    backend: Arc<dyn KeyValueBackend>,
}

impl ProgressStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// Latest record for an episode, `None` if never played or unreadable
    pub fn get(&self, episode_id: &EpisodeId) -> Option<ProgressRecord> {
        read_record(self.backend.as_ref(), NAMESPACE, episode_id.as_str())
    }

    /// Replace the record for an episode (no merge with the previous one)
    pub fn set(&self, episode_id: &EpisodeId, record: ProgressRecord) {
        if record.episode_id != *episode_id {
            tracing::warn!(
                "Progress record for {} filed under {}",
                record.episode_id,
                episode_id
            );
        }
        write_record(self.backend.as_ref(), NAMESPACE, episode_id.as_str(), &record);
    }
}

impl ProgressSink for ProgressStore {
    fn record_progress(&self, record: ProgressRecord) {
        let episode_id = record.episode_id.clone();
        self.set(&episode_id, record);
    }
}

impl std::fmt::Debug for ProgressStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;

    fn store() -> ProgressStore {
        ProgressStore::new(Arc::new(MemoryBackend::new()))
    }

    #[test]
    fn get_returns_exactly_what_was_set() {
        let store = store();
        let id = EpisodeId::new("ep-1");
        let record = ProgressRecord {
            episode_id: id.clone(),
            progress_percent: 37.5,
            last_position_seconds: 451.25,
        };

        store.set(&id, record.clone());
        assert_eq!(store.get(&id), Some(record));
    }

    #[test]
    fn set_is_a_full_replace() {
        let store = store();
        let id = EpisodeId::new("ep-1");

        store.set(&id, ProgressRecord::from_position(id.clone(), 90.0, 100.0));
        store.set(&id, ProgressRecord::from_position(id.clone(), 5.0, 100.0));

        let record = store.get(&id).unwrap();
        assert_eq!(record.last_position_seconds, 5.0);
        assert_eq!(record.progress_percent, 5.0);
    }

    #[test]
    fn unknown_episode_has_no_record() {
        assert_eq!(store().get(&EpisodeId::new("never-played")), None);
    }

    #[test]
    fn sink_writes_under_record_id() {
        let store = store();
        let id = EpisodeId::new("ep-2");

        store.record_progress(ProgressRecord::from_position(id.clone(), 10.0, 40.0));
        assert_eq!(store.get(&id).map(|r| r.progress_percent), Some(25.0));
    }
}
