/// Listening log setup
use crate::config::AppConfig;
use hearth_storage::{KeyValueBackend, ListeningLog, MemoryBackend, RedbBackend};
use std::sync::Arc;

/// Open the durable listening log
///
/// If the database cannot be opened the session continues on an in-memory
/// log; progress and favorites are then lost on exit.
pub fn open_listening_log(config: &AppConfig) -> ListeningLog {
    let path = config.database_path();
    let backend: Arc<dyn KeyValueBackend> = match RedbBackend::open(&path) {
        Ok(backend) => Arc::new(backend),
        Err(e) => {
            tracing::warn!(
                "Listening log unavailable at {} ({}), using session-only storage",
                path.display(),
                e
            );
            Arc::new(MemoryBackend::new())
        }
    };
    ListeningLog::new(backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::EpisodeId;

    #[test]
    fn reopening_keeps_favorites() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.storage.data_dir = dir.path().join("nested");

        let id = EpisodeId::new("ep-1");
        assert!(open_listening_log(&config).toggle_favorite(&id));
        assert!(open_listening_log(&config).get_favorite(&id));
    }

    #[test]
    fn unopenable_database_falls_back_to_memory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut config = AppConfig::default();
        // A regular file where the data directory should be
        config.storage.data_dir = file.path().to_path_buf();

        let log = open_listening_log(&config);
        let id = EpisodeId::new("ep-1");
        assert!(log.toggle_favorite(&id));
        assert!(log.get_favorite(&id));
    }
}
