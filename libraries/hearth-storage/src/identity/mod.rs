//! Locally cached listener identity

use crate::backend::{read_record, write_record, KeyValueBackend};
use hearth_core::ListenerId;
use std::sync::Arc;

/// Namespace holding the single cached listener id
pub const NAMESPACE: &str = "identity";

const LISTENER_KEY: &str = "listener";

/// Access to the opaque listener id
///
/// There is no login: the first call generates an id and caches it, later
/// calls (including after restarts) return the cached one.
#[derive(Clone)]
pub struct ListenerIdentity {
    backend: Arc<dyn KeyValueBackend>,
}

impl ListenerIdentity {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// Cached id, generating and caching one on first use
    ///
    /// When storage is unavailable the generated id only lives for this
    /// session.
    pub fn get_or_create(&self) -> ListenerId {
        if let Some(id) =
            read_record::<ListenerId>(self.backend.as_ref(), NAMESPACE, LISTENER_KEY)
        {
            return id;
        }

        let id = ListenerId::generate();
        tracing::info!("Generated listener id {}", id);
        write_record(self.backend.as_ref(), NAMESPACE, LISTENER_KEY, &id);
        id
    }
}

impl std::fmt::Debug for ListenerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerIdentity").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;

    #[test]
    fn id_is_stable_across_instances() {
        let backend: Arc<dyn KeyValueBackend> = Arc::new(MemoryBackend::new());

        let first = ListenerIdentity::new(backend.clone()).get_or_create();
        let second = ListenerIdentity::new(backend).get_or_create();
        assert_eq!(first, second);
    }
}
