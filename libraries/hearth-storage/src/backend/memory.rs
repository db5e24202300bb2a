use super::KeyValueBackend;
use crate::error::{Result, StorageError};
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local backend that forgets everything on exit
///
/// Used by tests and as the fallback when the durable backend cannot be opened.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    namespaces: Mutex<HashMap<String, HashMap<String, String>>>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        let namespaces = self
            .namespaces
            .lock()
            .map_err(|_| StorageError::unavailable("memory backend lock poisoned"))?;

        Ok(namespaces
            .get(namespace)
            .and_then(|entries| entries.get(key))
            .cloned())
    }

    fn put(&self, namespace: &str, key: &str, value: &str) -> Result<()> {
        let mut namespaces = self
            .namespaces
            .lock()
            .map_err(|_| StorageError::unavailable("memory backend lock poisoned"))?;

        namespaces
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_replaces_previous_value() {
        let backend = MemoryBackend::new();
        backend.put("progress", "ep-1", "first").unwrap();
        backend.put("progress", "ep-1", "second").unwrap();

        assert_eq!(
            backend.get("progress", "ep-1").unwrap(),
            Some("second".to_string())
        );
    }

    #[test]
    fn namespaces_are_isolated() {
        let backend = MemoryBackend::new();
        backend.put("progress", "ep-1", "x").unwrap();

        assert_eq!(backend.get("favorites", "ep-1").unwrap(), None);
        assert_eq!(backend.get("unknown", "ep-1").unwrap(), None);
    }
}
