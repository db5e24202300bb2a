//! Key-value backends
//!
//! Records are stored as JSON strings under `(namespace, key)`. A namespace
//! is one keyed map (`progress`, `favorites`, `identity`).

mod durable;
mod memory;

pub use durable::RedbBackend;
pub use memory::MemoryBackend;

use crate::error::Result;

/// Durable local key-value facility
///
/// Implementations must be usable through a shared reference; the stores
/// hold them behind an `Arc` and never coordinate writes.
pub trait KeyValueBackend: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn put(&self, namespace: &str, key: &str, value: &str) -> Result<()>;
}

/// Read and decode a JSON record, treating any failure as "no record"
pub(crate) fn read_record<T: serde::de::DeserializeOwned>(
    backend: &dyn KeyValueBackend,
    namespace: &str,
    key: &str,
) -> Option<T> {
    let raw = match backend.get(namespace, key) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!("Failed to read {}/{}: {}. Using default.", namespace, key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!("Discarding undecodable {}/{}: {}", namespace, key, e);
            None
        }
    }
}

/// Encode and write a JSON record, logging and dropping any failure
pub(crate) fn write_record<T: serde::Serialize>(
    backend: &dyn KeyValueBackend,
    namespace: &str,
    key: &str,
    record: &T,
) {
    let encoded = match serde_json::to_string(record) {
        Ok(encoded) => encoded,
        Err(e) => {
            tracing::error!("Failed to serialize {}/{}: {}", namespace, key, e);
            return;
        }
    };

    if let Err(e) = backend.put(namespace, key, &encoded) {
        tracing::warn!("Dropping write to {}/{}: {}", namespace, key, e);
    }
}
