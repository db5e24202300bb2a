use super::KeyValueBackend;
use crate::error::Result;
use redb::{Database, TableDefinition, TableError};
use std::path::Path;

/// Backend persisting to a single redb database file
///
/// Each namespace is a redb table of `&str -> &str`. Tables are created on
/// first write; reading a namespace that was never written yields no record.
pub struct RedbBackend {
    db: Database,
}

impl RedbBackend {
    /// Open (or create) the database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db = Database::create(path).map_err(redb::Error::from)?;
        tracing::debug!("Opened listening database at {}", path.display());
        Ok(Self { db })
    }
}

fn table(namespace: &str) -> TableDefinition<'_, &'static str, &'static str> {
    TableDefinition::new(namespace)
}

impl KeyValueBackend for RedbBackend {
    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        let txn = self.db.begin_read().map_err(redb::Error::from)?;

        let table = match txn.open_table(table(namespace)) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(redb::Error::from(e).into()),
        };

        let value = table.get(key).map_err(redb::Error::from)?;
        Ok(value.map(|guard| guard.value().to_string()))
    }

    fn put(&self, namespace: &str, key: &str, value: &str) -> Result<()> {
        let txn = self.db.begin_write().map_err(redb::Error::from)?;
        {
            let mut table = txn
                .open_table(table(namespace))
                .map_err(redb::Error::from)?;
            table.insert(key, value).map_err(redb::Error::from)?;
        }
        txn.commit().map_err(redb::Error::from)?;
        Ok(())
    }
}

impl std::fmt::Debug for RedbBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbBackend").finish_non_exhaustive()
    }
}
