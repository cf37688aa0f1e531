//! Composition utilities for building record stores.
//!
//! Focused purely on construction; no domain logic lives here.

use std::path::Path;
use std::sync::Arc;

use fieldlog_core::ports::RecordStore;

use crate::{FileRecordStore, MemoryRecordStore};

/// Factory for creating record store instances.
pub struct StoreFactory;

impl StoreFactory {
    /// Open a file-backed store rooted at the given directory.
    ///
    /// This is the recommended way for adapters to obtain the production
    /// store; the directory normally comes from
    /// `fieldlog_core::paths::store_dir`.
    pub fn open_at(dir: &Path) -> anyhow::Result<Arc<dyn RecordStore>> {
        let store = FileRecordStore::open(dir)?;
        Ok(Arc::new(store))
    }

    /// Create an in-memory store for tests and ephemeral sessions.
    #[must_use]
    pub fn in_memory() -> Arc<dyn RecordStore> {
        Arc::new(MemoryRecordStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_at_yields_a_working_store() {
        let tmp = tempfile::tempdir().unwrap();
        let store = StoreFactory::open_at(tmp.path()).unwrap();

        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn in_memory_yields_a_working_store() {
        let store = StoreFactory::in_memory();
        assert!(store.read_all().await.unwrap().is_empty());
    }
}
