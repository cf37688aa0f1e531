//! In-memory record store.
//!
//! Same blob contract as the file store, over a process-local map. Used by
//! tests and ephemeral sessions; going through the JSON codec keeps its
//! behavior aligned with what the file store would do with the same data.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use fieldlog_core::domain::Observation;
use fieldlog_core::ports::{RecordStore, StoreError};

use crate::file::OBSERVATIONS_KEY;

/// Record store over an in-process key-value map.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the observations blob with arbitrary content.
    ///
    /// Lets tests set up states a well-behaved writer never produces,
    /// such as duplicate ids or undecodable JSON.
    #[cfg(any(test, feature = "test-utils"))]
    pub async fn seed_raw(&self, json: impl Into<String>) {
        self.blobs
            .write()
            .await
            .insert(OBSERVATIONS_KEY.to_string(), json.into());
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn read_all(&self) -> Result<Vec<Observation>, StoreError> {
        let blobs = self.blobs.read().await;

        match blobs.get(OBSERVATIONS_KEY) {
            Some(json) => serde_json::from_str(json).map_err(|e| StoreError::Serialization {
                reason: format!("undecodable observations blob: {e}"),
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn write_all(&self, records: &[Observation]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records).map_err(|e| StoreError::Serialization {
            reason: e.to_string(),
        })?;

        self.blobs
            .write()
            .await
            .insert(OBSERVATIONS_KEY.to_string(), json);
        Ok(())
    }
}
