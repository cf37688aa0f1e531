//! File-backed record store.
//!
//! Stores the observation collection as one JSON blob per logical key
//! under a store directory. Writes go through a temp file and an atomic
//! rename, so a crash mid-write leaves the previous blob intact.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use fieldlog_core::domain::Observation;
use fieldlog_core::ports::{RecordStore, StoreError};

pub(crate) const OBSERVATIONS_KEY: &str = "observations";

/// Record store over flat JSON files.
///
/// One writer per store directory is assumed; cross-task serialization is
/// the repository's job, the fixed temp-file name here is not safe against
/// a second process.
pub struct FileRecordStore {
    dir: PathBuf,
}

impl FileRecordStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();

        std::fs::create_dir_all(&dir).map_err(|e| StoreError::Io {
            reason: format!("failed to create store directory {}: {e}", dir.display()),
        })?;

        Ok(Self { dir })
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    async fn read_blob(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.blob_path(key);

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io {
                reason: format!("failed to read {}: {e}", path.display()),
            }),
        }
    }

    async fn write_blob(&self, key: &str, contents: &str) -> Result<(), StoreError> {
        let path = self.blob_path(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));

        fs::write(&tmp, contents).await.map_err(|e| StoreError::Io {
            reason: format!("failed to write {}: {e}", tmp.display()),
        })?;

        fs::rename(&tmp, &path).await.map_err(|e| StoreError::Io {
            reason: format!("failed to replace {}: {e}", path.display()),
        })?;

        debug!(key, bytes = contents.len(), "Blob written");
        Ok(())
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn read_all(&self) -> Result<Vec<Observation>, StoreError> {
        match self.read_blob(OBSERVATIONS_KEY).await? {
            Some(json) => serde_json::from_str(&json).map_err(|e| StoreError::Serialization {
                reason: format!("undecodable observations blob: {e}"),
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn write_all(&self, records: &[Observation]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records).map_err(|e| StoreError::Serialization {
            reason: e.to_string(),
        })?;

        self.write_blob(OBSERVATIONS_KEY, &json).await
    }
}
