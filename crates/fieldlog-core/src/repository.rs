//! Observation repository - the single write path for the collection.
//!
//! Every surface reads and mutates observations through this type. It owns
//! validation, identity assignment and the read-modify-write sequence over
//! the whole-collection record store, so the storage adapters stay dumb
//! blob stores.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{
    NewObservation, Observation, ValidationError, validate_new_observation, validate_observation,
};
use crate::ports::{RecordStore, StoreError};

/// Default upper bound on any single store operation.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Tunables for [`ObservationRepository`].
#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    /// A store call exceeding this fails the operation that issued it.
    pub store_timeout: Duration,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }
}

/// Errors surfaced by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The input failed the validation gate; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with the given id exists.
    #[error("No observation found with id: {id}")]
    NotFound { id: String },

    /// Recording a new observation failed after validation passed.
    #[error("Failed to save observation: {reason}")]
    SaveFailed { reason: String },

    /// Replacing an existing observation failed.
    #[error("Failed to update observation: {reason}")]
    UpdateFailed { reason: String },

    /// Removing an observation failed.
    #[error("Failed to delete observation: {reason}")]
    DeleteFailed { reason: String },
}

/// Generate a collection-unique observation id.
///
/// Millisecond timestamp prefix plus a random suffix: sortable-ish by
/// creation time, collision-negligible without any read of the store.
#[must_use]
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let entropy = Uuid::new_v4().simple().to_string();
    format!("{millis}-{}", &entropy[..9])
}

/// The single authority for observation CRUD.
///
/// All mutations funnel through one read-modify-write sequence guarded by
/// a single-flight lock, so concurrent writers from different tasks cannot
/// interleave and drop each other's records. Reads outside mutations take
/// no lock.
pub struct ObservationRepository {
    store: Arc<dyn RecordStore>,
    write_lock: Mutex<()>,
    store_timeout: Duration,
}

impl ObservationRepository {
    /// Create a repository with default configuration.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_config(store, RepositoryConfig::default())
    }

    /// Create a repository with explicit configuration.
    pub fn with_config(store: Arc<dyn RecordStore>, config: RepositoryConfig) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
            store_timeout: config.store_timeout,
        }
    }

    /// Read the full collection for display.
    ///
    /// A failed or timed-out read degrades to the empty collection with a
    /// warning rather than an error: browsing surfaces stay usable when
    /// storage is briefly unavailable. Duplicate ids (possible only via
    /// storage corruption or imported data) are dropped, first occurrence
    /// kept, so insertion order is preserved.
    pub async fn get_all(&self) -> Vec<Observation> {
        match self.read_store().await {
            Ok(records) => dedup_by_id(records),
            Err(e) => {
                warn!(error = %e, "Failed to load observations, serving empty collection");
                Vec::new()
            }
        }
    }

    /// Validate and record a new observation, returning the stored record.
    ///
    /// Missing `id` and `created_at` are filled in here; caller-supplied
    /// values are kept as given.
    pub async fn add(&self, input: NewObservation) -> Result<Observation, RepositoryError> {
        validate_new_observation(&input)?;

        let observation = materialize(input);

        let _guard = self.write_lock.lock().await;

        // A failed read aborts the save: writing without the current
        // records would drop them.
        let mut records = self
            .read_store()
            .await
            .map_err(|e| RepositoryError::SaveFailed {
                reason: e.to_string(),
            })?;

        records.push(observation.clone());

        self.write_store(&records)
            .await
            .map_err(|e| RepositoryError::SaveFailed {
                reason: e.to_string(),
            })?;

        debug!(id = %observation.id, "Observation recorded");
        Ok(observation)
    }

    /// Validate and replace an existing observation in place.
    ///
    /// The record keeps its position in the collection. Fails with
    /// [`RepositoryError::NotFound`] when no record carries the given id.
    pub async fn update(&self, observation: Observation) -> Result<(), RepositoryError> {
        validate_observation(&observation)?;

        let id = observation.id.clone();
        let _guard = self.write_lock.lock().await;

        let mut records = self
            .read_store()
            .await
            .map_err(|e| RepositoryError::UpdateFailed {
                reason: e.to_string(),
            })?;

        let Some(slot) = records.iter_mut().find(|r| r.id == observation.id) else {
            return Err(RepositoryError::NotFound { id });
        };
        *slot = observation;

        self.write_store(&records)
            .await
            .map_err(|e| RepositoryError::UpdateFailed {
                reason: e.to_string(),
            })?;

        debug!(id = %id, "Observation updated");
        Ok(())
    }

    /// Remove the observation with the given id.
    ///
    /// Fails with [`RepositoryError::NotFound`] when no record carries it.
    pub async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self
            .read_store()
            .await
            .map_err(|e| RepositoryError::DeleteFailed {
                reason: e.to_string(),
            })?;

        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(RepositoryError::NotFound { id: id.to_string() });
        }

        self.write_store(&records)
            .await
            .map_err(|e| RepositoryError::DeleteFailed {
                reason: e.to_string(),
            })?;

        debug!(id = %id, "Observation deleted");
        Ok(())
    }

    async fn read_store(&self) -> Result<Vec<Observation>, StoreError> {
        timeout(self.store_timeout, self.store.read_all())
            .await
            .map_err(|_| StoreError::Io {
                reason: format!("read timed out after {:?}", self.store_timeout),
            })?
    }

    async fn write_store(&self, records: &[Observation]) -> Result<(), StoreError> {
        timeout(self.store_timeout, self.store.write_all(records))
            .await
            .map_err(|_| StoreError::Io {
                reason: format!("write timed out after {:?}", self.store_timeout),
            })?
    }
}

/// Fill in identity fields the caller left unset.
fn materialize(input: NewObservation) -> Observation {
    Observation {
        id: input.id.unwrap_or_else(generate_id),
        name: input.name,
        date: input.date,
        latitude: input.latitude,
        longitude: input.longitude,
        image_uri: input.image_uri,
        created_at: input
            .created_at
            .unwrap_or_else(|| Utc::now().to_rfc3339()),
    }
}

/// Drop records whose id already appeared earlier in the collection.
fn dedup_by_id(records: Vec<Observation>) -> Vec<Observation> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut unique = Vec::with_capacity(records.len());

    for record in records {
        if seen.insert(record.id.clone()) {
            unique.push(record);
        } else {
            warn!(id = %record.id, "Dropping duplicate observation id read from storage");
        }
    }

    unique
}
