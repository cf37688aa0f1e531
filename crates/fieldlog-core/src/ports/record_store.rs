//! Record store port for observation persistence.
//!
//! This module defines the abstraction over the durable key-value
//! namespace holding the observation collection. Implementations handle
//! storage details (flat files, in-memory maps); nothing storage-specific
//! appears in these signatures.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Observation;

#[cfg(test)]
use mockall::automock;

/// Errors surfaced by record store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying medium failed (filesystem, permissions, disk).
    #[error("Storage failure: {reason}")]
    Io { reason: String },

    /// The stored blob could not be encoded or decoded.
    #[error("Serialization failure: {reason}")]
    Serialization { reason: String },
}

/// Trait for whole-collection observation storage.
///
/// The collection lives under one logical key; both operations act on it
/// as a unit. Callers are expected to serialize their read-modify-write
/// sequences themselves (see `ObservationRepository`), so implementations
/// stay dumb blob stores.
///
/// # Implementations
///
/// - `FileRecordStore` - JSON blob per key under a data directory
/// - `MemoryRecordStore` - the same contract over an in-process map
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the full observation collection.
    ///
    /// A key that has never been written reads as the empty collection,
    /// not an error.
    async fn read_all(&self) -> Result<Vec<Observation>, StoreError>;

    /// Replace the full observation collection.
    ///
    /// The write is all-or-nothing: on error the previously stored
    /// collection must still be readable.
    async fn write_all(&self, records: &[Observation]) -> Result<(), StoreError>;
}
