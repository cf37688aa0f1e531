//! Core domain types, ports and services for fieldlog.
//!
//! This crate is storage-agnostic: it defines the observation domain
//! model, the validation gate, the `RecordStore` port, the repository that
//! owns every read and write of the collection, the change bus that keeps
//! independent views converged, and the per-screen view model. Storage
//! adapters live in `fieldlog-store`; user-facing surfaces compose the
//! pieces (see `fieldlog-cli`).

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod events;
pub mod paths;
pub mod ports;
pub mod repository;
pub mod viewmodel;

// Re-export commonly used types for convenience
pub use domain::{
    LATITUDE_BOUNDS, LONGITUDE_BOUNDS, MAX_NAME_LEN, NewObservation, Observation, ValidationError,
    validate_coordinates, validate_new_observation, validate_observation,
};
pub use events::{ChangeBus, ChangeEvent, DEFAULT_BUS_CAPACITY};
pub use ports::{RecordStore, StoreError};
pub use repository::{
    DEFAULT_STORE_TIMEOUT, ObservationRepository, RepositoryConfig, RepositoryError, generate_id,
};
pub use viewmodel::{ObservationsViewModel, Subscription};

// Re-export path utilities
pub use paths::{DATA_DIR_ENV, PathError, data_root, store_dir};

// Silence unused dev-dependency warnings: fieldlog-store is exercised by
// the integration test targets, not the unit-test build.
#[cfg(test)]
use fieldlog_store as _;
