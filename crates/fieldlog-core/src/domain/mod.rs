//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (storage backend, filesystem, UI).
//!
//! # Structure
//!
//! - `observation` - Observation record types (`Observation`, `NewObservation`)
//! - `validation` - The validation gate applied before persisted mutations

mod observation;
mod validation;

// Re-export domain types at the domain level for convenience
pub use observation::{NewObservation, Observation};
pub use validation::{
    LATITUDE_BOUNDS, LONGITUDE_BOUNDS, MAX_NAME_LEN, ValidationError, validate_coordinates,
    validate_new_observation, validate_observation,
};
