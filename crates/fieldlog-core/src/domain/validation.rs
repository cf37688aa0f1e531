//! Observation validation.
//!
//! A single gate applied before any persisted mutation: name and date must
//! be present, coordinates must be finite. Range and length bounds
//! ([`validate_coordinates`], [`MAX_NAME_LEN`]) are input-surface checks
//! and sit outside the gate, so records written by older clients keep
//! loading and re-saving.

use thiserror::Error;

/// Advisory upper bound for observation names, for input surfaces.
///
/// Deliberately not part of [`validate_observation`]: stored data may
/// predate the limit.
pub const MAX_NAME_LEN: usize = 100;

/// Inclusive latitude bounds in decimal degrees.
pub const LATITUDE_BOUNDS: (f64, f64) = (-90.0, 90.0);
/// Inclusive longitude bounds in decimal degrees.
pub const LONGITUDE_BOUNDS: (f64, f64) = (-180.0, 180.0);

/// Validation errors for observation input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Observation name is required")]
    NameRequired,

    #[error("Observation date is required")]
    DateRequired,

    #[error("Valid coordinates are required")]
    CoordinatesInvalid,
}

/// Check that a coordinate pair is finite and within bounds.
#[must_use]
pub fn validate_coordinates(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (LATITUDE_BOUNDS.0..=LATITUDE_BOUNDS.1).contains(&latitude)
        && (LONGITUDE_BOUNDS.0..=LONGITUDE_BOUNDS.1).contains(&longitude)
}

/// Validate a full observation record.
///
/// Returns the first failure in field order: name, date, coordinates.
pub fn validate_observation(
    observation: &crate::domain::Observation,
) -> Result<(), ValidationError> {
    validate_fields(
        &observation.name,
        &observation.date,
        observation.latitude,
        observation.longitude,
    )
}

/// Validate caller input for a new observation.
pub fn validate_new_observation(
    observation: &crate::domain::NewObservation,
) -> Result<(), ValidationError> {
    validate_fields(
        &observation.name,
        &observation.date,
        observation.latitude,
        observation.longitude,
    )
}

fn validate_fields(
    name: &str,
    date: &str,
    latitude: f64,
    longitude: f64,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }

    if date.trim().is_empty() {
        return Err(ValidationError::DateRequired);
    }

    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(ValidationError::CoordinatesInvalid);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewObservation;

    fn valid_input() -> NewObservation {
        NewObservation::new("Red Fox", "2024-05-01", 45.5, -122.6)
    }

    #[test]
    fn accepts_valid_input() {
        assert!(validate_new_observation(&valid_input()).is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let mut input = valid_input();
        input.name = "   ".to_string();
        assert_eq!(
            validate_new_observation(&input),
            Err(ValidationError::NameRequired)
        );
    }

    #[test]
    fn rejects_blank_date() {
        let mut input = valid_input();
        input.date = String::new();
        assert_eq!(
            validate_new_observation(&input),
            Err(ValidationError::DateRequired)
        );
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let mut input = valid_input();
        input.latitude = f64::NAN;
        assert_eq!(
            validate_new_observation(&input),
            Err(ValidationError::CoordinatesInvalid)
        );

        let mut input = valid_input();
        input.longitude = f64::INFINITY;
        assert_eq!(
            validate_new_observation(&input),
            Err(ValidationError::CoordinatesInvalid)
        );
    }

    #[test]
    fn out_of_range_coordinates_pass_the_gate() {
        // The range screen lives at input surfaces; the gate only
        // insists on finite numbers.
        let mut input = valid_input();
        input.latitude = 90.5;
        assert!(!validate_coordinates(input.latitude, input.longitude));
        assert!(validate_new_observation(&input).is_ok());
    }

    #[test]
    fn coordinate_helper_enforces_range_and_finiteness() {
        assert!(!validate_coordinates(f64::NAN, 0.0));
        assert!(!validate_coordinates(0.0, f64::INFINITY));
        assert!(!validate_coordinates(f64::NEG_INFINITY, 0.0));
        assert!(!validate_coordinates(90.5, 0.0));
        assert!(!validate_coordinates(0.0, -180.5));
    }

    #[test]
    fn boundary_coordinates_are_valid() {
        assert!(validate_coordinates(90.0, 180.0));
        assert!(validate_coordinates(-90.0, -180.0));
        assert!(validate_coordinates(0.0, 0.0));
    }

    #[test]
    fn name_ordering_wins_over_later_failures() {
        // All three fields bad: the name failure is reported.
        let mut input = valid_input();
        input.name = String::new();
        input.date = String::new();
        input.latitude = f64::NAN;
        assert_eq!(
            validate_new_observation(&input),
            Err(ValidationError::NameRequired)
        );
    }

    #[test]
    fn long_names_pass_the_gate() {
        // MAX_NAME_LEN is advisory for input forms, not enforced here.
        let mut input = valid_input();
        input.name = "x".repeat(MAX_NAME_LEN + 50);
        assert!(validate_new_observation(&input).is_ok());
    }
}
