//! Observation domain types.
//!
//! These types represent recorded sightings in the domain model,
//! independent of any infrastructure concerns.

use serde::{Deserialize, Serialize};

/// A recorded field observation.
///
/// Field names serialize in camelCase because the stored blob format
/// predates this crate and existing data must keep decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Unique within the collection. See [`crate::repository::generate_id`].
    pub id: String,
    pub name: String,
    /// Calendar date of the sighting, `YYYY-MM-DD`.
    pub date: String,
    /// Decimal degrees, within [-90, 90].
    pub latitude: f64,
    /// Decimal degrees, within [-180, 180].
    pub longitude: f64,
    /// Photo reference; absence means no photo was attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    /// RFC 3339 creation instant.
    pub created_at: String,
}

/// Data for recording a new observation.
///
/// `id` and `created_at` are normally left `None` and filled in by the
/// repository; callers replaying existing records may supply both.
#[derive(Debug, Clone)]
pub struct NewObservation {
    pub id: Option<String>,
    pub name: String,
    pub date: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_uri: Option<String>,
    pub created_at: Option<String>,
}

impl NewObservation {
    /// Build an input record from the caller-required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            date: date.into(),
            latitude,
            longitude,
            image_uri: None,
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observation_serializes_in_camel_case() {
        let obs = Observation {
            id: "1700000000000-abc123def".to_string(),
            name: "Red Fox".to_string(),
            date: "2024-05-01".to_string(),
            latitude: 45.5,
            longitude: -122.6,
            image_uri: Some("file:///photos/fox.jpg".to_string()),
            created_at: "2024-05-01T10:30:00Z".to_string(),
        };

        let json = serde_json::to_string(&obs).unwrap();
        assert!(json.contains("\"imageUri\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("image_uri"));
    }

    #[test]
    fn missing_image_uri_is_omitted_and_decodes_as_none() {
        let obs = Observation {
            id: "x".to_string(),
            name: "Heron".to_string(),
            date: "2024-05-02".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            image_uri: None,
            created_at: "2024-05-02T08:00:00Z".to_string(),
        };

        let json = serde_json::to_string(&obs).unwrap();
        assert!(!json.contains("imageUri"));

        let decoded: Observation = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, obs);
        assert!(decoded.image_uri.is_none());
    }

    #[test]
    fn new_observation_defaults_leave_identity_unset() {
        let new = NewObservation::new("Heron", "2024-05-02", 51.0, 0.1);
        assert!(new.id.is_none());
        assert!(new.created_at.is_none());
        assert!(new.image_uri.is_none());
    }
}
