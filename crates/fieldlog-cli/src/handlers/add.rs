//! Add command handler.
//!
//! Records a new observation in the local collection.

use anyhow::Result;
use chrono::Utc;

use fieldlog_core::domain::{
    LATITUDE_BOUNDS, LONGITUDE_BOUNDS, MAX_NAME_LEN, NewObservation, validate_coordinates,
};

use crate::bootstrap::CliContext;

/// Arguments for the add command, collected from the parser.
pub struct AddArgs {
    pub name: String,
    pub date: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub image: Option<String>,
}

/// Execute the add command.
///
/// Applies the same pre-checks the capture form would (name within the
/// length bound, coordinates on the globe), fills in today's date when
/// none was given, and records the observation through the view model.
///
/// # Errors
///
/// This function will return an error if:
/// - The name exceeds the length bound
/// - The coordinates are out of range
/// - Validation or the storage write fails
pub async fn execute(ctx: &CliContext, args: AddArgs) -> Result<()> {
    if args.name.chars().count() > MAX_NAME_LEN {
        anyhow::bail!("Name too long: at most {MAX_NAME_LEN} characters");
    }

    if !validate_coordinates(args.latitude, args.longitude) {
        anyhow::bail!(
            "Coordinates out of range: latitude must be within [{}, {}] and longitude within [{}, {}]",
            LATITUDE_BOUNDS.0,
            LATITUDE_BOUNDS.1,
            LONGITUDE_BOUNDS.0,
            LONGITUDE_BOUNDS.1
        );
    }

    let date = args
        .date
        .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());

    let created = ctx
        .view()
        .add(NewObservation {
            id: None,
            name: args.name,
            date,
            latitude: args.latitude,
            longitude: args.longitude,
            image_uri: args.image,
            created_at: None,
        })
        .await?;

    println!(
        "Recorded observation '{}' on {} (id {}).",
        created.name, created.date, created.id
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{CliConfig, bootstrap};

    fn context() -> (tempfile::TempDir, CliContext) {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = bootstrap(CliConfig::with_data_dir(tmp.path().to_str().unwrap())).unwrap();
        (tmp, ctx)
    }

    fn args(name: &str) -> AddArgs {
        AddArgs {
            name: name.to_string(),
            date: Some("2024-05-01".to_string()),
            latitude: 45.5,
            longitude: -122.6,
            image: None,
        }
    }

    #[tokio::test]
    async fn rejects_an_overlong_name_before_recording() {
        let (_tmp, ctx) = context();

        let err = execute(&ctx, args(&"x".repeat(MAX_NAME_LEN + 50)))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("at most"));

        ctx.view().refresh().await;
        assert!(ctx.view().observations().await.is_empty());
    }

    #[tokio::test]
    async fn rejects_out_of_range_coordinates_before_recording() {
        let (_tmp, ctx) = context();

        let mut bad = args("Red Fox");
        bad.latitude = 95.0;
        let err = execute(&ctx, bad).await.unwrap_err();
        assert!(err.to_string().contains("out of range"));

        ctx.view().refresh().await;
        assert!(ctx.view().observations().await.is_empty());
    }

    #[tokio::test]
    async fn records_a_valid_observation_and_defaults_the_date() {
        let (_tmp, ctx) = context();

        let mut undated = args("Red Fox");
        undated.date = None;
        execute(&ctx, undated).await.unwrap();

        ctx.view().refresh().await;
        let stored = ctx.view().observations().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Red Fox");
        assert!(!stored[0].date.is_empty());
    }
}
