//! Edit command handler.
//!
//! Changes fields of an existing observation and writes it back through
//! the view model, which re-validates the full record.

use anyhow::Result;

use fieldlog_core::domain::{
    LATITUDE_BOUNDS, LONGITUDE_BOUNDS, MAX_NAME_LEN, validate_coordinates,
};

use crate::bootstrap::CliContext;

/// Field changes for the edit command; `None` leaves a field untouched.
#[derive(Default)]
pub struct EditArgs {
    pub name: Option<String>,
    pub date: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image: Option<String>,
    pub clear_image: bool,
}

impl EditArgs {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.image.is_none()
            && !self.clear_image
    }
}

/// Execute the edit command.
///
/// # Errors
///
/// This function will return an error if:
/// - A supplied name exceeds the length bound
/// - The changed coordinates are out of range
/// - Validation or the storage write fails
///
/// An unknown id prints a friendly message instead.
pub async fn execute(ctx: &CliContext, id: &str, args: EditArgs) -> Result<()> {
    if args.is_empty() {
        println!("Nothing to change. Pass at least one of --name, --date, --latitude, --longitude, --image or --clear-image.");
        return Ok(());
    }

    // Screens the supplied value only: a record whose stored name predates
    // the bound still takes unrelated edits.
    if let Some(name) = &args.name {
        if name.chars().count() > MAX_NAME_LEN {
            anyhow::bail!("Name too long: at most {MAX_NAME_LEN} characters");
        }
    }

    ctx.view().refresh().await;
    let observations = ctx.view().observations().await;

    let Some(current) = observations.into_iter().find(|o| o.id == id) else {
        println!("No observation found with id: '{id}'");
        println!("Use 'fieldlog list' to see recorded observations.");
        return Ok(());
    };

    let mut changed = current;
    if let Some(name) = args.name {
        changed.name = name;
    }
    if let Some(date) = args.date {
        changed.date = date;
    }
    if let Some(latitude) = args.latitude {
        changed.latitude = latitude;
    }
    if let Some(longitude) = args.longitude {
        changed.longitude = longitude;
    }
    if args.clear_image {
        changed.image_uri = None;
    } else if let Some(image) = args.image {
        changed.image_uri = Some(image);
    }

    // Same screen the add form applies before a record is built.
    if !validate_coordinates(changed.latitude, changed.longitude) {
        anyhow::bail!(
            "Coordinates out of range: latitude must be within [{}, {}] and longitude within [{}, {}]",
            LATITUDE_BOUNDS.0,
            LATITUDE_BOUNDS.1,
            LONGITUDE_BOUNDS.0,
            LONGITUDE_BOUNDS.1
        );
    }

    ctx.view().update(changed).await?;

    println!("Observation '{id}' updated.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{CliConfig, bootstrap};
    use fieldlog_core::domain::NewObservation;

    async fn seeded_context(name: &str) -> (tempfile::TempDir, CliContext, String) {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = bootstrap(CliConfig::with_data_dir(tmp.path().to_str().unwrap())).unwrap();
        let created = ctx
            .view()
            .add(NewObservation::new(name, "2024-05-01", 45.5, -122.6))
            .await
            .unwrap();
        (tmp, ctx, created.id)
    }

    #[tokio::test]
    async fn rejects_an_overlong_replacement_name() {
        let (_tmp, ctx, id) = seeded_context("Red Fox").await;

        let args = EditArgs {
            name: Some("x".repeat(MAX_NAME_LEN + 1)),
            ..EditArgs::default()
        };
        let err = execute(&ctx, &id, args).await.unwrap_err();
        assert!(err.to_string().contains("at most"));

        ctx.view().refresh().await;
        assert_eq!(ctx.view().observations().await[0].name, "Red Fox");
    }

    #[tokio::test]
    async fn accepts_a_replacement_name_at_the_bound() {
        let (_tmp, ctx, id) = seeded_context("Red Fox").await;

        let args = EditArgs {
            name: Some("x".repeat(MAX_NAME_LEN)),
            ..EditArgs::default()
        };
        execute(&ctx, &id, args).await.unwrap();

        ctx.view().refresh().await;
        let stored = ctx.view().observations().await;
        assert_eq!(stored[0].name.chars().count(), MAX_NAME_LEN);
    }

    #[tokio::test]
    async fn stored_overlong_names_do_not_block_unrelated_edits() {
        // The repository gate accepts long names, so older data may carry
        // them; only a newly supplied name is screened.
        let long_name = "x".repeat(MAX_NAME_LEN + 50);
        let (_tmp, ctx, id) = seeded_context(&long_name).await;

        let args = EditArgs {
            date: Some("2024-06-01".to_string()),
            ..EditArgs::default()
        };
        execute(&ctx, &id, args).await.unwrap();

        ctx.view().refresh().await;
        let stored = ctx.view().observations().await;
        assert_eq!(stored[0].date, "2024-06-01");
        assert_eq!(stored[0].name, long_name);
    }
}
