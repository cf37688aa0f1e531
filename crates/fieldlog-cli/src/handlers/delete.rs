//! Delete command handler.
//!
//! Removes an observation from the collection. Any photo the record
//! references remains on disk unchanged.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::utils::input;

/// Execute the delete command.
///
/// Looks the observation up first so the user sees what they are about to
/// remove, confirms unless `force` is set, then deletes through the view
/// model.
///
/// # Arguments
///
/// * `ctx` - The CLI context providing access to the view model
/// * `id` - Id of the observation to delete
/// * `force` - If true, skips the confirmation prompt
///
/// # Errors
///
/// This function will return an error if reading user input or the
/// storage write fails.
pub async fn execute(ctx: &CliContext, id: &str, force: bool) -> Result<()> {
    ctx.view().refresh().await;
    let observations = ctx.view().observations().await;

    let Some(obs) = observations.iter().find(|o| o.id == id) else {
        println!("No observation found with id: '{id}'");
        println!("Use 'fieldlog list' to see recorded observations.");
        return Ok(());
    };

    if !force {
        println!(
            "About to delete: '{}' ({}, {}) on {}",
            obs.name, obs.latitude, obs.longitude, obs.date
        );

        let confirm =
            input::prompt_confirmation("Are you sure you want to delete this observation?")?;
        if !confirm {
            println!("Delete operation cancelled.");
            return Ok(());
        }
    }

    ctx.view().delete(id).await?;

    println!("Observation '{}' (id {id}) deleted.", obs.name);
    Ok(())
}
