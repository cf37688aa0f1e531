//! Show command handler.
//!
//! Displays a single observation in full.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::format_optional;

/// Execute the show command.
///
/// # Errors
///
/// Looking up an unknown id is not an error; a friendly message is
/// printed instead.
pub async fn execute(ctx: &CliContext, id: &str) -> Result<()> {
    ctx.view().refresh().await;
    let observations = ctx.view().observations().await;

    let Some(obs) = observations.iter().find(|o| o.id == id) else {
        println!("No observation found with id: '{id}'");
        println!("Use 'fieldlog list' to see recorded observations.");
        return Ok(());
    };

    println!("Observation {}", obs.id);
    println!("  name:      {}", obs.name);
    println!("  date:      {}", obs.date);
    println!("  latitude:  {}", obs.latitude);
    println!("  longitude: {}", obs.longitude);
    println!("  photo:     {}", format_optional(&obs.image_uri, "none"));
    println!("  created:   {}", obs.created_at);

    Ok(())
}
