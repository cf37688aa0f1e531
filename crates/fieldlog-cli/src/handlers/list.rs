//! List command handler.
//!
//! Displays the observation collection in a formatted table.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{print_separator, truncate_string};

/// Execute the list command.
///
/// Refreshes the view model and displays every observation with its id,
/// name, date, coordinates and whether a photo is attached.
///
/// # Arguments
///
/// * `ctx` - The CLI context providing access to the view model
///
/// # Errors
///
/// Listing itself cannot fail; an unreadable store surfaces as an empty
/// collection with a logged warning.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    ctx.view().refresh().await;
    let observations = ctx.view().observations().await;

    if observations.is_empty() {
        println!("No observations recorded yet.");
        println!("Use 'fieldlog add <name> --latitude <lat> --longitude <lon>' to record one.");
        return Ok(());
    }

    println!("Found {} observation(s):\n", observations.len());

    println!(
        "{:<24} {:<22} {:<12} {:>10} {:>11}  {}",
        "ID", "Name", "Date", "Latitude", "Longitude", "Photo"
    );
    print_separator(90);

    for obs in observations {
        println!(
            "{:<24} {:<22} {:<12} {:>10.4} {:>11.4}  {}",
            truncate_string(&obs.id, 23),
            truncate_string(&obs.name, 21),
            obs.date,
            obs.latitude,
            obs.longitude,
            if obs.image_uri.is_some() { "yes" } else { "--" }
        );
    }

    Ok(())
}
