//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

/// Available commands for the field observation logger.
///
/// Each command represents a different operation on the local
/// observation collection.
#[derive(Subcommand)]
pub enum Commands {
    /// Record a new observation
    Add {
        /// Name or label for the sighting (e.g. "Red Fox")
        name: String,
        /// Date of the sighting as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Latitude in decimal degrees, -90 to 90
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,
        /// Longitude in decimal degrees, -180 to 180
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,
        /// Reference to an existing photo (file path or URI)
        #[arg(short, long)]
        image: Option<String>,
    },

    /// List all recorded observations
    List,

    /// Show one observation in full
    Show {
        /// Observation id (see 'fieldlog list')
        id: String,
    },

    /// Change fields of an existing observation
    Edit {
        /// Observation id (see 'fieldlog list')
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New date as YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,
        /// New latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        latitude: Option<f64>,
        /// New longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        longitude: Option<f64>,
        /// New photo reference
        #[arg(short, long)]
        image: Option<String>,
        /// Remove the attached photo reference
        #[arg(long, conflicts_with = "image")]
        clear_image: bool,
    },

    /// Delete an observation
    Delete {
        /// Observation id (see 'fieldlog list')
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show resolved data paths
    Paths,
}

#[cfg(test)]
mod tests {
    use crate::parser::Cli;
    use clap::Parser;

    use super::*;

    #[test]
    fn add_parses_negative_coordinates() {
        let cli = Cli::parse_from([
            "fieldlog",
            "add",
            "Red Fox",
            "--latitude",
            "-41.29",
            "--longitude",
            "174.78",
        ]);

        match cli.command {
            Some(Commands::Add {
                name,
                date,
                latitude,
                longitude,
                image,
            }) => {
                assert_eq!(name, "Red Fox");
                assert!(date.is_none());
                assert!((latitude - -41.29).abs() < f64::EPSILON);
                assert!((longitude - 174.78).abs() < f64::EPSILON);
                assert!(image.is_none());
            }
            _ => panic!("expected Add"),
        }
    }

    #[test]
    fn edit_rejects_image_together_with_clear_image() {
        let result = Cli::try_parse_from([
            "fieldlog",
            "edit",
            "some-id",
            "--image",
            "x.jpg",
            "--clear-image",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn delete_accepts_force_flag() {
        let cli = Cli::parse_from(["fieldlog", "delete", "some-id", "--force"]);
        match cli.command {
            Some(Commands::Delete { id, force }) => {
                assert_eq!(id, "some-id");
                assert!(force);
            }
            _ => panic!("expected Delete"),
        }
    }
}
