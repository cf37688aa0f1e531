//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the field observation logger.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "fieldlog")]
#[command(about = "Record and browse field observations")]
#[command(version)]
pub struct Cli {
    /// Override the data directory for this invocation
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn global_args_parse() {
        let cli = Cli::parse_from(["fieldlog", "--verbose", "--data-dir", "/tmp/fieldlog", "list"]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some("/tmp/fieldlog".to_string()));
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn bare_invocation_has_no_command() {
        let cli = Cli::parse_from(["fieldlog"]);
        assert!(cli.command.is_none());
    }
}
