//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers which delegate to the
//! observation view model.

use clap::Parser;

use fieldlog_cli::handlers::add::AddArgs;
use fieldlog_cli::handlers::edit::EditArgs;
use fieldlog_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before any path resolution
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; --verbose overrides RUST_LOG
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Bootstrap the CLI context (composition root)
    let config = match cli.data_dir.as_deref() {
        Some(dir) => CliConfig::with_data_dir(dir),
        None => CliConfig::with_defaults()?,
    };
    let ctx = bootstrap(config)?;

    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        fieldlog_cli::Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Add {
            name,
            date,
            latitude,
            longitude,
            image,
        } => {
            let args = AddArgs {
                name,
                date,
                latitude,
                longitude,
                image,
            };
            handlers::add::execute(&ctx, args).await?;
        }
        Commands::List => {
            handlers::list::execute(&ctx).await?;
        }
        Commands::Show { id } => {
            handlers::show::execute(&ctx, &id).await?;
        }
        Commands::Edit {
            id,
            name,
            date,
            latitude,
            longitude,
            image,
            clear_image,
        } => {
            let args = EditArgs {
                name,
                date,
                latitude,
                longitude,
                image,
                clear_image,
            };
            handlers::edit::execute(&ctx, &id, args).await?;
        }
        Commands::Delete { id, force } => {
            handlers::delete::execute(&ctx, &id, force).await?;
        }
        Commands::Paths => {
            handlers::paths::execute(&ctx)?;
        }
    }

    Ok(())
}
