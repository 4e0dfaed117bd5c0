//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::config::Config;
use crate::logging;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load(&config_path)?;
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    // CLI flag wins over the configured default
    let output_format = cli.output.or(config.output_format).unwrap_or_default();

    let ctx = commands::Context {
        output_format,
        verbose: cli.verbose,
        no_color: cli.no_color,
        config,
        config_path,
    };

    match cli.command {
        Commands::Scan(args) => commands::scan::execute(ctx, args).await,
        Commands::Check(args) => commands::check::execute(ctx, args).await,
        Commands::Snapshot(args) => commands::snapshot::execute(ctx, args).await,
        Commands::Catalog(args) => commands::catalog::execute(ctx, args),
        Commands::Config(args) => commands::config::execute(ctx, args),
    }
}
