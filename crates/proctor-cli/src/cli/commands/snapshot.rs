//! `proctor snapshot` - record the host state for later review.

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::time::Duration;

use super::Context;
use crate::cli::args::SnapshotArgs;

pub async fn execute(ctx: Context, args: SnapshotArgs) -> Result<()> {
    let timeout = args
        .timeout
        .map_or_else(|| ctx.config.probe_timeout(), Duration::from_secs);
    let snapshot = ctx.probe().capture(timeout).await;
    let json = serde_json::to_string_pretty(&snapshot)?;

    match args.out {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!(
                "{} Snapshot written to {}",
                "Success:".green().bold(),
                path.display().to_string().cyan()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
