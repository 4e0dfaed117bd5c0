//! `proctor config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
        ConfigCommands::Init { force } => init_config(&ctx, force),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(config)?);
        }
        _ => {
            println!("{}", "Current Configuration:".bold());
            println!();

            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or_default()
            );
            println!("  {} {}", "probe_timeout_secs:".bold(), config.probe_timeout_secs);

            let fail_on = config
                .fail_on
                .map_or_else(|| "(not set)".dimmed().to_string(), |f| format!("{f:?}").to_lowercase());
            println!("  {} {}", "fail_on:".bold(), fail_on);

            let sysfs = config
                .sysfs_root
                .as_ref()
                .map_or_else(|| "/sys".dimmed().to_string(), |p| p.display().to_string());
            println!("  {} {}", "sysfs_root:".bold(), sysfs);

            println!("  {} {}", "extra signatures:".bold(), config.signatures.len());
            for sig in &config.signatures {
                println!("    - {} ({})", sig.label, sig.tokens.join(", "));
            }
        }
    }

    Ok(())
}

fn init_config(ctx: &Context, force: bool) -> Result<()> {
    let path = &ctx.config_path;
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {}\n\
             Use --force to overwrite it.",
            path.display()
        );
    }

    Config::default().save(path)?;
    println!(
        "{} Wrote default configuration to {}",
        "Success:".green().bold(),
        path.display().to_string().cyan()
    );
    Ok(())
}
