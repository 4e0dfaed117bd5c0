//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use proctor_core::{CheckName, Platform};
use std::path::PathBuf;

use crate::config::FailOn;
use crate::output::OutputFormat;

/// Interview integrity scanner.
///
/// Checks the local machine for extra displays, screen-sharing software,
/// extra keyboards and known interview-assistance tools.
#[derive(Parser, Debug)]
#[command(name = "proctor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long, env = "PROCTOR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every check and print the report
    Scan(ScanArgs),

    /// Run a single check
    Check(CheckArgs),

    /// Record the host state to a snapshot file
    Snapshot(SnapshotArgs),

    /// List known screen-sharing signatures
    Catalog(CatalogArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Shared
// ============================================================================

#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Evaluate a recorded snapshot instead of the live host
    #[arg(short, long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Per-query timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

// ============================================================================
// Scan command
// ============================================================================

#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Exit non-zero when the overall result reaches this severity
    #[arg(long, value_enum)]
    pub fail_on: Option<FailOn>,
}

// ============================================================================
// Check command
// ============================================================================

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Which check to run
    #[arg(value_enum)]
    pub check: CheckArg,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum CheckArg {
    /// Count attached displays
    Display,
    /// Look for running screen-sharing software
    ScreenSharing,
    /// Count keyboard-like USB devices
    Keyboard,
    /// Look for Interview Coder processes
    DisallowedProcess,
}

impl From<CheckArg> for CheckName {
    fn from(arg: CheckArg) -> Self {
        match arg {
            CheckArg::Display => Self::Display,
            CheckArg::ScreenSharing => Self::ScreenSharing,
            CheckArg::Keyboard => Self::Keyboard,
            CheckArg::DisallowedProcess => Self::DisallowedProcess,
        }
    }
}

// ============================================================================
// Snapshot command
// ============================================================================

#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Write the snapshot here instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Per-query timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

// ============================================================================
// Catalog command
// ============================================================================

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Platform to filter for (linux, macos, windows); defaults to this host
    #[arg(short, long)]
    pub platform: Option<Platform>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Show config file path
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_snapshot() {
        let cli = Cli::try_parse_from([
            "proctor",
            "-o",
            "json",
            "check",
            "screen-sharing",
            "--snapshot",
            "host.json",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(CheckName::from(args.check), CheckName::ScreenSharing);
                assert_eq!(args.source.snapshot, Some(PathBuf::from("host.json")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn snapshot_accepts_timeout() {
        let cli = Cli::try_parse_from(["proctor", "snapshot", "--timeout", "3"]).unwrap();
        match cli.command {
            Commands::Snapshot(args) => {
                assert_eq!(args.timeout, Some(3));
                assert_eq!(args.out, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn output_format_aliases_reach_clap() {
        let cli = Cli::try_parse_from(["proctor", "-o", "yml", "catalog"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Yaml));

        let cli = Cli::try_parse_from(["proctor", "--output", "table", "catalog"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Pretty));
    }

    #[test]
    fn parses_catalog_platform_alias() {
        let cli = Cli::try_parse_from(["proctor", "catalog", "--platform", "darwin"]).unwrap();
        match cli.command {
            Commands::Catalog(args) => assert_eq!(args.platform, Some(Platform::MacOs)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
