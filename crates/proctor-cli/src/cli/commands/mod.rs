//! Command implementations.

pub mod catalog;
pub mod check;
pub mod config;
pub mod scan;
pub mod snapshot;

use anyhow::Result;
use proctor_core::HostSnapshot;
use proctor_engine::Engine;
use proctor_probe::HostProbe;
use std::path::PathBuf;
use std::time::Duration;

use super::args::SourceArgs;
use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,

    /// Disable colors
    pub no_color: bool,

    /// Loaded configuration
    pub config: Config,

    /// Where the configuration lives (may not exist yet)
    pub config_path: PathBuf,
}

impl Context {
    /// Live host probe honoring the configured sysfs root.
    pub fn probe(&self) -> HostProbe {
        match &self.config.sysfs_root {
            Some(root) => HostProbe::with_sysfs_root(root),
            None => HostProbe::new(),
        }
    }

    /// Build an engine over either a recorded snapshot or the live host.
    pub fn engine(&self, source: &SourceArgs) -> Result<Engine> {
        let timeout = source
            .timeout
            .map_or_else(|| self.config.probe_timeout(), Duration::from_secs);
        let catalog = self.config.catalog()?;

        let builder = match &source.snapshot {
            Some(path) => {
                let snapshot = HostSnapshot::load(path)?;
                tracing::debug!(
                    path = %path.display(),
                    platform = %snapshot.platform,
                    "scanning recorded snapshot"
                );
                let platform = snapshot.platform;
                Engine::builder_for(snapshot).platform(platform)
            }
            None => Engine::builder_for(self.probe()),
        };

        Ok(builder.catalog(catalog).probe_timeout(timeout).build())
    }
}

/// Print rendered output, avoiding a doubled trailing newline.
pub fn emit(rendered: &str) {
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }
}
