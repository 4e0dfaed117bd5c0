//! Configuration management.

use anyhow::{Context as _, Result};
use clap::ValueEnum;
use directories::ProjectDirs;
use proctor_core::{AppSignature, Severity};
use proctor_engine::Catalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::output::OutputFormat;

/// Severity at which `scan` exits non-zero.
#[derive(Debug, Clone, Copy, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    /// Any warning or violation, including checks that could not run
    Warning,
    /// Confirmed violations only
    Violation,
}

impl FailOn {
    /// Lowest severity that trips the threshold.
    #[must_use]
    pub const fn threshold(self) -> Severity {
        match self {
            Self::Warning => Severity::Warning,
            Self::Violation => Severity::Violation,
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Bound on each snapshot query, in seconds.
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,

    /// Default exit threshold for `scan`.
    pub fail_on: Option<FailOn>,

    /// Where sysfs is mounted (default `/sys`).
    pub sysfs_root: Option<PathBuf>,

    /// Extra screen-sharing signatures, appended to the built-in catalog.
    #[serde(default)]
    pub signatures: Vec<AppSignature>,
}

const fn default_probe_timeout() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: None,
            probe_timeout_secs: default_probe_timeout(),
            fail_on: None,
            sysfs_root: None,
            signatures: Vec::new(),
        }
    }
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "proctor", "proctor")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve the config path: explicit override, else the default.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        explicit.map_or_else(Self::default_path, |p| Ok(p.to_path_buf()))
    }

    /// Load configuration from file; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Built-in catalog plus the configured extra signatures.
    pub fn catalog(&self) -> Result<Catalog> {
        let mut catalog = Catalog::builtin();
        catalog
            .extend(self.signatures.iter().cloned())
            .map_err(|e| anyhow::anyhow!("invalid signature in config: {e}"))?;
        Ok(catalog)
    }

    /// Probe timeout as a duration.
    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}
