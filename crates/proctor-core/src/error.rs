use std::io;

use thiserror::Error;

use crate::platform::Platform;

/// Result type alias for snapshot provider queries
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Errors a snapshot provider can report.
///
/// Checks never propagate these: each one is turned into a warning verdict
/// carrying [`ToString::to_string`] of the error as its detail.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The OS refused access to the data source
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Enumeration started but could not be completed
    #[error("enumeration failed: {0}")]
    Enumeration(String),

    /// No provider implementation exists for this platform
    #[error("{what} enumeration is not supported on {platform}")]
    Unsupported {
        /// What was being enumerated
        what: &'static str,
        /// Platform the query ran on
        platform: Platform,
    },

    /// The data source exists but has nothing to offer (e.g. missing snapshot section)
    #[error("snapshot unavailable: {0}")]
    Unavailable(String),

    /// The query did not answer within the configured bound
    #[error("{query} query timed out after {after_ms} ms")]
    Timeout {
        /// Name of the query that hung
        query: &'static str,
        /// Configured bound in milliseconds
        after_ms: u64,
    },

    /// The check task died before producing a verdict
    #[error("check aborted: {0}")]
    Aborted(String),

    /// Raw I/O failure from the OS
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl ProviderError {
    /// Classify an I/O error, singling out permission failures.
    pub fn from_io(context: &str, err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(format!("{context}: {err}")),
            io::ErrorKind::NotFound => Self::Unavailable(format!("{context}: {err}")),
            _ => Self::Enumeration(format!("{context}: {err}")),
        }
    }

    /// Whether this error came from the timeout guard rather than the provider.
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
