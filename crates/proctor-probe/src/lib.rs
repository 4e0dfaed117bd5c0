//! # proctor-probe
//!
//! Live snapshot providers for the proctor check engine.
//!
//! - **Processes**: `/proc` via the `procfs` crate
//! - **Displays**: connected DRM connectors under `/sys/class/drm`
//! - **USB devices**: device descriptors under `/sys/bus/usb/devices`
//!
//! Only Linux has a native implementation. Elsewhere every query answers
//! [`ProviderError::Unsupported`], which the engine reports as a warning
//! verdict rather than a clean pass.
//!
//! All enumeration is blocking filesystem work and runs on tokio's blocking
//! pool.

pub mod displays;
pub mod processes;
pub mod usb;

use async_trait::async_trait;
use proctor_core::{
    DeviceSource, DisplayInfo, HostSnapshot, Platform, ProcessRecord, ProcessSource,
    ProviderError, ProviderResult, UsbDevice,
};
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Default sysfs mount point.
pub const DEFAULT_SYSFS_ROOT: &str = "/sys";

/// Provider backed by the running host.
#[derive(Debug, Clone)]
pub struct HostProbe {
    sysfs_root: PathBuf,
}

impl Default for HostProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HostProbe {
    /// Probe the real host.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sysfs_root(DEFAULT_SYSFS_ROOT)
    }

    /// Probe with sysfs mounted elsewhere (containers, fixtures).
    #[must_use]
    pub fn with_sysfs_root(root: impl Into<PathBuf>) -> Self {
        Self {
            sysfs_root: root.into(),
        }
    }

    /// Capture everything the checks read into a [`HostSnapshot`].
    ///
    /// The three queries run concurrently, each bounded by `timeout`. A query
    /// that fails or times out leaves its section empty; the failure is
    /// logged and resurfaces as a warning verdict when the snapshot is
    /// scanned.
    pub async fn capture(&self, timeout: Duration) -> HostSnapshot {
        let (processes, displays, usb_devices) = tokio::join!(
            bounded("process list", timeout, self.list_processes()),
            bounded("display list", timeout, self.list_displays()),
            bounded("usb device list", timeout, self.list_usb_devices()),
        );

        HostSnapshot {
            processes,
            displays,
            usb_devices,
            ..HostSnapshot::empty(Platform::current())
        }
    }
}

/// Await one query for a capture, dropping it after `timeout`.
async fn bounded<T, F>(query: &'static str, timeout: Duration, fut: F) -> Option<T>
where
    F: Future<Output = ProviderResult<T>>,
{
    let result = tokio::time::timeout(timeout, fut).await.unwrap_or_else(|_| {
        Err(ProviderError::Timeout {
            query,
            after_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        })
    });

    match result {
        Ok(data) => Some(data),
        Err(e) => {
            warn!(query, error = %e, "not captured");
            None
        }
    }
}

/// Run blocking enumeration off the async workers.
async fn blocking<T, F>(f: F) -> ProviderResult<T>
where
    F: FnOnce() -> ProviderResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ProviderError::Aborted(e.to_string()))?
}

#[async_trait]
impl ProcessSource for HostProbe {
    async fn list_processes(&self) -> ProviderResult<Vec<ProcessRecord>> {
        blocking(processes::discover_processes).await
    }
}

#[async_trait]
impl DeviceSource for HostProbe {
    async fn list_displays(&self) -> ProviderResult<DisplayInfo> {
        let root = self.sysfs_root.clone();
        blocking(move || displays::discover_displays(&root)).await
    }

    async fn list_usb_devices(&self) -> ProviderResult<Vec<UsbDevice>> {
        let root = self.sysfs_root.clone();
        blocking(move || usb::discover_usb_devices(&root)).await
    }
}
