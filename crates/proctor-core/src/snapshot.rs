//! Recorded host snapshot.
//!
//! A [`HostSnapshot`] is a point-in-time capture of everything the checks
//! read. It serializes to JSON so a capture taken on one machine can be
//! scanned later, and it implements both provider traits so the engine can
//! run against it exactly as against the live host.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ProviderError, ProviderResult};
use crate::platform::Platform;
use crate::provider::{DeviceSource, ProcessSource};
use crate::types::{DisplayInfo, ProcessRecord, UsbDevice};

/// Point-in-time capture of processes, displays and USB devices.
///
/// A section left as `None` could not be captured; querying it yields
/// [`ProviderError::Unavailable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSnapshot {
    /// When the capture was taken
    pub captured_at: DateTime<Utc>,
    /// Platform the capture was taken on
    pub platform: Platform,
    /// Running processes
    #[serde(default)]
    pub processes: Option<Vec<ProcessRecord>>,
    /// Display enumeration
    #[serde(default)]
    pub displays: Option<DisplayInfo>,
    /// USB devices
    #[serde(default)]
    pub usb_devices: Option<Vec<UsbDevice>>,
}

impl HostSnapshot {
    /// Empty snapshot for `platform`; every section unavailable.
    #[must_use]
    pub fn empty(platform: Platform) -> Self {
        Self {
            captured_at: Utc::now(),
            platform,
            processes: None,
            displays: None,
            usb_devices: None,
        }
    }

    /// Set the process list.
    #[must_use]
    pub fn with_processes(mut self, processes: Vec<ProcessRecord>) -> Self {
        self.processes = Some(processes);
        self
    }

    /// Set the display count.
    #[must_use]
    pub fn with_displays(mut self, count: usize) -> Self {
        self.displays = Some(DisplayInfo::new(count));
        self
    }

    /// Set the USB device list.
    #[must_use]
    pub fn with_usb_devices(mut self, devices: Vec<UsbDevice>) -> Self {
        self.usb_devices = Some(devices);
        self
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> ProviderResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ProviderError::from_io(&path.display().to_string(), &e))?;
        serde_json::from_str(&content).map_err(|e| {
            ProviderError::Unavailable(format!("failed to parse {}: {e}", path.display()))
        })
    }

    fn missing(section: &str) -> ProviderError {
        ProviderError::Unavailable(format!("{section} not recorded in snapshot"))
    }
}

#[async_trait]
impl ProcessSource for HostSnapshot {
    async fn list_processes(&self) -> ProviderResult<Vec<ProcessRecord>> {
        self.processes
            .clone()
            .ok_or_else(|| Self::missing("process list"))
    }
}

#[async_trait]
impl DeviceSource for HostSnapshot {
    async fn list_displays(&self) -> ProviderResult<DisplayInfo> {
        self.displays.ok_or_else(|| Self::missing("display list"))
    }

    async fn list_usb_devices(&self) -> ProviderResult<Vec<UsbDevice>> {
        self.usb_devices
            .clone()
            .ok_or_else(|| Self::missing("usb device list"))
    }
}
