//! Snapshot provider capabilities consumed by the check engine.
//!
//! Implementations are injected into the engine at construction time. Each
//! call is a fresh point-in-time query: providers must not cache.

use async_trait::async_trait;

use crate::error::ProviderResult;
use crate::types::{DisplayInfo, ProcessRecord, UsbDevice};

/// Source of the running process list.
#[async_trait]
pub trait ProcessSource: Send + Sync {
    /// Enumerate running processes.
    async fn list_processes(&self) -> ProviderResult<Vec<ProcessRecord>>;
}

/// Source of display and USB device information.
#[async_trait]
pub trait DeviceSource: Send + Sync {
    /// Enumerate attached displays.
    async fn list_displays(&self) -> ProviderResult<DisplayInfo>;

    /// Enumerate attached USB devices.
    async fn list_usb_devices(&self) -> ProviderResult<Vec<UsbDevice>>;
}
