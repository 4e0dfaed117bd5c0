//! Display and USB device records.

use serde::{Deserialize, Serialize};

/// Display enumeration result.
///
/// `count` is the number of enumerated display entries, which is an
/// approximation of the physical monitor count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayInfo {
    /// Number of enumerated displays
    pub count: usize,
}

impl DisplayInfo {
    /// Display info with the given count.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

/// A USB device descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsbDevice {
    /// Descriptive name (product string, optionally prefixed by manufacturer)
    #[serde(default)]
    pub name: String,
    /// USB vendor id, hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    /// USB product id, hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

impl UsbDevice {
    /// Device known only by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
