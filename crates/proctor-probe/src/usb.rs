//! USB device discovery via `/sys/bus/usb/devices`.
//!
//! Device directories (`1-1`, `usb2`, ...) carry `product`, `manufacturer`,
//! `idVendor` and `idProduct` attribute files. Interface directories
//! (`1-1:1.0`) do not describe separate devices and are skipped.

use proctor_core::{Platform, ProviderError, ProviderResult, UsbDevice};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Enumerate USB devices under `<sysfs_root>/bus/usb/devices`.
///
/// # Errors
///
/// Returns `ProviderError::Unsupported` off Linux, and an unavailable or
/// permission error when the device directory cannot be read.
pub fn discover_usb_devices(sysfs_root: &Path) -> ProviderResult<Vec<UsbDevice>> {
    if Platform::current() != Platform::Linux {
        return Err(ProviderError::Unsupported {
            what: "usb device",
            platform: Platform::current(),
        });
    }

    read_usb_devices(&sysfs_root.join("bus").join("usb").join("devices"))
}

/// Read every device descriptor in a sysfs USB devices directory.
pub fn read_usb_devices(devices_dir: &Path) -> ProviderResult<Vec<UsbDevice>> {
    if let Err(e) = std::fs::metadata(devices_dir) {
        return Err(ProviderError::from_io(&devices_dir.display().to_string(), &e));
    }

    let mut devices = Vec::new();
    for entry in WalkDir::new(devices_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!(error = %e, "skipping unreadable usb entry");
                continue;
            }
        };

        if entry.file_name().to_string_lossy().contains(':') {
            continue;
        }

        let dir = entry.path();
        let vendor_id = read_attr(dir, "idVendor");
        let product_id = read_attr(dir, "idProduct");
        if vendor_id.is_none() && product_id.is_none() {
            continue;
        }

        let name = match (read_attr(dir, "manufacturer"), read_attr(dir, "product")) {
            (Some(maker), Some(product)) if !product.contains(&maker) => {
                format!("{maker} {product}")
            }
            (_, Some(product)) => product,
            (Some(maker), None) => maker,
            (None, None) => String::new(),
        };

        devices.push(UsbDevice {
            name,
            vendor_id,
            product_id,
        });
    }

    Ok(devices)
}

fn read_attr(dir: &Path, attr: &str) -> Option<String> {
    std::fs::read_to_string(dir.join(attr))
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn device(root: &Path, name: &str, attrs: &[(&str, &str)]) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        for (attr, value) in attrs {
            fs::write(dir.join(attr), format!("{value}\n")).unwrap();
        }
    }

    #[test]
    fn reads_device_descriptors() {
        let tmp = tempfile::tempdir().unwrap();
        device(
            tmp.path(),
            "1-1",
            &[
                ("idVendor", "046d"),
                ("idProduct", "c31c"),
                ("manufacturer", "Logitech"),
                ("product", "USB Keyboard"),
            ],
        );
        device(
            tmp.path(),
            "1-2",
            &[("idVendor", "05ac"), ("product", "Magic Trackpad Input")],
        );
        device(tmp.path(), "1-1:1.0", &[("bInterfaceClass", "03")]);

        let devices = read_usb_devices(tmp.path()).unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].name, "Logitech USB Keyboard");
        assert_eq!(devices[0].vendor_id.as_deref(), Some("046d"));
        assert_eq!(devices[1].name, "Magic Trackpad Input");
        assert!(devices[1].product_id.is_none());
    }

    #[test]
    fn manufacturer_already_in_product_is_not_repeated() {
        let tmp = tempfile::tempdir().unwrap();
        device(
            tmp.path(),
            "2-1",
            &[
                ("idVendor", "413c"),
                ("manufacturer", "Dell"),
                ("product", "Dell KB216 Wired Keyboard"),
            ],
        );

        let devices = read_usb_devices(tmp.path()).unwrap();
        assert_eq!(devices[0].name, "Dell KB216 Wired Keyboard");
    }

    #[test]
    fn missing_bus_is_unavailable() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(read_usb_devices(&tmp.path().join("devices")).is_err());
    }
}
