//! Display discovery via the DRM subsystem in sysfs.
//!
//! Each connector appears as `/sys/class/drm/card<N>-<connector>` with a
//! `status` file reading `connected` when a monitor is attached. The count
//! of connected connectors stands in for the monitor count.

use proctor_core::{DisplayInfo, Platform, ProviderError, ProviderResult};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Count connected displays under `<sysfs_root>/class/drm`.
///
/// # Errors
///
/// Returns `ProviderError::Unsupported` off Linux, and an unavailable or
/// permission error when the DRM class directory cannot be read.
pub fn discover_displays(sysfs_root: &Path) -> ProviderResult<DisplayInfo> {
    if Platform::current() != Platform::Linux {
        return Err(ProviderError::Unsupported {
            what: "display",
            platform: Platform::current(),
        });
    }

    count_connected_outputs(&sysfs_root.join("class").join("drm"))
}

/// Count connectors in a DRM class directory whose status is `connected`.
pub fn count_connected_outputs(drm_dir: &Path) -> ProviderResult<DisplayInfo> {
    if let Err(e) = std::fs::metadata(drm_dir) {
        return Err(ProviderError::from_io(&drm_dir.display().to_string(), &e));
    }

    let mut count = 0;
    for entry in WalkDir::new(drm_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!(error = %e, "skipping unreadable drm entry");
                continue;
            }
        };

        // card0, renderD128 and version are not connectors
        let name = entry.file_name().to_string_lossy();
        if !name.starts_with("card") || !name.contains('-') {
            continue;
        }

        match std::fs::read_to_string(entry.path().join("status")) {
            Ok(status) if status.trim() == "connected" => {
                debug!(connector = %name, "connected display");
                count += 1;
            }
            Ok(_) => {}
            Err(e) => debug!(connector = %name, error = %e, "no connector status"),
        }
    }

    Ok(DisplayInfo::new(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn connector(root: &Path, name: &str, status: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("status"), format!("{status}\n")).unwrap();
    }

    #[test]
    fn counts_only_connected_connectors() {
        let tmp = tempfile::tempdir().unwrap();
        connector(tmp.path(), "card0-eDP-1", "connected");
        connector(tmp.path(), "card0-HDMI-A-1", "connected");
        connector(tmp.path(), "card0-DP-1", "disconnected");
        fs::create_dir_all(tmp.path().join("card0")).unwrap();
        fs::create_dir_all(tmp.path().join("renderD128")).unwrap();
        fs::write(tmp.path().join("version"), "drm 1.1.0\n").unwrap();

        let info = count_connected_outputs(tmp.path()).unwrap();
        assert_eq!(info.count, 2);
    }

    #[test]
    fn missing_drm_dir_is_unavailable() {
        let tmp = tempfile::tempdir().unwrap();
        let err = count_connected_outputs(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, ProviderError::Unavailable(_)));
    }

    #[test]
    fn headless_host_reports_zero() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("card0")).unwrap();
        assert_eq!(count_connected_outputs(tmp.path()).unwrap().count, 0);
    }
}
