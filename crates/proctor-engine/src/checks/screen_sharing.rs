//! Screen-sharing check: known sharing, remote-access and capture apps.
//!
//! One detected app is a warning; two or more is a violation. A running
//! browser never flags on its own, but alongside a detected app it adds the
//! "possible browser-based sharing" label, which can tip a single detection
//! into a violation.

use proctor_core::{CheckName, CheckVerdict, Findings, Platform, ProcessRecord, Severity};

use super::ProcessView;
use crate::catalog::{Catalog, BROWSER_PATTERNS, BROWSER_SHARING_LABEL};

/// Labels of every applicable catalog entry with a matching process.
///
/// Catalog order; each label appears at most once.
#[must_use]
pub fn detect_apps(views: &[ProcessView<'_>], catalog: &Catalog, platform: Platform) -> Vec<String> {
    catalog
        .applicable(platform)
        .filter(|sig| views.iter().any(|v| v.either(|s| sig.matches(s))))
        .map(|sig| sig.label.clone())
        .collect()
}

/// Whether any process looks like a web browser.
#[must_use]
pub fn browser_running(views: &[ProcessView<'_>]) -> bool {
    BROWSER_PATTERNS
        .iter()
        .any(|pattern| views.iter().any(|v| v.contains(pattern)))
}

/// Evaluate a process snapshot.
#[must_use]
pub fn evaluate(processes: &[ProcessRecord], catalog: &Catalog, platform: Platform) -> CheckVerdict {
    let views = ProcessView::all(processes);

    let mut sharing_apps = detect_apps(&views, catalog, platform);
    let browser_detected = browser_running(&views);

    if browser_detected
        && !sharing_apps.is_empty()
        && !sharing_apps.iter().any(|a| a == BROWSER_SHARING_LABEL)
    {
        sharing_apps.push(BROWSER_SHARING_LABEL.to_string());
    }

    let is_sharing = !sharing_apps.is_empty();
    let multiple_targets = sharing_apps.len() > 1;

    let verdict = if multiple_targets {
        CheckVerdict::new(
            CheckName::ScreenSharing,
            Severity::Violation,
            format!("Screen sharing apps detected: {}", sharing_apps.join(", ")),
        )
    } else if is_sharing {
        CheckVerdict::new(
            CheckName::ScreenSharing,
            Severity::Warning,
            format!("Screen sharing app detected: {}", sharing_apps.join(", ")),
        )
    } else if browser_detected {
        CheckVerdict::new(
            CheckName::ScreenSharing,
            Severity::Ok,
            "No screen sharing apps detected. Browser is running, but no sharing activity confirmed.",
        )
    } else {
        CheckVerdict::new(
            CheckName::ScreenSharing,
            Severity::Ok,
            "No screen sharing apps or activity detected.",
        )
    };

    verdict
        .with_evidence(sharing_apps.clone())
        .with_findings(Findings::ScreenSharing {
            sharing_apps,
            is_sharing,
            multiple_targets,
            browser_detected,
        })
}
