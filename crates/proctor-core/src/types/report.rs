//! Scan report: one verdict per check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::platform::Platform;
use crate::types::verdict::{CheckName, CheckVerdict, Severity};

/// Complete result of one scan.
///
/// A report always holds exactly one verdict per [`CheckName`]; the only
/// constructor takes all four.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// When the scan finished
    pub collected_at: DateTime<Utc>,
    /// Platform used to gate catalog entries
    pub platform: Platform,
    display: CheckVerdict,
    #[serde(rename = "screen-sharing")]
    screen_sharing: CheckVerdict,
    keyboard: CheckVerdict,
    #[serde(rename = "disallowed-process")]
    disallowed_process: CheckVerdict,
}

impl ScanReport {
    /// Assemble a report from the four verdicts.
    #[must_use]
    pub fn new(
        platform: Platform,
        display: CheckVerdict,
        screen_sharing: CheckVerdict,
        keyboard: CheckVerdict,
        disallowed_process: CheckVerdict,
    ) -> Self {
        debug_assert_eq!(display.check, CheckName::Display);
        debug_assert_eq!(screen_sharing.check, CheckName::ScreenSharing);
        debug_assert_eq!(keyboard.check, CheckName::Keyboard);
        debug_assert_eq!(disallowed_process.check, CheckName::DisallowedProcess);

        Self {
            collected_at: Utc::now(),
            platform,
            display,
            screen_sharing,
            keyboard,
            disallowed_process,
        }
    }

    /// Verdict for one check.
    #[must_use]
    pub const fn get(&self, check: CheckName) -> &CheckVerdict {
        match check {
            CheckName::Display => &self.display,
            CheckName::ScreenSharing => &self.screen_sharing,
            CheckName::Keyboard => &self.keyboard,
            CheckName::DisallowedProcess => &self.disallowed_process,
        }
    }

    /// All verdicts in [`CheckName::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &CheckVerdict> {
        CheckName::ALL.into_iter().map(|c| self.get(c))
    }

    /// Highest severity across all checks.
    #[must_use]
    pub fn overall(&self) -> Severity {
        self.iter()
            .map(|v| v.severity)
            .max()
            .unwrap_or_default()
    }

    /// Every check ran and passed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.iter().all(|v| v.passed)
    }

    /// Checks that could not run.
    pub fn failures(&self) -> impl Iterator<Item = &CheckVerdict> {
        self.iter().filter(|v| v.is_failure())
    }

    /// Checks that ran and flagged something.
    pub fn flagged(&self) -> impl Iterator<Item = &CheckVerdict> {
        self.iter().filter(|v| v.is_flagged())
    }
}
