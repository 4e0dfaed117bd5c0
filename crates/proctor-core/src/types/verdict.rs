//! Check outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProviderError;
use crate::types::process::ProcessRecord;

/// The four integrity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckName {
    /// More than one display attached
    Display,
    /// Screen sharing / remote access software running
    ScreenSharing,
    /// More than one keyboard-like device attached
    Keyboard,
    /// The disallowed assistant application running
    DisallowedProcess,
}

impl CheckName {
    /// Every check, in report order.
    pub const ALL: [Self; 4] = [
        Self::Display,
        Self::ScreenSharing,
        Self::Keyboard,
        Self::DisallowedProcess,
    ];

    /// Machine identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::ScreenSharing => "screen-sharing",
            Self::Keyboard => "keyboard",
            Self::DisallowedProcess => "disallowed-process",
        }
    }

    /// Human-readable heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Display => "Display Configuration",
            Self::ScreenSharing => "Screen Sharing Check",
            Self::Keyboard => "Keyboard Device Check",
            Self::DisallowedProcess => "Interview Coder Check",
        }
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.to_lowercase().replace('_', "-"))
            .ok_or_else(|| format!("unknown check: {s}"))
    }
}

/// Severity tier of a verdict. Ordered: `Ok < Warning < Violation`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No concern
    #[default]
    Ok,
    /// Concern or tool failure, non-definitive
    Warning,
    /// Confirmed policy breach
    Violation,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Violation => "violation",
        })
    }
}

/// Typed facts gathered by a check, alongside the free-form evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Findings {
    /// Display check facts
    Display {
        /// Enumerated displays
        display_count: usize,
        /// `display_count > 1`
        multiple_displays: bool,
    },
    /// Screen-sharing check facts
    ScreenSharing {
        /// Detected labels, catalog order, synthetic browser label last
        sharing_apps: Vec<String>,
        /// At least one label detected
        is_sharing: bool,
        /// More than one label detected
        multiple_targets: bool,
        /// A browser process is running
        browser_detected: bool,
    },
    /// Keyboard check facts
    Keyboard {
        /// Keyboard-like devices
        keyboard_count: usize,
        /// Their names
        keyboards: Vec<String>,
        /// `keyboard_count > 1`
        multiple_keyboards: bool,
    },
    /// Disallowed-process check facts
    DisallowedProcess {
        /// Matching processes
        process_count: usize,
        /// The matches themselves
        processes: Vec<ProcessRecord>,
    },
}

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckVerdict {
    /// Which check produced this
    pub check: CheckName,
    /// Check ran and found nothing
    pub passed: bool,
    /// Severity tier
    pub severity: Severity,
    /// One-line human explanation
    pub detail: String,
    /// Ordered supporting evidence
    #[serde(default)]
    pub evidence: Vec<String>,
    /// Typed facts, absent when the check could not run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub findings: Option<Findings>,
    /// Set when the check could not run; holds the failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckVerdict {
    /// Verdict for a check that ran. `passed` follows from the severity.
    pub fn new(check: CheckName, severity: Severity, detail: impl Into<String>) -> Self {
        Self {
            check,
            passed: severity == Severity::Ok,
            severity,
            detail: detail.into(),
            evidence: Vec::new(),
            findings: None,
            error: None,
        }
    }

    /// Verdict for a check that could not run.
    ///
    /// Always `Warning`, never `Violation`: a tool failure is not a finding.
    pub fn failed(check: CheckName, err: &ProviderError) -> Self {
        let message = err.to_string();
        Self {
            check,
            passed: false,
            severity: Severity::Warning,
            detail: message.clone(),
            evidence: Vec::new(),
            findings: None,
            error: Some(message),
        }
    }

    /// Attach evidence.
    #[must_use]
    pub fn with_evidence(mut self, evidence: Vec<String>) -> Self {
        self.evidence = evidence;
        self
    }

    /// Attach typed findings.
    #[must_use]
    pub fn with_findings(mut self, findings: Findings) -> Self {
        self.findings = Some(findings);
        self
    }

    /// The check could not run.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// The check ran and flagged something.
    #[must_use]
    pub const fn is_flagged(&self) -> bool {
        self.error.is_none() && !self.passed
    }
}
