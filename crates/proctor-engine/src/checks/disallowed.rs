//! Disallowed-process check: the "Interview Coder" assistant.
//!
//! Unlike the catalog substrings, this is a flexible pattern so that
//! `InterviewCoder`, `interview_coder`, `interview-coder` and
//! `Interview   Coder` all match.

use std::sync::OnceLock;

use proctor_core::{CheckName, CheckVerdict, Findings, ProcessRecord, Severity};
use regex::Regex;

use super::ProcessView;

/// `interview`, optional separators, `coder`. Case-insensitive.
///
/// Separators are whitespace plus `_` and `-`. Accepting `-` is a deliberate
/// widening so `interview-coder` binaries are caught too; the reversed
/// `coder-interview` still does not match.
pub const DISALLOWED_PATTERN: &str = r"(?i)interview[\s_-]*coder";

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(DISALLOWED_PATTERN).expect("valid disallowed pattern"))
}

/// Whether a single process matches the disallowed pattern.
#[must_use]
pub fn is_disallowed(process: &ProcessRecord) -> bool {
    ProcessView::new(process).either(|s| pattern().is_match(s))
}

/// Evaluate a process snapshot.
#[must_use]
pub fn evaluate(processes: &[ProcessRecord]) -> CheckVerdict {
    let matches: Vec<ProcessRecord> = processes
        .iter()
        .filter(|p| is_disallowed(p))
        .cloned()
        .collect();
    let process_count = matches.len();

    let verdict = if process_count > 0 {
        CheckVerdict::new(
            CheckName::DisallowedProcess,
            Severity::Violation,
            format!("Found {process_count} Interview Coder process(es)."),
        )
    } else {
        CheckVerdict::new(
            CheckName::DisallowedProcess,
            Severity::Ok,
            "No Interview Coder processes detected.",
        )
    };

    verdict
        .with_evidence(matches.iter().map(ToString::to_string).collect())
        .with_findings(Findings::DisallowedProcess {
            process_count,
            processes: matches,
        })
}
