//! Output formatting for different formats.
//!
//! Every verdict renders in one of three visible states: could not run
//! (warning styling), ran and flagged (warning or danger styling by
//! severity), ran clean (success styling).

use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use proctor_core::{AppSignature, CheckName, CheckVerdict, ScanReport, Severity};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed report with colors
    #[default]
    #[value(alias = "table")]
    #[serde(alias = "table")]
    Pretty,
    /// JSON output
    Json,
    /// CSV output, one row per check
    Csv,
    /// YAML output
    #[value(alias = "yml")]
    #[serde(alias = "yml")]
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Flat CSV row for one verdict.
#[derive(Serialize)]
struct VerdictRow<'a> {
    check: CheckName,
    passed: bool,
    severity: Severity,
    detail: &'a str,
    evidence: String,
    error: &'a str,
}

impl<'a> From<&'a CheckVerdict> for VerdictRow<'a> {
    fn from(v: &'a CheckVerdict) -> Self {
        Self {
            check: v.check,
            passed: v.passed,
            severity: v.severity,
            detail: &v.detail,
            evidence: v.evidence.join("; "),
            error: v.error.as_deref().unwrap_or(""),
        }
    }
}

/// Render a full report.
pub fn render_report(report: &ScanReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        OutputFormat::Csv => verdicts_csv(report.iter()),
        OutputFormat::Pretty => Ok(pretty_report(report)),
    }
}

/// Render a single verdict.
pub fn render_verdict(verdict: &CheckVerdict, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(verdict)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(verdict)?),
        OutputFormat::Csv => verdicts_csv(std::iter::once(verdict)),
        OutputFormat::Pretty => {
            let mut out = String::new();
            pretty_verdict(&mut out, verdict);
            Ok(out)
        }
    }
}

/// Render a list of signatures.
pub fn render_signatures(signatures: &[&AppSignature], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(signatures)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(signatures)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(Vec::new());
            wtr.write_record(["label", "tokens", "platform"])?;
            for sig in signatures {
                let tokens = sig.tokens.join(" ");
                let platform = sig.platform.map_or("any", |p| p.as_str());
                wtr.write_record([sig.label.as_str(), tokens.as_str(), platform])?;
            }
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Pretty => {
            let mut out = String::new();
            let width = signatures.iter().map(|s| s.label.len()).max().unwrap_or(0);
            for sig in signatures {
                let platform = sig
                    .platform
                    .map_or_else(String::new, |p| format!(" [{p} only]"));
                let _ = writeln!(
                    out,
                    "  {:<width$}  {}{}",
                    sig.label.bright_white(),
                    sig.tokens.join(", ").dimmed(),
                    platform.bright_yellow(),
                );
            }
            Ok(out)
        }
    }
}

fn verdicts_csv<'a>(verdicts: impl Iterator<Item = &'a CheckVerdict>) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for verdict in verdicts {
        wtr.serialize(VerdictRow::from(verdict))?;
    }
    Ok(String::from_utf8(wtr.into_inner()?)?)
}

/// Status headline for a verdict, following the three visible states.
#[must_use]
pub fn status_text(verdict: &CheckVerdict) -> &'static str {
    if verdict.is_failure() {
        return "Error checking";
    }
    match (verdict.check, verdict.severity) {
        (_, Severity::Ok) => "Check passed",
        (CheckName::Display, _) => "Multiple displays detected",
        (CheckName::ScreenSharing, Severity::Violation) => "Multiple sharing apps detected",
        (CheckName::ScreenSharing, _) => "Screen sharing detected",
        (CheckName::Keyboard, _) => "Multiple keyboards detected",
        (CheckName::DisallowedProcess, _) => "Interview Coder detected",
    }
}

fn badge(verdict: &CheckVerdict) -> ColoredString {
    if verdict.is_failure() {
        return "[!]".bright_yellow();
    }
    match verdict.severity {
        Severity::Ok => "[✔]".bright_green(),
        Severity::Warning => "[!]".bright_yellow(),
        Severity::Violation => "[✘]".bright_red(),
    }
}

fn styled_status(verdict: &CheckVerdict) -> ColoredString {
    let text = status_text(verdict);
    if verdict.is_failure() {
        return text.yellow();
    }
    match verdict.severity {
        Severity::Ok => text.green(),
        Severity::Warning => text.yellow(),
        Severity::Violation => text.red(),
    }
}

fn pretty_verdict(out: &mut String, verdict: &CheckVerdict) {
    let _ = writeln!(
        out,
        "  {} {:<24} {}",
        badge(verdict),
        verdict.check.title().bright_white(),
        styled_status(verdict)
    );
    let _ = writeln!(out, "      {}", verdict.detail.dimmed());
    if verdict.check == CheckName::DisallowedProcess {
        for line in &verdict.evidence {
            let _ = writeln!(out, "        - {line}");
        }
    }
}

fn pretty_report(report: &ScanReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!(
            "  Interview integrity scan ({}, {})",
            report.platform,
            report.collected_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
        .bright_cyan()
    );
    let _ = writeln!(out);

    for verdict in report.iter() {
        pretty_verdict(&mut out, verdict);
    }

    let overall = match report.overall() {
        Severity::Ok => "PASSED".bright_green(),
        Severity::Warning => "NEEDS REVIEW".bright_yellow(),
        Severity::Violation => "VIOLATION".bright_red(),
    };
    let _ = writeln!(out);
    let _ = writeln!(out, "  Overall: {overall}");

    let failed = report.failures().count();
    if failed > 0 {
        let _ = writeln!(
            out,
            "  {}",
            format!("{failed} check(s) could not run; results are incomplete.").yellow()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proctor_core::{Platform, ProviderError};

    fn report() -> ScanReport {
        ScanReport::new(
            Platform::Linux,
            CheckVerdict::new(CheckName::Display, Severity::Violation, "Found 2 displays."),
            CheckVerdict::new(CheckName::ScreenSharing, Severity::Warning, "Screen sharing app detected: Zoom")
                .with_evidence(vec!["Zoom".into()]),
            CheckVerdict::failed(
                CheckName::Keyboard,
                &ProviderError::Unavailable("usb bus missing".into()),
            ),
            CheckVerdict::new(CheckName::DisallowedProcess, Severity::Ok, "No Interview Coder processes detected."),
        )
    }

    #[test]
    fn status_distinguishes_failure_from_finding() {
        let r = report();
        assert_eq!(status_text(r.get(CheckName::Keyboard)), "Error checking");
        assert_eq!(status_text(r.get(CheckName::ScreenSharing)), "Screen sharing detected");
        assert_eq!(status_text(r.get(CheckName::Display)), "Multiple displays detected");
        assert_eq!(status_text(r.get(CheckName::DisallowedProcess)), "Check passed");
    }

    #[test]
    fn pretty_report_has_overall_and_incomplete_note() {
        colored::control::set_override(false);
        let text = render_report(&report(), OutputFormat::Pretty).unwrap();
        assert!(text.contains("Overall: VIOLATION"));
        assert!(text.contains("1 check(s) could not run"));
        assert!(text.contains("Keyboard Device Check"));
    }

    #[test]
    fn csv_has_one_row_per_check() {
        let text = render_report(&report(), OutputFormat::Csv).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("check,passed,severity"));
        assert!(lines[2].starts_with("screen-sharing,false,warning"));
        assert!(lines[3].contains("usb bus missing"));
    }

    #[test]
    fn parses_format_aliases() {
        assert_eq!(OutputFormat::from_str("yml", true).unwrap(), OutputFormat::Yaml);
        assert_eq!(OutputFormat::from_str("TABLE", true).unwrap(), OutputFormat::Pretty);
        assert!(OutputFormat::from_str("xml", true).is_err());
    }
}
