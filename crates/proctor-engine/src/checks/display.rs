//! Display check: more than one display is a violation.

use proctor_core::{CheckName, CheckVerdict, DisplayInfo, Findings, Severity};

/// Evaluate the display enumeration.
#[must_use]
pub fn evaluate(info: DisplayInfo) -> CheckVerdict {
    let multiple_displays = info.count > 1;

    let verdict = if multiple_displays {
        CheckVerdict::new(
            CheckName::Display,
            Severity::Violation,
            format!(
                "Found {} displays. Only a single display is allowed.",
                info.count
            ),
        )
    } else {
        CheckVerdict::new(
            CheckName::Display,
            Severity::Ok,
            format!("Single display configuration detected ({} found).", info.count),
        )
    };

    verdict.with_findings(Findings::Display {
        display_count: info.count,
        multiple_displays,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_iff_more_than_one() {
        for count in 0..=5 {
            let verdict = evaluate(DisplayInfo::new(count));
            if count > 1 {
                assert_eq!(verdict.severity, Severity::Violation, "count {count}");
                assert!(!verdict.passed);
                assert!(verdict.detail.contains(&count.to_string()));
            } else {
                assert_eq!(verdict.severity, Severity::Ok, "count {count}");
                assert!(verdict.passed);
            }
        }
    }

    #[test]
    fn findings_carry_count() {
        let verdict = evaluate(DisplayInfo::new(3));
        assert_eq!(
            verdict.findings,
            Some(Findings::Display {
                display_count: 3,
                multiple_displays: true
            })
        );
    }
}
