//! Keyboard check: more than one keyboard-like USB device is a violation.
//!
//! "Keyboard-like" is a name heuristic: the descriptor contains `keyboard`
//! or `input`. The `input` half also catches trackpads and other HID
//! devices; this over-counting is accepted, not corrected here.

use proctor_core::{CheckName, CheckVerdict, Findings, Severity, UsbDevice};

const KEYBOARD_HINTS: [&str; 2] = ["keyboard", "input"];

/// Whether a device name looks like a keyboard.
#[must_use]
pub fn is_keyboard_like(device: &UsbDevice) -> bool {
    let name = device.name.to_lowercase();
    KEYBOARD_HINTS.iter().any(|hint| name.contains(hint))
}

/// Evaluate the USB device list.
#[must_use]
pub fn evaluate(devices: &[UsbDevice]) -> CheckVerdict {
    let keyboards: Vec<String> = devices
        .iter()
        .filter(|d| is_keyboard_like(d))
        .map(|d| d.name.clone())
        .collect();
    let keyboard_count = keyboards.len();
    let multiple_keyboards = keyboard_count > 1;

    let verdict = if multiple_keyboards {
        CheckVerdict::new(
            CheckName::Keyboard,
            Severity::Violation,
            format!("Found {keyboard_count} keyboards: {}", keyboards.join(", ")),
        )
    } else {
        CheckVerdict::new(
            CheckName::Keyboard,
            Severity::Ok,
            format!("Detected {keyboard_count} keyboard device(s)."),
        )
    };

    verdict
        .with_evidence(keyboards.clone())
        .with_findings(Findings::Keyboard {
            keyboard_count,
            keyboards,
            multiple_keyboards,
        })
}
