//! Process snapshot records.

use serde::{Deserialize, Serialize};

/// A running process, as seen at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process ID
    pub pid: i32,
    /// Process name (comm / image name)
    #[serde(default)]
    pub name: String,
    /// Full command line, arguments joined by spaces
    #[serde(default)]
    pub command_line: String,
}

impl ProcessRecord {
    /// Build a record from its parts.
    pub fn new(pid: i32, name: impl Into<String>, command_line: impl Into<String>) -> Self {
        Self {
            pid,
            name: name.into(),
            command_line: command_line.into(),
        }
    }

    /// Name for display, with a placeholder when the OS gave none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unknown Process"
        } else {
            &self.name
        }
    }

    /// Command line for display, with a placeholder when the OS gave none.
    #[must_use]
    pub fn display_command(&self) -> &str {
        if self.command_line.is_empty() {
            "Unknown Command"
        } else {
            &self.command_line
        }
    }
}

impl std::fmt::Display for ProcessRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pid {}: {} ({})",
            self.pid,
            self.display_name(),
            self.display_command()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_placeholders() {
        let record = ProcessRecord::new(42, "", "");
        assert_eq!(record.to_string(), "pid 42: Unknown Process (Unknown Command)");
    }

    #[test]
    fn missing_fields_deserialize_empty() {
        let record: ProcessRecord = serde_json::from_str(r#"{"pid": 7}"#).unwrap();
        assert_eq!(record, ProcessRecord::new(7, "", ""));
    }
}
