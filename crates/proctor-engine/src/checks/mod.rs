//! The four integrity checks.
//!
//! Each check is a pure function from snapshot data to a [`CheckVerdict`];
//! fetching that data and handling provider failures is the engine's job.
//!
//! [`CheckVerdict`]: proctor_core::CheckVerdict

pub mod disallowed;
pub mod display;
pub mod keyboard;
pub mod screen_sharing;

use proctor_core::ProcessRecord;

/// A process with its name and command line lowercased once.
///
/// Every substring rule in the catalog is case-insensitive, so lowercasing
/// up front keeps each rule a plain `contains`.
#[derive(Debug, Clone)]
pub struct ProcessView<'a> {
    /// The underlying record
    pub record: &'a ProcessRecord,
    name: String,
    command_line: String,
}

impl<'a> ProcessView<'a> {
    /// Lowercase view of `record`.
    #[must_use]
    pub fn new(record: &'a ProcessRecord) -> Self {
        Self {
            record,
            name: record.name.to_lowercase(),
            command_line: record.command_line.to_lowercase(),
        }
    }

    /// Views over a whole snapshot.
    #[must_use]
    pub fn all(records: &'a [ProcessRecord]) -> Vec<Self> {
        records.iter().map(Self::new).collect()
    }

    /// Whether `pred` holds for the name or the command line.
    pub fn either(&self, pred: impl Fn(&str) -> bool) -> bool {
        pred(&self.name) || pred(&self.command_line)
    }

    /// Whether the name or command line contains the lowercase `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.either(|s| s.contains(needle))
    }
}
