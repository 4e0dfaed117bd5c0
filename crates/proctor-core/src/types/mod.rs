//! Core types for the scanner.

pub mod device;
pub mod process;
pub mod report;
pub mod signature;
pub mod verdict;

pub use device::{DisplayInfo, UsbDevice};
pub use process::ProcessRecord;
pub use report::ScanReport;
pub use signature::AppSignature;
pub use verdict::{CheckName, CheckVerdict, Findings, Severity};
