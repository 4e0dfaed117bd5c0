//! Core types and traits for the proctor integrity scanner.
//!
//! This crate provides the foundational types shared by the probe, engine and
//! CLI crates:
//!
//! - **Types**: process, device and display records, verdicts and reports
//! - **Providers**: capability traits the engine consumes ([`ProcessSource`],
//!   [`DeviceSource`]) plus a recorded [`HostSnapshot`] implementing both
//! - **Errors**: snapshot query failures via [`ProviderError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use proctor_core::{CheckVerdict, Severity};
//!
//! fn needs_attention(verdict: &CheckVerdict) -> bool {
//!     verdict.error.is_some() || verdict.severity > Severity::Ok
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/proctor-core/0.3.0")]

mod error;
pub mod platform;
pub mod provider;
pub mod snapshot;
pub mod types;

pub use error::{ProviderError, ProviderResult};
pub use platform::Platform;
pub use provider::{DeviceSource, ProcessSource};
pub use snapshot::HostSnapshot;
pub use types::*;
