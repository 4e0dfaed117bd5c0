//! # proctor-engine
//!
//! The detection engine: a signature catalog, four independent checks and
//! the aggregator that runs them into a [`ScanReport`].
//!
//! ## Checks
//!
//! - **Display** -- more than one display attached is a violation
//! - **Screen sharing** -- known sharing/remote-access/capture apps running
//! - **Keyboard** -- more than one keyboard-like USB device is a violation
//! - **Disallowed process** -- the "Interview Coder" assistant running
//!
//! ## Data Flow
//!
//! ```text
//! Engine::run_all_checks()
//!   spawn 4 tasks, each:
//!     timeout(provider query) -> snapshot data | ProviderError
//!     checks::<check>::evaluate(data) -> CheckVerdict
//!     ProviderError / panic -> warning verdict for that check only
//!   join all 4 -> ScanReport
//! ```
//!
//! Evaluation is pure and synchronous; only the provider queries suspend.

pub mod catalog;
pub mod checks;
pub mod engine;

pub use catalog::Catalog;
pub use engine::{Engine, EngineBuilder, DEFAULT_PROBE_TIMEOUT};

pub use proctor_core::{CheckName, CheckVerdict, ScanReport, Severity};
