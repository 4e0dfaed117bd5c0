//! # proctor-cli
//!
//! Command-line front end for the proctor integrity scanner.
//!
//! ## Features
//!
//! - **Scan**: run all four checks against the live host or a recorded snapshot
//! - **Single checks**: run one check by name
//! - **Snapshots**: capture host state to JSON for offline review
//! - **Catalog**: list the screen-sharing signatures in effect
//! - **Multiple output formats**: Pretty, JSON, YAML, CSV

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod runtime;

pub use cli::run;
