//! Trace formatting, debug configuration, and consistency reports for Paradigm.
//!
//! This crate provides:
//! - [`DebugConfig`] - What trace output shows and how
//! - [`TraceFormatter`] - Human-readable and JSON renderings of generation traces
//! - [`ConsistencyReport`] - Orphaned rules, deprecated forms, and stale class filters

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod report;
pub mod trace;

pub use config::DebugConfig;
pub use report::{ConsistencyReport, DeprecatedForms, OrphanedRule};
pub use trace::{HumanFormatter, JsonFormatter, TraceFormatter, formatter_for};
