//! Rendering of generation traces.
//!
//! A trace is produced by the engine for every traced `decline` call. This
//! module turns it into text for people or JSON for tools.
//!
//! # Example
//!
//! ```text
//! decline "kato" @ ,3,7,
//!   [1] plural APPLIED
//!       o$ -> oj: kato => katoj
//!   [2] feminine SKIPPED (class#1 requires class-value#2, word has none)
//! ```

pub mod format;

pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};

use crate::config::DebugConfig;

/// Builds the formatter selected by `config`.
#[must_use]
pub fn formatter_for(config: &DebugConfig) -> Box<dyn TraceFormatter> {
    if config.json_output {
        let formatter = JsonFormatter::new();
        Box::new(if config.pretty {
            formatter.pretty()
        } else {
            formatter
        })
    } else {
        Box::new(HumanFormatter::from_config(config))
    }
}
