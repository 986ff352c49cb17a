//! Configuration for trace output.

/// Configuration for trace output.
///
/// Controls which parts of a generation trace are rendered and in what format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugConfig {
    /// Show each transform's before/after text under a fired rule.
    pub show_transforms: bool,

    /// Show rules that were skipped.
    pub show_skipped: bool,

    /// Output format: true for JSON, false for human-readable.
    pub json_output: bool,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_transforms: true,
            show_skipped: true,
            json_output: false,
            pretty: false,
        }
    }
}

impl DebugConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only fired rules, without transform detail.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            show_transforms: false,
            show_skipped: false,
            json_output: false,
            pretty: false,
        }
    }

    /// Everything, pretty-printed when JSON is selected.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            show_transforms: true,
            show_skipped: true,
            json_output: false,
            pretty: true,
        }
    }

    /// Builder method to show or hide transform detail.
    #[must_use]
    pub fn with_transforms(mut self, show: bool) -> Self {
        self.show_transforms = show;
        self
    }

    /// Builder method to show or hide skipped rules.
    #[must_use]
    pub fn with_skipped(mut self, show: bool) -> Self {
        self.show_skipped = show;
        self
    }

    /// Builder method to enable/disable JSON output.
    #[must_use]
    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    /// Builder method to enable/disable pretty JSON.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
