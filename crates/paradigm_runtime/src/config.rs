//! Session configuration.

use paradigm_debug::DebugConfig;
use paradigm_engine::GeneratorConfig;

/// What to do when a rule with an uncompilable pattern is added or edited.
///
/// Generation always re-checks patterns; this only controls edit-time checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditValidation {
    /// Accept silently.
    Off,
    /// Accept and log a warning.
    #[default]
    Warn,
    /// Refuse the edit with the compile error.
    Reject,
}

/// Configuration for a [`crate::Session`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Edit-time pattern checking.
    pub edit_validation: EditValidation,
    /// Form generation settings.
    pub generator: GeneratorConfig,
    /// Trace rendering settings.
    pub debug: DebugConfig,
}

impl SessionConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets edit-time pattern checking.
    #[must_use]
    pub fn with_edit_validation(mut self, edit_validation: EditValidation) -> Self {
        self.edit_validation = edit_validation;
        self
    }

    /// Sets the generator configuration.
    #[must_use]
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Sets the trace rendering configuration.
    #[must_use]
    pub fn with_debug(mut self, debug: DebugConfig) -> Self {
        self.debug = debug;
        self
    }
}
