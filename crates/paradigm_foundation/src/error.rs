//! Error types for the Paradigm system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Only two families of failure are hard errors: a rule pattern that the regex
//! engine rejects (surfaced at generation time) and lookups of records that do
//! not exist. Schema drift (orphaned rules, deprecated overrides, stale class
//! filters) is reported through queries instead.

use std::fmt;

use thiserror::Error;

use crate::ids::{AxisId, ClassId, ClassValueId, RuleId, ValueId, WordId};
use crate::slot::SlotId;

/// Result alias used throughout Paradigm.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Paradigm operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a malformed rule pattern error.
    #[must_use]
    pub fn malformed_regex(
        rule: impl Into<String>,
        slot: SlotId,
        pattern: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::MalformedRuleRegex {
            rule: rule.into(),
            slot,
            pattern: pattern.into(),
            message: message.into(),
        })
    }

    /// Creates an axis not found error.
    #[must_use]
    pub fn axis_not_found(axis: AxisId) -> Self {
        Self::new(ErrorKind::AxisNotFound(axis))
    }

    /// Creates a value not found error.
    #[must_use]
    pub fn value_not_found(axis: AxisId, value: ValueId) -> Self {
        Self::new(ErrorKind::ValueNotFound { axis, value })
    }

    /// Creates a word not found error.
    #[must_use]
    pub fn word_not_found(word: WordId) -> Self {
        Self::new(ErrorKind::WordNotFound(word))
    }

    /// Creates a rule not found error.
    #[must_use]
    pub fn rule_not_found(rule: RuleId) -> Self {
        Self::new(ErrorKind::RuleNotFound(rule))
    }

    /// Creates an instance not found error.
    #[must_use]
    pub fn instance_not_found(word: WordId, slot: SlotId) -> Self {
        Self::new(ErrorKind::InstanceNotFound { word, slot })
    }

    /// Returns true if this error reports a malformed rule pattern.
    #[must_use]
    pub fn is_malformed_regex(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedRuleRegex { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A rule's trigger or transform pattern failed to compile.
    #[error(
        "malformed pattern in rule '{rule}' for slot {slot}: \"{pattern}\": {message} \
         (repair the rule before generating this form)"
    )]
    MalformedRuleRegex {
        /// Name of the offending rule.
        rule: String,
        /// Slot the rule targets.
        slot: SlotId,
        /// The pattern text that failed.
        pattern: String,
        /// The regex engine's diagnostic.
        message: String,
    },

    /// A sound-change pattern failed to compile.
    #[error("invalid pattern \"{pattern}\": {message}")]
    InvalidPattern {
        /// The pattern text that failed.
        pattern: String,
        /// The regex engine's diagnostic.
        message: String,
    },

    /// Axis does not exist.
    #[error("axis not found: {0}")]
    AxisNotFound(AxisId),

    /// Value does not exist on the axis.
    #[error("value {value} not found on {axis}")]
    ValueNotFound {
        /// The axis that was searched.
        axis: AxisId,
        /// The missing value.
        value: ValueId,
    },

    /// Singleton axes carry exactly one synthetic value.
    #[error("{0} is a singleton axis and cannot hold values")]
    SingletonAxis(AxisId),

    /// Word is not in the lexicon.
    #[error("word not found: {0}")]
    WordNotFound(WordId),

    /// Rule is not in the rule store.
    #[error("rule not found: {0}")]
    RuleNotFound(RuleId),

    /// Word class is not registered.
    #[error("word class not found: {0}")]
    ClassNotFound(ClassId),

    /// Word class value is not registered.
    #[error("value {value} not found in {class}")]
    ClassValueNotFound {
        /// The class that was searched.
        class: ClassId,
        /// The missing value.
        value: ClassValueId,
    },

    /// No stored form exists for the word and slot.
    #[error("no stored form for {word} in slot {slot}")]
    InstanceNotFound {
        /// The word.
        word: WordId,
        /// The slot.
        slot: SlotId,
    },

    /// A stored form already occupies the slot.
    #[error("slot {slot} of {word} already holds a stored form")]
    SlotOccupied {
        /// The word.
        word: WordId,
        /// The occupied slot.
        slot: SlotId,
    },

    /// A slot identifier could not be interpreted.
    #[error("invalid slot identifier: {0:?}")]
    InvalidSlot(String),

    /// A persisted suppression key is not of the form `pos,slot`.
    #[error("invalid suppression key: {0:?}")]
    InvalidSuppressionKey(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// File I/O failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// The document was written by an incompatible format version.
    #[error("unsupported document format {found} (this build reads up to {supported})")]
    UnsupportedFormat {
        /// Version found in the document.
        found: u32,
        /// Highest version this build understands.
        supported: u32,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Headword, document path, or other origin of the failing operation.
    pub source: Option<String>,
    /// Stack of rules/operations that were active.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source description.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "while processing {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
