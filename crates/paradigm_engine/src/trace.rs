//! Per-call generation traces.
//!
//! A trace lists every rule that targeted the requested slot, in evaluation
//! order, with why it was skipped or what each of its transforms did. Traces
//! are returned to the caller; they are never stored.

use std::fmt;

use paradigm_foundation::{ClassId, ClassValueId, RuleId, SlotId};

/// One transform application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformStep {
    /// Pattern searched for.
    pub pattern: String,
    /// Replacement as written on the rule.
    pub replacement: String,
    /// Working form before the rewrite.
    pub before: String,
    /// Working form after the rewrite.
    pub after: String,
}

impl TransformStep {
    /// Returns true if the rewrite changed the working form.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Why a rule did not fire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The trigger did not match the whole headword.
    PatternMismatch,
    /// The word lacks a required class value.
    ClassMismatch {
        /// Required class.
        class: ClassId,
        /// Required value.
        required: ClassValueId,
        /// The word's value for the class, if any.
        actual: Option<ClassValueId>,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PatternMismatch => f.write_str("pattern does not match headword"),
            Self::ClassMismatch {
                class,
                required,
                actual: Some(actual),
            } => write!(f, "{class} requires {required}, word has {actual}"),
            Self::ClassMismatch {
                class,
                required,
                actual: None,
            } => write!(f, "{class} requires {required}, word has none"),
        }
    }
}

/// What happened to one rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The rule fired.
    Applied {
        /// Each transform in order.
        transforms: Vec<TransformStep>,
    },
    /// The rule was skipped.
    Skipped(SkipReason),
}

impl RuleOutcome {
    /// Returns a short tag for the outcome.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Applied { .. } => "applied",
            Self::Skipped(_) => "skipped",
        }
    }

    /// Returns true if the rule fired.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// One rule considered during generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceStep {
    /// The rule.
    pub rule: RuleId,
    /// Rule name (or trigger, if unnamed).
    pub name: String,
    /// Position within the part of speech's ordering.
    pub index: u32,
    /// Result.
    pub outcome: RuleOutcome,
    /// Class requirements that were ignored because they no longer validate.
    pub waived: Vec<(ClassId, ClassValueId)>,
}

/// Everything one generation call did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationTrace {
    /// The original headword.
    pub headword: String,
    /// The requested slot.
    pub slot: SlotId,
    /// Rules in evaluation order.
    pub steps: Vec<TraceStep>,
}

impl GenerationTrace {
    /// Starts an empty trace.
    #[must_use]
    pub fn new(headword: impl Into<String>, slot: SlotId) -> Self {
        Self {
            headword: headword.into(),
            slot,
            steps: Vec::new(),
        }
    }

    /// Appends a step.
    pub fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    /// Returns the number of rules that fired.
    #[must_use]
    pub fn applied_count(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_applied()).count()
    }

    /// Returns the number of rules that were skipped.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.steps.len() - self.applied_count()
    }

    /// Returns true if no rule targeted the slot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
