//! Form generation.
//!
//! [`FormGenerator::decline`] runs the rules of a word's part of speech
//! against its headword for one slot:
//!
//! 1. No rules at all for the part of speech: the form is empty.
//! 2. Otherwise the working form starts as the headword.
//! 3. Each rule targeting the slot, in index order, fires if its class filter
//!    holds and its trigger matches the whole *original* headword. A firing
//!    rule rewrites the working form with each transform in turn.
//!
//! A part of speech with rules, none of which target the slot, therefore
//! yields the headword unchanged. Stored data depends on this.
//!
//! Any pattern the regex engine rejects aborts the call, as does replacement
//! text that refers to a missing group in a transform that matched. No partial
//! form is returned.

use paradigm_foundation::{ClassId, ClassValueId, ErrorContext, Result, SlotId};
use paradigm_storage::{Word, WordClasses};

use crate::pattern::{compile_replacement, compile_transform, compile_trigger};
use crate::rule::store::RuleStore;
use crate::rule::{ClassFilter, Rule};
use crate::trace::{GenerationTrace, RuleOutcome, SkipReason, TraceStep, TransformStep};

// =============================================================================
// Configuration
// =============================================================================

/// Generator settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Build a [`GenerationTrace`] for each call.
    pub collect_trace: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            collect_trace: true,
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that skips tracing.
    #[must_use]
    pub fn untraced() -> Self {
        Self {
            collect_trace: false,
        }
    }

    /// Sets whether traces are collected.
    #[must_use]
    pub fn with_trace(mut self, collect_trace: bool) -> Self {
        self.collect_trace = collect_trace;
        self
    }
}

// =============================================================================
// Result
// =============================================================================

/// Where a form came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormSource {
    /// Produced by the rules (possibly the unchanged headword).
    Generated,
    /// Read from the instance store.
    Override,
    /// The part of speech has no rules; the form is empty.
    Absent,
}

/// The outcome of one generation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    /// Surface form.
    pub form: String,
    /// Origin of the form.
    pub source: FormSource,
    /// Trace, when collected.
    pub trace: Option<GenerationTrace>,
}

impl Generation {
    /// Builds a generation for a form read from the instance store.
    #[must_use]
    pub fn from_override(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            source: FormSource::Override,
            trace: None,
        }
    }
}

// =============================================================================
// Generator
// =============================================================================

/// Class requirements ignored because they no longer validate.
type Waived = Vec<(ClassId, ClassValueId)>;

/// Runs rules against headwords.
pub struct FormGenerator<'a> {
    rules: &'a RuleStore,
    classes: &'a dyn WordClasses,
    config: GeneratorConfig,
}

impl<'a> FormGenerator<'a> {
    /// Creates a generator over a rule snapshot and a class system.
    #[must_use]
    pub fn new(rules: &'a RuleStore, classes: &'a dyn WordClasses) -> Self {
        Self {
            rules,
            classes,
            config: GeneratorConfig::default(),
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Produces the form of `word` for `slot`.
    ///
    /// # Errors
    /// Returns [`paradigm_foundation::ErrorKind::MalformedRuleRegex`] if a
    /// trigger or transform pattern of a considered rule does not compile.
    pub fn decline(&self, word: &Word, slot: &SlotId) -> Result<Generation> {
        let rules = self.rules.rules_for_word(word);
        let mut trace = self
            .config
            .collect_trace
            .then(|| GenerationTrace::new(word.value.clone(), slot.clone()));

        if rules.is_empty() {
            return Ok(Generation {
                form: String::new(),
                source: FormSource::Absent,
                trace,
            });
        }

        let class_axes = self.classes.class_axes_for(word.pos);
        let mut output = word.value.clone();
        for (id, rule) in rules.iter().filter(|(_, rule)| rule.slot == *slot) {
            let step = self
                .apply(rule, word, class_axes.is_empty(), &mut output)
                .map_err(|err| {
                    tracing::warn!(
                        rule = rule.display_name(),
                        %slot,
                        headword = %word.value,
                        "generation aborted by malformed pattern"
                    );
                    let context = ErrorContext::new()
                        .with_source(word.value.clone())
                        .with_frame(format!("rule {}", rule.display_name()))
                        .with_frame(format!("slot {slot}"));
                    err.with_context(context)
                })?;
            if let Some(trace) = trace.as_mut() {
                let (outcome, waived) = step;
                trace.push(TraceStep {
                    rule: *id,
                    name: rule.display_name().to_string(),
                    index: rule.index.unwrap_or_default(),
                    outcome,
                    waived,
                });
            }
        }

        Ok(Generation {
            form: output,
            source: FormSource::Generated,
            trace,
        })
    }

    /// Evaluates one rule, rewriting `output` if it fires.
    fn apply(
        &self,
        rule: &Rule,
        word: &Word,
        classless: bool,
        output: &mut String,
    ) -> Result<(RuleOutcome, Waived)> {
        let mut waived = Vec::new();
        if let (ClassFilter::Requires(required), false) = (&rule.filter, classless) {
            for (&class, &value) in required {
                if !self.classes.is_valid_class_value(class, value) {
                    waived.push((class, value));
                    continue;
                }
                let actual = word.class_value(class);
                if actual != Some(value) {
                    let reason = SkipReason::ClassMismatch {
                        class,
                        required: value,
                        actual,
                    };
                    return Ok((RuleOutcome::Skipped(reason), waived));
                }
            }
        }

        let trigger =
            compile_trigger(&rule.pattern).map_err(|e| rule.malformed(&rule.pattern, &e))?;
        if !trigger.is_match(&word.value) {
            return Ok((RuleOutcome::Skipped(SkipReason::PatternMismatch), waived));
        }

        let mut transforms = Vec::with_capacity(rule.transforms.len());
        for transform in &rule.transforms {
            let regex = compile_transform(&transform.pattern)
                .map_err(|e| rule.malformed(&transform.pattern, &e))?;
            // Replacement text is only checked once the transform matches.
            let after = if regex.is_match(output.as_str()) {
                let replacement = compile_replacement(&transform.replacement, &regex)
                    .map_err(|e| rule.malformed(&transform.replacement, &e))?;
                regex
                    .replace_all(output.as_str(), replacement.as_str())
                    .into_owned()
            } else {
                output.clone()
            };
            if self.config.collect_trace {
                transforms.push(TransformStep {
                    pattern: transform.pattern.clone(),
                    replacement: transform.replacement.clone(),
                    before: output.clone(),
                    after: after.clone(),
                });
            }
            *output = after;
        }
        Ok((RuleOutcome::Applied { transforms }, waived))
    }
}
