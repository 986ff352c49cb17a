//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for generation traces.

use std::fmt::Write;

use paradigm_engine::{GenerationTrace, RuleOutcome, SkipReason, TraceStep, TransformStep};
use serde_json::{Value, json};

use crate::config::DebugConfig;

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting generation traces.
pub trait TraceFormatter {
    /// Formats a single trace to a string.
    fn format(&self, trace: &GenerationTrace) -> String;

    /// Formats multiple traces.
    fn format_many(&self, traces: &[&GenerationTrace]) -> String {
        traces
            .iter()
            .map(|t| self.format(t))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats traces as indented text.
#[derive(Clone, Debug)]
pub struct HumanFormatter {
    /// Whether to list each transform under a fired rule.
    pub show_transforms: bool,
    /// Whether to list skipped rules.
    pub show_skipped: bool,
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self {
            show_transforms: true,
            show_skipped: true,
        }
    }
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter from a debug configuration.
    #[must_use]
    pub fn from_config(config: &DebugConfig) -> Self {
        Self {
            show_transforms: config.show_transforms,
            show_skipped: config.show_skipped,
        }
    }

    /// Builder method to hide transform detail.
    #[must_use]
    pub fn without_transforms(mut self) -> Self {
        self.show_transforms = false;
        self
    }

    /// Builder method to hide skipped rules.
    #[must_use]
    pub fn without_skipped(mut self) -> Self {
        self.show_skipped = false;
        self
    }

    fn write_step(&self, out: &mut String, step: &TraceStep) {
        match &step.outcome {
            RuleOutcome::Applied { transforms } => {
                let _ = writeln!(out, "  [{}] {} APPLIED", step.index, step.name);
                if self.show_transforms {
                    for t in transforms {
                        let _ = writeln!(
                            out,
                            "      {} -> {}: {} => {}",
                            t.pattern, t.replacement, t.before, t.after
                        );
                    }
                }
            }
            RuleOutcome::Skipped(reason) => {
                if self.show_skipped {
                    let _ = writeln!(out, "  [{}] {} SKIPPED ({reason})", step.index, step.name);
                }
            }
        }
        if !step.waived.is_empty() && (step.outcome.is_applied() || self.show_skipped) {
            let waived: Vec<String> = step
                .waived
                .iter()
                .map(|(class, value)| format!("{class}={value}"))
                .collect();
            let _ = writeln!(out, "      waived stale requirements: {}", waived.join(", "));
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, trace: &GenerationTrace) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "decline \"{}\" @ {}", trace.headword, trace.slot);
        if trace.is_empty() {
            out.push_str("  (no rules target this slot)\n");
        }
        for step in &trace.steps {
            self.write_step(&mut out, step);
        }
        out.truncate(out.trim_end().len());
        out
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats traces as JSON.
///
/// Each trace becomes an object with `headword`, `slot` and `steps`. Keys
/// within an object are written in sorted order.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print JSON.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Converts a trace to a JSON value.
    #[must_use]
    pub fn to_value(trace: &GenerationTrace) -> Value {
        let steps: Vec<Value> = trace.steps.iter().map(Self::step_value).collect();
        json!({
            "headword": trace.headword,
            "slot": trace.slot.as_str(),
            "steps": steps,
        })
    }

    fn transform_value(t: &TransformStep) -> Value {
        json!({
            "pattern": t.pattern,
            "replacement": t.replacement,
            "before": t.before,
            "after": t.after,
        })
    }

    fn reason_value(reason: &SkipReason) -> Value {
        match reason {
            SkipReason::PatternMismatch => json!({ "reason": "pattern_mismatch" }),
            SkipReason::ClassMismatch {
                class,
                required,
                actual,
            } => json!({
                "reason": "class_mismatch",
                "class": class.get(),
                "required": required.get(),
                "actual": actual.map(|v| v.get()),
            }),
        }
    }

    fn step_value(step: &TraceStep) -> Value {
        let waived: Vec<Value> = step
            .waived
            .iter()
            .map(|(class, value)| json!({ "class": class.get(), "value": value.get() }))
            .collect();
        let mut object = json!({
            "rule": step.rule.get(),
            "name": step.name,
            "index": step.index,
            "type": step.outcome.event_type(),
            "waived": waived,
        });
        match &step.outcome {
            RuleOutcome::Applied { transforms } => {
                let transforms: Vec<Value> =
                    transforms.iter().map(Self::transform_value).collect();
                object["transforms"] = Value::Array(transforms);
            }
            RuleOutcome::Skipped(reason) => object["skip"] = Self::reason_value(reason),
        }
        object
    }

    fn render(&self, value: &Value) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        // A `Value` always serializes.
        rendered.unwrap_or_default()
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, trace: &GenerationTrace) -> String {
        self.render(&Self::to_value(trace))
    }

    fn format_many(&self, traces: &[&GenerationTrace]) -> String {
        let items = traces.iter().map(|t| Self::to_value(t)).collect();
        self.render(&Value::Array(items))
    }
}

// =============================================================================
// Tests
// =============================================================================
