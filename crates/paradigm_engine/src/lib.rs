//! Slot enumeration, ordered regex rules, and form generation for Paradigm.
//!
//! This crate provides:
//! - [`SlotEnumerator`] - Every addressable slot of a part of speech, with labels
//! - [`RuleStore`] - Ordered rules keyed by (part of speech, slot)
//! - [`FormGenerator`] - Runs the rules against a headword, with a trace
//! - [`evolve`] - Sound-change application to stored forms and rule transforms

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod enumerate;
pub mod evolve;
pub mod generate;
pub mod pattern;
pub mod rule;
pub mod trace;

pub use enumerate::{SlotEntry, SlotEnumerator, SlotKind};
pub use evolve::{
    EvolutionKind, EvolutionRecord, ReplaceScope, evolve_rules, evolve_saved_forms,
    scoped_replace,
};
pub use generate::{FormGenerator, FormSource, Generation, GeneratorConfig};
pub use pattern::{compile_replacement, compile_transform, compile_trigger, ReplacementError};
pub use rule::store::{InvalidClassFilter, RuleStore};
pub use rule::{ClassFilter, Rule, Transform};
pub use trace::{GenerationTrace, RuleOutcome, SkipReason, TraceStep, TransformStep};
