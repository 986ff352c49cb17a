//! Axis model, instance overrides, suppression, and lexicon collaborators for Paradigm.
//!
//! This crate provides:
//! - [`AxisModel`] - Ordered grammatical axes and their values, per part of speech
//! - [`InstanceStore`] - Literal per-word forms, with deprecation tombstones
//! - [`SuppressionRegistry`] - Hide flags on (part of speech, slot) pairs
//! - [`Lexicon`] / [`WordClasses`] - Interfaces to the surrounding dictionary,
//!   with in-memory implementations ([`MemoryLexicon`], [`ClassRegistry`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod axis;
pub mod classes;
pub mod instance;
pub mod lexicon;
pub mod suppression;

pub use axis::{Axis, AxisModel, AxisValue, SINGLETON_VALUE_LABEL};
pub use classes::{ClassRegistry, WordClass, WordClasses};
pub use instance::{Instance, InstanceStore};
pub use lexicon::{Lexicon, MemoryLexicon, OverrideMode, Word};
pub use suppression::SuppressionRegistry;
