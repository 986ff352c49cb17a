//! The persisted document shape.
//!
//! A document is a plain snapshot of a session: per part of speech an ordered
//! list of axes, per word the stored literal forms keyed by slot, a flat rule
//! list where every rule carries its own (part of speech, slot, index), and a
//! flat suppression map keyed by `"pos,slot"` strings.
//!
//! Every collection is written in a canonical order, so exporting a freshly
//! imported document reproduces it exactly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use paradigm_engine::{ClassFilter, Rule, Transform};
use paradigm_foundation::{
    AxisId, ClassId, ClassValueId, Error, ErrorKind, PosId, Result, SlotId, WordId,
};
use paradigm_storage::{Axis, AxisValue, Instance, OverrideMode, Word, WordClass};

/// Highest document version this build reads and the version it writes.
pub const FORMAT_VERSION: u32 = 1;

// =============================================================================
// Document
// =============================================================================

/// A complete persisted session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Version of the layout below.
    pub format_version: u32,
    /// Axes grouped by part of speech, in ascending part-of-speech order.
    pub parts_of_speech: Vec<PosAxes>,
    /// Stored literal forms grouped by word.
    pub words: Vec<WordForms>,
    /// Every rule of every part of speech.
    pub rules: Vec<RuleRecord>,
    /// Hide flags keyed by `"pos,slot"`.
    pub suppressions: BTreeMap<String, bool>,
    /// Lexicon entries known to the session.
    #[serde(default)]
    pub lexicon: Vec<WordRecord>,
    /// Word classes known to the session.
    #[serde(default)]
    pub classes: Vec<ClassRecord>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            parts_of_speech: Vec::new(),
            words: Vec::new(),
            rules: Vec::new(),
            suppressions: BTreeMap::new(),
            lexicon: Vec::new(),
            classes: Vec::new(),
        }
    }
}

impl Document {
    /// Creates an empty document at the current format version.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects documents written by a newer build.
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnsupportedFormat`] if `format_version` is newer
    /// than [`FORMAT_VERSION`].
    pub fn check_version(&self) -> Result<()> {
        if self.format_version > FORMAT_VERSION {
            return Err(Error::new(ErrorKind::UnsupportedFormat {
                found: self.format_version,
                supported: FORMAT_VERSION,
            }));
        }
        Ok(())
    }

    /// Returns true if the document holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts_of_speech.is_empty()
            && self.words.is_empty()
            && self.rules.is_empty()
            && self.suppressions.is_empty()
            && self.lexicon.is_empty()
            && self.classes.is_empty()
    }
}

// =============================================================================
// Axes
// =============================================================================

/// The axes of one part of speech, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosAxes {
    /// Part of speech.
    pub pos: PosId,
    /// Axes in insertion order.
    pub axes: Vec<AxisRecord>,
}

/// One persisted axis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRecord {
    /// Axis identifier.
    pub id: AxisId,
    /// Display label.
    pub label: String,
    /// Whether the axis contributes a standalone slot.
    pub singleton: bool,
    /// Values in order; a singleton axis holds its synthetic value.
    pub values: Vec<AxisValue>,
}

impl From<&Axis> for AxisRecord {
    fn from(axis: &Axis) -> Self {
        Self {
            id: axis.id,
            label: axis.label.clone(),
            singleton: axis.is_singleton(),
            values: axis.values().to_vec(),
        }
    }
}

impl AxisRecord {
    /// Rebuilds the axis for `pos`, together with the values still to insert.
    ///
    /// A singleton record that lost its synthetic value comes back as an empty
    /// dimensional axis; switching it with `AxisModel::set_singleton` restores it.
    #[must_use]
    pub fn into_axis(self, pos: PosId) -> (Axis, Vec<AxisValue>) {
        match (self.singleton, self.values.first()) {
            (true, Some(value)) => {
                let value = value.id;
                (Axis::singleton(self.id, pos, self.label, value), Vec::new())
            }
            (true, None) => (Axis::new(self.id, pos, self.label), Vec::new()),
            (false, _) => (Axis::new(self.id, pos, self.label), self.values),
        }
    }
}

// =============================================================================
// Stored Forms
// =============================================================================

/// Stored literal forms of one word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordForms {
    /// The word.
    pub word: WordId,
    /// Forms in slot order, deprecated ones included.
    pub forms: Vec<Instance>,
}

// =============================================================================
// Rules
// =============================================================================

/// One persisted rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    /// Part of speech.
    pub pos: PosId,
    /// Target slot.
    pub slot: SlotId,
    /// Position within the part of speech; absent in older documents.
    pub index: Option<u32>,
    /// Human name.
    pub name: String,
    /// Trigger.
    pub pattern: String,
    /// Rewrites in order.
    pub transforms: Vec<TransformRecord>,
    /// Class requirements; empty means the rule applies to every class.
    pub required_classes: Vec<ClassRequirement>,
}

/// One persisted transform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRecord {
    /// Pattern to search for.
    pub pattern: String,
    /// Replacement text.
    pub replacement: String,
}

/// A (class, value) precondition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRequirement {
    /// The class.
    pub class: ClassId,
    /// The required value.
    pub value: ClassValueId,
}

impl From<&Rule> for RuleRecord {
    fn from(rule: &Rule) -> Self {
        Self {
            pos: rule.pos,
            slot: rule.slot.clone(),
            index: rule.index,
            name: rule.name.clone(),
            pattern: rule.pattern.clone(),
            transforms: rule
                .transforms
                .iter()
                .map(|t| TransformRecord {
                    pattern: t.pattern.clone(),
                    replacement: t.replacement.clone(),
                })
                .collect(),
            required_classes: rule
                .filter
                .requirements()
                .map(|(class, value)| ClassRequirement { class, value })
                .collect(),
        }
    }
}

impl From<RuleRecord> for Rule {
    fn from(record: RuleRecord) -> Self {
        let requirements: BTreeMap<ClassId, ClassValueId> = record
            .required_classes
            .iter()
            .map(|r| (r.class, r.value))
            .collect();
        Self {
            pos: record.pos,
            slot: record.slot,
            index: record.index,
            name: record.name,
            pattern: record.pattern,
            transforms: record
                .transforms
                .into_iter()
                .map(|t| Transform::new(t.pattern, t.replacement))
                .collect(),
            filter: ClassFilter::from_requirements(requirements),
        }
    }
}

// =============================================================================
// Lexicon & Classes
// =============================================================================

/// One persisted lexicon entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Word identifier.
    pub id: WordId,
    /// Headword.
    pub value: String,
    /// Part of speech.
    pub pos: PosId,
    /// Class assignments.
    pub classes: Vec<ClassRequirement>,
    /// Generation opt-out.
    #[serde(default)]
    pub overrides: OverrideMode,
}

impl From<&Word> for WordRecord {
    fn from(word: &Word) -> Self {
        Self {
            id: word.id,
            value: word.value.clone(),
            pos: word.pos,
            classes: word
                .classes
                .iter()
                .map(|(class, value)| ClassRequirement {
                    class: *class,
                    value: *value,
                })
                .collect(),
            overrides: word.overrides.clone(),
        }
    }
}

impl From<WordRecord> for Word {
    fn from(record: WordRecord) -> Self {
        let mut word = Word::new(record.id, record.value, record.pos).with_overrides(record.overrides);
        for assignment in record.classes {
            word = word.with_class(assignment.class, assignment.value);
        }
        word
    }
}

/// One persisted word class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Class identifier.
    pub id: ClassId,
    /// Display label.
    pub label: String,
    /// Parts of speech the class applies to; empty for all.
    pub applies_to: Vec<PosId>,
    /// Values in order.
    pub values: Vec<ClassValueRecord>,
}

/// One value of a word class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassValueRecord {
    /// Value identifier.
    pub id: ClassValueId,
    /// Display label.
    pub label: String,
}

impl From<&WordClass> for ClassRecord {
    fn from(class: &WordClass) -> Self {
        Self {
            id: class.id,
            label: class.label.clone(),
            applies_to: class.applies_to.iter().copied().collect(),
            values: class
                .values
                .iter()
                .map(|(id, label)| ClassValueRecord {
                    id: *id,
                    label: label.clone(),
                })
                .collect(),
        }
    }
}

impl From<ClassRecord> for WordClass {
    fn from(record: ClassRecord) -> Self {
        Self {
            id: record.id,
            label: record.label,
            applies_to: record.applies_to.into_iter().collect(),
            values: record
                .values
                .into_iter()
                .map(|v| (v.id, v.label))
                .collect(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
