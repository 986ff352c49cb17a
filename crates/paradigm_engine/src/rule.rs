//! Generation rules.
//!
//! A rule targets one (part of speech, slot) pair. It fires when its trigger
//! matches the whole original headword and its class filter holds, and then
//! rewrites the working form with its transforms in order.

pub mod store;

use std::collections::BTreeMap;
use std::fmt;

use paradigm_foundation::{ClassId, ClassValueId, Error, PosId, Result, SlotId};

use crate::pattern::{compile_replacement, compile_transform, compile_trigger};

/// Trigger used when none is given.
pub const MATCH_ANY: &str = ".*";

// =============================================================================
// Transform
// =============================================================================

/// One regex rewrite step.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transform {
    /// Pattern to search for.
    pub pattern: String,
    /// Replacement text (`$n` group references, `\` escapes).
    pub replacement: String,
}

impl Transform {
    /// Creates a transform.
    #[must_use]
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

// =============================================================================
// Class Filter
// =============================================================================

/// Word-class precondition of a rule.
///
/// The universal marker and specific requirements are mutually exclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClassFilter {
    /// Applies regardless of class.
    #[default]
    Universal,
    /// Applies only if the word carries every listed (class, value) pair.
    Requires(BTreeMap<ClassId, ClassValueId>),
}

impl ClassFilter {
    /// Builds a filter from requirements; an empty set is universal.
    #[must_use]
    pub fn from_requirements(requirements: BTreeMap<ClassId, ClassValueId>) -> Self {
        if requirements.is_empty() {
            Self::Universal
        } else {
            Self::Requires(requirements)
        }
    }

    /// Adds a requirement, dropping the universal marker.
    pub fn require(&mut self, class: ClassId, value: ClassValueId) {
        match self {
            Self::Universal => {
                *self = Self::Requires(BTreeMap::from([(class, value)]));
            }
            Self::Requires(map) => {
                map.insert(class, value);
            }
        }
    }

    /// Removes a requirement; the filter becomes universal once empty.
    pub fn release(&mut self, class: ClassId) {
        if let Self::Requires(map) = self {
            map.remove(&class);
            if map.is_empty() {
                *self = Self::Universal;
            }
        }
    }

    /// Returns true for the universal marker.
    #[must_use]
    pub fn is_universal(&self) -> bool {
        matches!(self, Self::Universal)
    }

    /// Returns the required pairs (empty for universal).
    pub fn requirements(&self) -> impl Iterator<Item = (ClassId, ClassValueId)> + '_ {
        let map = match self {
            Self::Universal => None,
            Self::Requires(map) => Some(map),
        };
        map.into_iter()
            .flat_map(|m| m.iter().map(|(class, value)| (*class, *value)))
    }
}

// =============================================================================
// Rule
// =============================================================================

/// A generation rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Part of speech the rule belongs to.
    pub pos: PosId,
    /// Slot the rule targets.
    pub slot: SlotId,
    /// Position within the part of speech's ordering; assigned on insert if unset.
    pub index: Option<u32>,
    /// Human name shown in traces and errors.
    pub name: String,
    /// Trigger matched against the whole original headword.
    pub pattern: String,
    /// Rewrites applied in order.
    pub transforms: Vec<Transform>,
    /// Class precondition.
    pub filter: ClassFilter,
}

impl Rule {
    /// Creates a rule that matches every headword and does nothing.
    #[must_use]
    pub fn new(pos: PosId, slot: SlotId) -> Self {
        Self {
            pos,
            slot,
            index: None,
            name: String::new(),
            pattern: MATCH_ANY.to_string(),
            transforms: Vec::new(),
            filter: ClassFilter::Universal,
        }
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the trigger.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Appends a transform.
    #[must_use]
    pub fn with_transform(
        mut self,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.transforms.push(Transform::new(pattern, replacement));
        self
    }

    /// Adds a class requirement.
    #[must_use]
    pub fn with_class(mut self, class: ClassId, value: ClassValueId) -> Self {
        self.filter.require(class, value);
        self
    }

    /// Sets an explicit index.
    #[must_use]
    pub fn with_index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }

    /// Returns a copy targeting another slot, without an index.
    #[must_use]
    pub fn retarget(&self, slot: SlotId) -> Self {
        Self {
            slot,
            index: None,
            ..self.clone()
        }
    }

    /// Structural equality ignoring part of speech, slot, and index.
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.name == other.name
            && self.pattern == other.pattern
            && self.transforms == other.transforms
            && self.filter == other.filter
    }

    /// Name to show in messages; falls back to the trigger.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.pattern
        } else {
            &self.name
        }
    }

    /// Compiles the trigger and every transform, checking each replacement
    /// against its pattern's groups.
    ///
    /// # Errors
    /// Returns [`paradigm_foundation::ErrorKind::MalformedRuleRegex`] for the
    /// first pattern or replacement that fails.
    pub fn validate(&self) -> Result<()> {
        compile_trigger(&self.pattern).map_err(|e| self.malformed(&self.pattern, &e))?;
        for transform in &self.transforms {
            let regex = compile_transform(&transform.pattern)
                .map_err(|e| self.malformed(&transform.pattern, &e))?;
            compile_replacement(&transform.replacement, &regex)
                .map_err(|e| self.malformed(&transform.replacement, &e))?;
        }
        Ok(())
    }

    pub(crate) fn malformed(&self, pattern: &str, err: &impl fmt::Display) -> Error {
        Error::malformed_regex(
            self.display_name(),
            self.slot.clone(),
            pattern,
            err.to_string(),
        )
    }
}
