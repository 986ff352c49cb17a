//! Schema consistency reports.
//!
//! After axes, values, or classes change, some stored data may no longer fit
//! the schema. Nothing is deleted automatically; this report lists what needs
//! attention for one part of speech.

use std::fmt::{self, Write};

use paradigm_engine::{InvalidClassFilter, RuleStore, SlotEnumerator};
use paradigm_foundation::{PosId, RuleId, SlotId, WordId};
use paradigm_storage::{InstanceStore, WordClasses};

/// A rule whose slot no longer exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrphanedRule {
    /// The rule.
    pub rule: RuleId,
    /// Its display name.
    pub name: String,
    /// The slot it targets.
    pub slot: SlotId,
}

/// Stored forms of one word that no longer map to a live slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeprecatedForms {
    /// The word.
    pub word: WordId,
    /// Stored slot identifiers outside the valid set.
    pub slots: Vec<SlotId>,
}

/// Everything out of step with the schema for one part of speech.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// The part of speech examined.
    pub pos: PosId,
    /// Rules targeting slots that no longer exist.
    pub orphaned_rules: Vec<OrphanedRule>,
    /// Words holding stored forms outside the valid slot set.
    pub deprecated_forms: Vec<DeprecatedForms>,
    /// Class requirements that no longer validate.
    pub invalid_filters: Vec<InvalidClassFilter>,
}

impl ConsistencyReport {
    /// Examines one part of speech.
    ///
    /// `words` are the words of the part of speech. Unindexed rules of the part
    /// of speech receive trailing indices as a side effect.
    pub fn collect(
        pos: PosId,
        enumerator: &SlotEnumerator<'_>,
        rules: &mut RuleStore,
        instances: &InstanceStore,
        words: impl IntoIterator<Item = WordId>,
        classes: &dyn WordClasses,
    ) -> Self {
        let valid = enumerator.valid_slots(pos);
        let orphaned_rules = rules
            .find_orphaned(pos, &valid)
            .into_iter()
            .filter_map(|id| {
                rules.get(id).map(|rule| OrphanedRule {
                    rule: id,
                    name: rule.display_name().to_string(),
                    slot: rule.slot.clone(),
                })
            })
            .collect();
        let deprecated_forms = words
            .into_iter()
            .filter_map(|word| {
                let slots = instances.deprecated_forms(word, &valid);
                (!slots.is_empty()).then_some(DeprecatedForms { word, slots })
            })
            .collect();
        let invalid_filters = rules.invalid_class_filters(pos, classes);

        Self {
            pos,
            orphaned_rules,
            deprecated_forms,
            invalid_filters,
        }
    }

    /// Returns true if nothing needs attention.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }

    /// Returns the number of individual issues.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.orphaned_rules.len()
            + self
                .deprecated_forms
                .iter()
                .map(|d| d.slots.len())
                .sum::<usize>()
            + self.invalid_filters.len()
    }

    /// Returns a multi-line summary for people.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = String::new();
        if self.is_clean() {
            let _ = write!(out, "{}: consistent", self.pos);
            return out;
        }
        let _ = writeln!(out, "{}: {} issue(s)", self.pos, self.issue_count());
        for orphan in &self.orphaned_rules {
            let _ = writeln!(
                out,
                "  orphaned rule {} ({}) targets missing slot {}",
                orphan.name, orphan.rule, orphan.slot
            );
        }
        for deprecated in &self.deprecated_forms {
            let slots: Vec<&str> = deprecated.slots.iter().map(SlotId::as_str).collect();
            let _ = writeln!(
                out,
                "  {} has deprecated forms: {}",
                deprecated.word,
                slots.join(" ")
            );
        }
        for filter in &self.invalid_filters {
            let _ = writeln!(
                out,
                "  {} requires {}={} which no longer exists",
                filter.rule, filter.class, filter.value
            );
        }
        out.truncate(out.trim_end().len());
        out
    }
}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
