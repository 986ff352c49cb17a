//! The editing session.
//!
//! A [`Session`] owns every store of one document (axes, rules, stored forms,
//! suppression flags, lexicon, word classes) and is the single place where
//! edits that span several stores happen: structural axis edits tombstone
//! stored forms, class-value removal clears word assignments, and rule edits
//! are checked according to [`SessionConfig::edit_validation`].

use std::path::Path;

use paradigm_debug::{ConsistencyReport, formatter_for};
use paradigm_engine::{
    EvolutionRecord, FormGenerator, Generation, GenerationTrace, ReplaceScope, Rule, RuleStore,
    SlotEntry, SlotEnumerator, evolve_rules, evolve_saved_forms,
};
use paradigm_foundation::{
    AxisId, ClassId, ClassValueId, Error, ErrorKind, PosId, Result, RuleId, SlotId, ValueId,
    WordId,
};
use paradigm_storage::{
    Axis, AxisModel, AxisValue, ClassRegistry, Instance, InstanceStore, Lexicon, MemoryLexicon,
    OverrideMode, SuppressionRegistry, Word, WordClasses,
};

use crate::config::{EditValidation, SessionConfig};
use crate::document::{AxisRecord, ClassRecord, Document, PosAxes, RuleRecord, WordForms, WordRecord};
use crate::serialize;

/// Everything one editing session works on.
#[derive(Clone, Debug, Default)]
pub struct Session {
    axes: AxisModel,
    rules: RuleStore,
    instances: InstanceStore,
    suppression: SuppressionRegistry,
    lexicon: MemoryLexicon,
    classes: ClassRegistry,
    config: SessionConfig,
}

impl Session {
    /// Creates an empty session with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session with the given configuration.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: SessionConfig) {
        self.config = config;
    }

    /// Returns the axis model.
    #[must_use]
    pub fn axes(&self) -> &AxisModel {
        &self.axes
    }

    /// Returns the rule store.
    #[must_use]
    pub fn rules(&self) -> &RuleStore {
        &self.rules
    }

    /// Returns the stored forms.
    #[must_use]
    pub fn instances(&self) -> &InstanceStore {
        &self.instances
    }

    /// Returns the suppression flags.
    #[must_use]
    pub fn suppression(&self) -> &SuppressionRegistry {
        &self.suppression
    }

    /// Returns the lexicon.
    #[must_use]
    pub fn lexicon(&self) -> &MemoryLexicon {
        &self.lexicon
    }

    /// Returns the word classes.
    #[must_use]
    pub fn classes(&self) -> &ClassRegistry {
        &self.classes
    }

    /// Returns an enumerator over the current axes.
    #[must_use]
    pub fn enumerator(&self) -> SlotEnumerator<'_> {
        SlotEnumerator::new(&self.axes)
    }

    // =========================================================================
    // Axes
    // =========================================================================

    /// Adds a dimensional axis. Stored forms of the part of speech are deprecated.
    pub fn add_axis(&mut self, pos: PosId, label: impl Into<String>) -> AxisId {
        let id = self.axes.add_axis(pos, label);
        self.deprecate_all(pos);
        id
    }

    /// Adds a singleton axis. Stored forms of the part of speech are deprecated.
    pub fn add_singleton_axis(&mut self, pos: PosId, label: impl Into<String>) -> AxisId {
        let id = self.axes.add_singleton_axis(pos, label);
        self.deprecate_all(pos);
        id
    }

    /// Removes an axis. Stored forms of its part of speech are deprecated.
    ///
    /// # Errors
    /// Returns [`ErrorKind::AxisNotFound`] if the axis does not exist.
    pub fn remove_axis(&mut self, axis: AxisId) -> Result<Axis> {
        let removed = self.axes.remove_axis(axis)?;
        self.deprecate_all(removed.pos);
        Ok(removed)
    }

    /// Renames an axis.
    ///
    /// # Errors
    /// Returns [`ErrorKind::AxisNotFound`] if the axis does not exist.
    pub fn rename_axis(&mut self, axis: AxisId, label: impl Into<String>) -> Result<()> {
        self.axes.rename_axis(axis, label)
    }

    /// Switches an axis between singleton and dimensional.
    ///
    /// An actual change of kind deprecates the part of speech's stored forms.
    ///
    /// # Errors
    /// Returns [`ErrorKind::AxisNotFound`] if the axis does not exist.
    pub fn set_singleton(&mut self, axis: AxisId, singleton: bool) -> Result<()> {
        let current = self.axes.axis(axis).ok_or_else(|| Error::axis_not_found(axis))?;
        let (pos, was_singleton) = (current.pos, current.is_singleton());
        self.axes.set_singleton(axis, singleton)?;
        if was_singleton != singleton {
            self.deprecate_all(pos);
        }
        Ok(())
    }

    /// Appends a value to an axis. Existing slot identifiers stay valid.
    ///
    /// # Errors
    /// Returns [`ErrorKind::AxisNotFound`] or [`ErrorKind::SingletonAxis`].
    pub fn add_value(&mut self, axis: AxisId, label: impl Into<String>) -> Result<ValueId> {
        self.axes.add_value(axis, label)
    }

    /// Removes a value. Stored forms of the part of speech are deprecated.
    ///
    /// # Errors
    /// Returns [`ErrorKind::AxisNotFound`] or [`ErrorKind::ValueNotFound`].
    pub fn remove_value(&mut self, axis: AxisId, value: ValueId) -> Result<AxisValue> {
        let pos = self
            .axes
            .axis(axis)
            .ok_or_else(|| Error::axis_not_found(axis))?
            .pos;
        let removed = self.axes.remove_value(axis, value)?;
        self.deprecate_all(pos);
        Ok(removed)
    }

    /// Renames a value.
    ///
    /// # Errors
    /// Returns [`ErrorKind::AxisNotFound`] or [`ErrorKind::ValueNotFound`].
    pub fn rename_value(
        &mut self,
        axis: AxisId,
        value: ValueId,
        label: impl Into<String>,
    ) -> Result<()> {
        self.axes.rename_value(axis, value, label)
    }

    /// Tombstones every live stored form of every word of `pos`.
    ///
    /// Only words in the lexicon are visited; forms of words missing from it
    /// are left alone (see [`Session::unlisted_words`]). Returns the number of
    /// forms re-keyed.
    pub fn deprecate_all(&mut self, pos: PosId) -> usize {
        let total: usize = self
            .lexicon
            .words_of_pos(pos)
            .into_iter()
            .map(|word| self.instances.deprecate_word(word))
            .sum();
        if total > 0 {
            tracing::info!(%pos, forms = total, "stored forms deprecated");
        }
        total
    }

    /// Words with stored forms that are missing from the lexicon.
    ///
    /// Their part of speech is unknown, so schema edits never deprecate them.
    #[must_use]
    pub fn unlisted_words(&self) -> Vec<WordId> {
        self.instances
            .words()
            .into_iter()
            .filter(|word| self.lexicon.word(*word).is_none())
            .collect()
    }

    // =========================================================================
    // Slots
    // =========================================================================

    /// Every slot of `pos`, grid cells first.
    #[must_use]
    pub fn all_slots(&self, pos: PosId) -> Vec<SlotEntry> {
        self.enumerator().all(pos)
    }

    /// Grid cells of `pos`.
    #[must_use]
    pub fn dimensional_slots(&self, pos: PosId) -> Vec<SlotEntry> {
        self.enumerator().dimensional(pos)
    }

    /// Standalone slots of `pos`.
    #[must_use]
    pub fn singleton_slots(&self, pos: PosId) -> Vec<SlotEntry> {
        self.enumerator().singletons(pos)
    }

    /// Slots of `pos` that are not suppressed.
    #[must_use]
    pub fn visible_slots(&self, pos: PosId) -> Vec<SlotEntry> {
        self.enumerator().visible(pos, &self.suppression)
    }

    /// Reconstructs the label of a slot.
    #[must_use]
    pub fn label_for(&self, pos: PosId, slot: &SlotId) -> Option<String> {
        self.enumerator().label_for(pos, slot)
    }

    /// Returns true if the slot is hidden.
    #[must_use]
    pub fn is_suppressed(&self, pos: PosId, slot: &SlotId) -> bool {
        self.suppression.is_suppressed(pos, slot)
    }

    /// Hides or shows a slot. Rules and stored forms of the slot are untouched.
    pub fn set_suppressed(&mut self, pos: PosId, slot: SlotId, suppressed: bool) {
        self.suppression.set_suppressed(pos, slot, suppressed);
    }

    // =========================================================================
    // Generation
    // =========================================================================

    /// Produces the form of a lexicon word for a slot.
    ///
    /// # Errors
    /// Returns [`ErrorKind::WordNotFound`] for unknown words and
    /// [`ErrorKind::MalformedRuleRegex`] if a considered rule does not compile.
    pub fn decline(&self, word: WordId, slot: &SlotId) -> Result<Generation> {
        let entry = self
            .lexicon
            .word(word)
            .ok_or_else(|| Error::word_not_found(word))?;
        self.decline_word(entry, slot)
    }

    /// Produces the form of any word for a slot.
    ///
    /// Slots the word opts out of answer from the stored forms, with an empty
    /// string when nothing is stored.
    ///
    /// # Errors
    /// Returns [`ErrorKind::MalformedRuleRegex`] if a considered rule does not compile.
    pub fn decline_word(&self, word: &Word, slot: &SlotId) -> Result<Generation> {
        if word.overrides.covers(slot) {
            let form = self
                .instances
                .get(word.id, slot)
                .map(|instance| instance.value.clone())
                .unwrap_or_default();
            return Ok(Generation::from_override(form));
        }
        FormGenerator::new(&self.rules, &self.classes)
            .with_config(self.config.generator)
            .decline(word, slot)
    }

    /// Renders a trace with the configured formatter.
    #[must_use]
    pub fn format_trace(&self, trace: &GenerationTrace) -> String {
        formatter_for(&self.config.debug).format(trace)
    }

    // =========================================================================
    // Rules
    // =========================================================================

    fn check_rule(&self, rule: &Rule) -> Result<()> {
        match self.config.edit_validation {
            EditValidation::Off => Ok(()),
            EditValidation::Warn => {
                if let Err(err) = rule.validate() {
                    tracing::warn!(
                        rule = rule.display_name(),
                        slot = %rule.slot,
                        error = %err,
                        "rule accepted with uncompilable pattern"
                    );
                }
                Ok(())
            }
            EditValidation::Reject => rule.validate(),
        }
    }

    /// Adds a rule at the end of its part of speech's ordering.
    ///
    /// # Errors
    /// Returns [`ErrorKind::MalformedRuleRegex`] only under
    /// [`EditValidation::Reject`].
    pub fn add_rule(&mut self, rule: Rule) -> Result<RuleId> {
        self.check_rule(&rule)?;
        Ok(self.rules.add(rule))
    }

    /// Replaces a rule's content, keeping its index unless a new one is given.
    ///
    /// # Errors
    /// Returns [`ErrorKind::RuleNotFound`], or [`ErrorKind::MalformedRuleRegex`]
    /// under [`EditValidation::Reject`].
    pub fn replace_rule(&mut self, id: RuleId, rule: Rule) -> Result<()> {
        self.check_rule(&rule)?;
        self.rules.replace(id, rule)
    }

    /// Deletes a rule.
    ///
    /// # Errors
    /// Returns [`ErrorKind::RuleNotFound`] if the rule does not exist.
    pub fn delete_rule(&mut self, id: RuleId) -> Result<Rule> {
        self.rules.delete(id)
    }

    /// Deletes every rule of a slot.
    pub fn delete_rules_for_slot(&mut self, pos: PosId, slot: &SlotId) -> usize {
        self.rules.delete_for_slot(pos, slot)
    }

    /// Deletes every rule of a part of speech.
    pub fn wipe_rules(&mut self, pos: PosId) -> usize {
        self.rules.wipe(pos)
    }

    /// Rules of a part of speech in order, numbered `1..N`.
    #[must_use]
    pub fn rules_for_pos(&self, pos: PosId) -> Vec<(RuleId, Rule)> {
        self.rules.rules_for_pos(pos)
    }

    /// Rules of one slot in order.
    #[must_use]
    pub fn rules_for_slot(&self, pos: PosId, slot: &SlotId) -> Vec<(RuleId, Rule)> {
        self.rules.rules_for_slot(pos, slot)
    }

    /// Moves a block of same-slot rules up. See [`RuleStore::move_block_up`].
    pub fn move_block_up(&mut self, block: &[RuleId]) -> bool {
        self.rules.move_block_up(block)
    }

    /// Moves a block of same-slot rules down. See [`RuleStore::move_block_down`].
    pub fn move_block_down(&mut self, block: &[RuleId]) -> bool {
        self.rules.move_block_down(block)
    }

    /// Renumbers every part of speech's rules to `1..N`.
    pub fn smooth_rules(&mut self) -> usize {
        self.rules.smooth()
    }

    /// Replaces every rule of `pos` whose content equals `before` with `after`.
    pub fn bulk_update(&mut self, pos: PosId, before: &Rule, after: &Rule) -> usize {
        self.rules.bulk_update(pos, before, after)
    }

    /// Deletes every rule of `pos` whose content equals any template.
    pub fn bulk_delete(&mut self, pos: PosId, templates: &[Rule]) -> usize {
        self.rules.bulk_delete(pos, templates)
    }

    /// Copies rules to every grid slot selecting `value` at `position`,
    /// except `exclude`.
    pub fn copy_to_sibling_slots(
        &mut self,
        pos: PosId,
        position: usize,
        value: ValueId,
        rules: &[Rule],
        exclude: &SlotId,
    ) -> Vec<RuleId> {
        let enumerator = SlotEnumerator::new(&self.axes);
        self.rules
            .copy_to_sibling_slots(&enumerator, pos, position, value, rules, exclude)
    }

    /// Deletes matching rules from every grid slot selecting `value` at `position`.
    pub fn delete_from_sibling_slots(
        &mut self,
        pos: PosId,
        position: usize,
        value: ValueId,
        templates: &[Rule],
    ) -> usize {
        let enumerator = SlotEnumerator::new(&self.axes);
        self.rules
            .delete_from_sibling_slots(&enumerator, pos, position, value, templates)
    }

    /// Marks every rule of `pos` as applying regardless of class.
    pub fn set_all_universal(&mut self, pos: PosId) {
        self.rules.set_all_universal(pos);
    }

    /// Rules of `pos` whose slot no longer exists.
    pub fn find_orphaned(&mut self, pos: PosId) -> Vec<RuleId> {
        let valid = SlotEnumerator::new(&self.axes).valid_slots(pos);
        self.rules.find_orphaned(pos, &valid)
    }

    // =========================================================================
    // Stored forms
    // =========================================================================

    /// Returns the stored form of a word for a slot.
    #[must_use]
    pub fn override_form(&self, word: WordId, slot: &SlotId) -> Option<&Instance> {
        self.instances.get(word, slot)
    }

    /// Stores a literal form, keeping any notes already attached.
    pub fn set_override(&mut self, word: WordId, slot: SlotId, value: impl Into<String>) {
        self.instances.set(word, slot, value);
    }

    /// Attaches notes to a stored form.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InstanceNotFound`] if nothing is stored there.
    pub fn set_override_notes(
        &mut self,
        word: WordId,
        slot: &SlotId,
        notes: impl Into<String>,
    ) -> Result<()> {
        self.instances.set_notes(word, slot, notes)
    }

    /// Removes a stored form.
    pub fn clear_override(&mut self, word: WordId, slot: &SlotId) -> Option<Instance> {
        self.instances.clear(word, slot)
    }

    /// Removes every stored form of a word.
    pub fn clear_overrides(&mut self, word: WordId) -> usize {
        self.instances.clear_word(word)
    }

    /// Moves a tombstoned form back to its untagged slot.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InstanceNotFound`] or [`ErrorKind::SlotOccupied`].
    pub fn restore_override(&mut self, word: WordId, slot: &SlotId) -> Result<SlotId> {
        self.instances.restore(word, slot)
    }

    /// Stored slots of a word that no longer map to a live slot.
    ///
    /// # Errors
    /// Returns [`ErrorKind::WordNotFound`] if the word is not in the lexicon.
    pub fn deprecated_forms(&self, word: WordId) -> Result<Vec<SlotId>> {
        let pos = self
            .lexicon
            .word(word)
            .ok_or_else(|| Error::word_not_found(word))?
            .pos;
        let valid = self.enumerator().valid_slots(pos);
        Ok(self.instances.deprecated_forms(word, &valid))
    }

    /// Returns true if the word holds stored forms outside the live slots.
    ///
    /// # Errors
    /// Returns [`ErrorKind::WordNotFound`] if the word is not in the lexicon.
    pub fn has_deprecated_forms(&self, word: WordId) -> Result<bool> {
        Ok(!self.deprecated_forms(word)?.is_empty())
    }

    // =========================================================================
    // Lexicon & classes
    // =========================================================================

    /// Adds or replaces a lexicon word.
    pub fn add_word(&mut self, word: Word) {
        self.lexicon.insert(word);
    }

    /// Removes a word together with its stored forms.
    pub fn remove_word(&mut self, word: WordId) -> Option<Word> {
        self.instances.clear_word(word);
        self.lexicon.remove(word)
    }

    /// Sets which slots of a word answer from stored forms.
    ///
    /// # Errors
    /// Returns [`ErrorKind::WordNotFound`] if the word is not in the lexicon.
    pub fn set_override_mode(&mut self, word: WordId, mode: OverrideMode) -> Result<()> {
        self.lexicon
            .word_mut(word)
            .ok_or_else(|| Error::word_not_found(word))?
            .overrides = mode;
        Ok(())
    }

    /// Registers a word class.
    pub fn add_class(
        &mut self,
        label: impl Into<String>,
        applies_to: impl IntoIterator<Item = PosId>,
    ) -> ClassId {
        self.classes.add_class(label, applies_to)
    }

    /// Adds a value to a word class.
    ///
    /// # Errors
    /// Returns [`ErrorKind::ClassNotFound`] if the class does not exist.
    pub fn add_class_value(&mut self, class: ClassId, label: impl Into<String>) -> Result<ClassValueId> {
        self.classes.add_value(class, label)
    }

    /// Assigns a class value to a word.
    ///
    /// # Errors
    /// Returns [`ErrorKind::ClassValueNotFound`] for values the class does not
    /// hold, or [`ErrorKind::WordNotFound`].
    pub fn assign_class(&mut self, word: WordId, class: ClassId, value: ClassValueId) -> Result<()> {
        if !self.classes.is_valid_class_value(class, value) {
            return Err(Error::new(ErrorKind::ClassValueNotFound { class, value }));
        }
        self.lexicon
            .word_mut(word)
            .ok_or_else(|| Error::word_not_found(word))?
            .classes
            .insert(class, value);
        Ok(())
    }

    /// Removes a class value and clears every word assignment to it.
    ///
    /// Rules requiring the value are kept; they show up as invalid filters.
    /// Returns the words whose assignment was cleared.
    ///
    /// # Errors
    /// Returns [`ErrorKind::ClassNotFound`] or [`ErrorKind::ClassValueNotFound`].
    pub fn remove_class_value(&mut self, class: ClassId, value: ClassValueId) -> Result<Vec<WordId>> {
        self.classes.remove_value(class, value)?;
        let cleared = self.lexicon.clear_class_value(class, value);
        tracing::debug!(%class, %value, words = cleared.len(), "class value removed");
        Ok(cleared)
    }

    /// Removes a class and clears every word assignment to its values.
    ///
    /// # Errors
    /// Returns [`ErrorKind::ClassNotFound`] if the class does not exist.
    pub fn remove_class(&mut self, class: ClassId) -> Result<Vec<WordId>> {
        let removed = self.classes.remove_class(class)?;
        let mut cleared = Vec::new();
        for (value, _) in &removed.values {
            cleared.extend(self.lexicon.clear_class_value(class, *value));
        }
        cleared.sort_unstable();
        Ok(cleared)
    }

    // =========================================================================
    // Evolution
    // =========================================================================

    /// Applies a sound change to every stored form of a word.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidPattern`] if the pattern does not compile.
    pub fn evolve_saved_forms(
        &mut self,
        word: WordId,
        pattern: &str,
        replacement: &str,
        scope: ReplaceScope,
    ) -> Result<Vec<EvolutionRecord>> {
        evolve_saved_forms(&mut self.instances, word, pattern, replacement, scope)
    }

    /// Replaces literal text inside rule transforms.
    pub fn evolve_rules(&mut self, pos: Option<PosId>, from: &str, to: &str) -> Vec<EvolutionRecord> {
        evolve_rules(&mut self.rules, pos, from, to)
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Lists what no longer fits the schema for one part of speech.
    ///
    /// Unindexed rules of the part of speech receive trailing indices.
    pub fn consistency_report(&mut self, pos: PosId) -> ConsistencyReport {
        let enumerator = SlotEnumerator::new(&self.axes);
        ConsistencyReport::collect(
            pos,
            &enumerator,
            &mut self.rules,
            &self.instances,
            self.lexicon.words_of_pos(pos),
            &self.classes,
        )
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Snapshots the session as a document.
    ///
    /// Rule indices are written renumbered to `1..N` per part of speech.
    #[must_use]
    pub fn export(&self) -> Document {
        let parts_of_speech = self
            .axes
            .parts_of_speech()
            .into_iter()
            .map(|pos| PosAxes {
                pos,
                axes: self.axes.axes_for(pos).map(AxisRecord::from).collect(),
            })
            .collect();
        let words = self
            .instances
            .words()
            .into_iter()
            .map(|word| WordForms {
                word,
                forms: self.instances.instances(word).into_iter().cloned().collect(),
            })
            .collect();
        let rules = self
            .rules
            .parts_of_speech()
            .into_iter()
            .flat_map(|pos| self.rules.rules_for_pos(pos))
            .map(|(_, rule)| RuleRecord::from(&rule))
            .collect();

        Document {
            parts_of_speech,
            words,
            rules,
            suppressions: self.suppression.entries().into_iter().collect(),
            lexicon: self.lexicon.iter().map(WordRecord::from).collect(),
            classes: self.classes.iter().map(ClassRecord::from).collect(),
            ..Document::default()
        }
    }

    /// Rebuilds a session from a document.
    ///
    /// Identifier counters advance past every loaded id.
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnsupportedFormat`] for newer documents and
    /// [`ErrorKind::InvalidSuppressionKey`] for malformed suppression keys.
    pub fn import(document: Document, config: SessionConfig) -> Result<Self> {
        document.check_version()?;
        let mut session = Self::with_config(config);

        for class in document.classes {
            session.classes.insert_class(class.into());
        }
        for word in document.lexicon {
            session.lexicon.insert(word.into());
        }
        for group in document.parts_of_speech {
            for record in group.axes {
                let singleton = record.singleton;
                let (axis, values) = record.into_axis(group.pos);
                let id = axis.id;
                let lost_value = singleton && !axis.is_singleton();
                session.axes.insert_axis(axis);
                for value in values {
                    session.axes.insert_value(id, value)?;
                }
                if lost_value {
                    session.axes.set_singleton(id, true)?;
                }
            }
        }
        for group in document.words {
            for instance in group.forms {
                session.instances.insert(group.word, instance);
            }
        }
        for record in document.rules {
            session.rules.load(record.into());
        }
        for (key, suppressed) in &document.suppressions {
            session.suppression.set_raw(key, *suppressed)?;
        }
        let unlisted = session.unlisted_words();
        if !unlisted.is_empty() {
            tracing::warn!(
                words = unlisted.len(),
                "stored forms belong to words missing from the lexicon"
            );
        }
        Ok(session)
    }

    /// Writes the session to a `MessagePack` file.
    ///
    /// # Errors
    /// Returns [`ErrorKind::SerializationError`] or [`ErrorKind::IoError`].
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let document = self.export();
        serialize::save_to_file(&document, path.as_ref())?;
        tracing::info!(
            path = %path.as_ref().display(),
            axes = self.axes.len(),
            rules = document.rules.len(),
            forms = self.instances.len(),
            "document saved"
        );
        Ok(())
    }

    /// Reads a session from a `MessagePack` file.
    ///
    /// # Errors
    /// Returns [`ErrorKind::IoError`], [`ErrorKind::SerializationError`], or
    /// [`ErrorKind::UnsupportedFormat`].
    pub fn load<P: AsRef<Path>>(path: P, config: SessionConfig) -> Result<Self> {
        let document = serialize::load_from_file(path.as_ref())?;
        let session = Self::import(document, config)?;
        tracing::info!(
            path = %path.as_ref().display(),
            axes = session.axes.len(),
            rules = session.rules.len(),
            forms = session.instances.len(),
            "document loaded"
        );
        Ok(session)
    }
}

// =============================================================================
// Tests
// =============================================================================
