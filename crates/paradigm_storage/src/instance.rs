//! Literal per-word forms.
//!
//! An instance is a form the user typed by hand (or accepted from the generator
//! and then edited). Instances are keyed by (word, slot) and live independently
//! of the rule store. When the axis model changes, instances are tombstoned by
//! re-keying them under a deprecated slot identifier. They are never dropped
//! implicitly.
//!
//! Uses `im::OrdMap` so snapshots of the store are cheap to clone and iterate
//! in a stable order.

use std::collections::HashSet;

use im::OrdMap;
use paradigm_foundation::{Error, ErrorKind, Result, SlotId, WordId};

/// A stored literal form.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    /// The slot this form occupies (possibly deprecated).
    pub slot: SlotId,
    /// Surface text.
    pub value: String,
    /// Free-text notes.
    pub notes: String,
}

impl Instance {
    /// Creates an instance without notes.
    #[must_use]
    pub fn new(slot: SlotId, value: impl Into<String>) -> Self {
        Self {
            slot,
            value: value.into(),
            notes: String::new(),
        }
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// All stored instances, grouped by word.
#[derive(Clone, Debug, Default)]
pub struct InstanceStore {
    forms: OrdMap<WordId, OrdMap<SlotId, Instance>>,
}

impl InstanceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored instance for a word and slot.
    #[must_use]
    pub fn get(&self, word: WordId, slot: &SlotId) -> Option<&Instance> {
        self.forms.get(&word).and_then(|slots| slots.get(slot))
    }

    /// Stores a value, keeping existing notes.
    pub fn set(&mut self, word: WordId, slot: SlotId, value: impl Into<String>) {
        let value = value.into();
        let mut slots = self.forms.get(&word).cloned().unwrap_or_default();
        match slots.get_mut(&slot) {
            Some(existing) => existing.value = value,
            None => {
                slots.insert(slot.clone(), Instance::new(slot, value));
            }
        }
        self.forms.insert(word, slots);
    }

    /// Sets the notes of an existing instance.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InstanceNotFound`] if nothing is stored for the slot.
    pub fn set_notes(&mut self, word: WordId, slot: &SlotId, notes: impl Into<String>) -> Result<()> {
        let instance = self
            .forms
            .get_mut(&word)
            .and_then(|slots| slots.get_mut(slot))
            .ok_or_else(|| Error::instance_not_found(word, slot.clone()))?;
        instance.notes = notes.into();
        Ok(())
    }

    /// Inserts a complete instance, replacing any instance in the same slot.
    pub fn insert(&mut self, word: WordId, instance: Instance) {
        let mut slots = self.forms.get(&word).cloned().unwrap_or_default();
        slots.insert(instance.slot.clone(), instance);
        self.forms.insert(word, slots);
    }

    /// Removes one instance.
    pub fn clear(&mut self, word: WordId, slot: &SlotId) -> Option<Instance> {
        let slots = self.forms.get_mut(&word)?;
        let removed = slots.remove(slot);
        if slots.is_empty() {
            self.forms.remove(&word);
        }
        removed
    }

    /// Removes every instance of a word, returning how many were removed.
    pub fn clear_word(&mut self, word: WordId) -> usize {
        self.forms.remove(&word).map_or(0, |slots| slots.len())
    }

    /// Returns every instance of a word in slot order.
    #[must_use]
    pub fn instances(&self, word: WordId) -> Vec<&Instance> {
        self.forms
            .get(&word)
            .map(|slots| slots.values().collect())
            .unwrap_or_default()
    }

    /// Returns every stored slot identifier of a word.
    #[must_use]
    pub fn slots(&self, word: WordId) -> Vec<SlotId> {
        self.forms
            .get(&word)
            .map(|slots| slots.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns every word with at least one instance, ascending.
    #[must_use]
    pub fn words(&self) -> Vec<WordId> {
        self.forms.keys().copied().collect()
    }

    /// Returns the total number of instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forms.values().map(OrdMap::len).sum()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Iterates over (word, instance) pairs in word then slot order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Instance)> + '_ {
        self.forms
            .iter()
            .flat_map(|(word, slots)| slots.values().map(move |instance| (*word, instance)))
    }

    /// Tombstones every live instance of a word.
    ///
    /// Each live slot is re-keyed with a deprecation tag. If the tagged key is
    /// already held by an older tombstone, further tags are added until the key
    /// is free. Returns the number of instances re-keyed.
    pub fn deprecate_word(&mut self, word: WordId) -> usize {
        let Some(slots) = self.forms.get_mut(&word) else {
            return 0;
        };
        let live: Vec<SlotId> = slots
            .keys()
            .filter(|slot| !slot.is_deprecated())
            .cloned()
            .collect();
        for slot in &live {
            let mut tagged = slot.deprecated();
            while slots.contains_key(&tagged) {
                tagged = tagged.deprecated();
            }
            if let Some(mut instance) = slots.remove(slot) {
                instance.slot = tagged.clone();
                slots.insert(tagged, instance);
            }
        }
        live.len()
    }

    /// Returns every stored slot of a word that is not in `valid`.
    ///
    /// Computed on demand from the current contents; tagged tombstones are
    /// always included since no live slot carries a tag.
    #[must_use]
    pub fn deprecated_forms(&self, word: WordId, valid: &HashSet<SlotId>) -> Vec<SlotId> {
        self.forms
            .get(&word)
            .map(|slots| {
                slots
                    .keys()
                    .filter(|slot| !valid.contains(*slot))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns true if the word holds any instance outside `valid`.
    #[must_use]
    pub fn has_deprecated_forms(&self, word: WordId, valid: &HashSet<SlotId>) -> bool {
        self.forms
            .get(&word)
            .is_some_and(|slots| slots.keys().any(|slot| !valid.contains(slot)))
    }

    /// Moves a tombstoned instance back to its untagged slot.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InstanceNotFound`] if nothing is stored under `slot`,
    /// or [`ErrorKind::SlotOccupied`] if a live instance already uses the
    /// untagged slot.
    pub fn restore(&mut self, word: WordId, slot: &SlotId) -> Result<SlotId> {
        let target = slot.undeprecated();
        let slots = self
            .forms
            .get_mut(&word)
            .ok_or_else(|| Error::instance_not_found(word, slot.clone()))?;
        if !slots.contains_key(slot) {
            return Err(Error::instance_not_found(word, slot.clone()));
        }
        if target == *slot {
            return Ok(target);
        }
        if slots.contains_key(&target) {
            return Err(Error::new(ErrorKind::SlotOccupied { word, slot: target }));
        }
        if let Some(mut instance) = slots.remove(slot) {
            instance.slot = target.clone();
            slots.insert(target.clone(), instance);
        }
        Ok(target)
    }
}
