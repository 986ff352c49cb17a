//! Words as seen by the form engine.
//!
//! The dictionary itself lives elsewhere; the engine only needs a word's
//! headword, part of speech, class assignments, and whether it has opted out
//! of generation. [`Lexicon`] is that interface and [`MemoryLexicon`] is an
//! in-memory implementation used by the session and by tests.

use std::collections::{BTreeMap, BTreeSet};

use paradigm_foundation::{ClassId, ClassValueId, PosId, SlotId, WordId};

/// Which slots of a word answer from stored instances instead of rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverrideMode {
    /// Every slot is generated.
    #[default]
    None,
    /// Every slot is read from the instance store.
    All,
    /// Only the listed slots are read from the instance store.
    Slots(BTreeSet<SlotId>),
}

impl OverrideMode {
    /// Returns true if `slot` should be read from the instance store.
    #[must_use]
    pub fn covers(&self, slot: &SlotId) -> bool {
        match self {
            Self::None => false,
            Self::All => true,
            Self::Slots(slots) => slots.contains(slot),
        }
    }
}

/// A lexicon entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    /// Word identifier.
    pub id: WordId,
    /// The headword the rules operate on.
    pub value: String,
    /// Part of speech.
    pub pos: PosId,
    /// Assigned class values, one per class.
    pub classes: BTreeMap<ClassId, ClassValueId>,
    /// Generation opt-out.
    pub overrides: OverrideMode,
}

impl Word {
    /// Creates a word with no class assignments.
    #[must_use]
    pub fn new(id: WordId, value: impl Into<String>, pos: PosId) -> Self {
        Self {
            id,
            value: value.into(),
            pos,
            classes: BTreeMap::new(),
            overrides: OverrideMode::None,
        }
    }

    /// Assigns a class value.
    #[must_use]
    pub fn with_class(mut self, class: ClassId, value: ClassValueId) -> Self {
        self.classes.insert(class, value);
        self
    }

    /// Sets the generation opt-out.
    #[must_use]
    pub fn with_overrides(mut self, overrides: OverrideMode) -> Self {
        self.overrides = overrides;
        self
    }

    /// Returns the value assigned for a class.
    #[must_use]
    pub fn class_value(&self, class: ClassId) -> Option<ClassValueId> {
        self.classes.get(&class).copied()
    }
}

/// Read access to words by id.
pub trait Lexicon {
    /// Returns a word by id.
    fn word(&self, id: WordId) -> Option<&Word>;
}

/// Words held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryLexicon {
    words: BTreeMap<WordId, Word>,
}

impl MemoryLexicon {
    /// Creates an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a word.
    pub fn insert(&mut self, word: Word) {
        self.words.insert(word.id, word);
    }

    /// Removes a word.
    pub fn remove(&mut self, id: WordId) -> Option<Word> {
        self.words.remove(&id)
    }

    /// Returns a mutable word.
    pub fn word_mut(&mut self, id: WordId) -> Option<&mut Word> {
        self.words.get_mut(&id)
    }

    /// Returns the ids of every word of a part of speech, ascending.
    #[must_use]
    pub fn words_of_pos(&self, pos: PosId) -> Vec<WordId> {
        self.words
            .values()
            .filter(|w| w.pos == pos)
            .map(|w| w.id)
            .collect()
    }

    /// Clears every assignment of `value` for `class`. Returns the affected words.
    pub fn clear_class_value(&mut self, class: ClassId, value: ClassValueId) -> Vec<WordId> {
        let mut affected = Vec::new();
        for word in self.words.values_mut() {
            if word.class_value(class) == Some(value) {
                word.classes.remove(&class);
                affected.push(word.id);
            }
        }
        affected
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the lexicon is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over every word in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Word> + '_ {
        self.words.values()
    }
}

impl Lexicon for MemoryLexicon {
    fn word(&self, id: WordId) -> Option<&Word> {
        self.words.get(&id)
    }
}
