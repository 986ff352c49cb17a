//! Word classes (gender, animacy, ...) and their values.
//!
//! Rules can require specific class values. The engine only needs to know
//! which classes apply to a part of speech and whether a (class, value) pair
//! still exists; [`WordClasses`] is that interface.

use std::collections::BTreeSet;

use paradigm_foundation::{ClassId, ClassValueId, Error, ErrorKind, IdAllocator, PosId, Result};

/// Class lookups needed by the form generator.
pub trait WordClasses {
    /// Returns the classes that apply to a part of speech.
    fn class_axes_for(&self, pos: PosId) -> Vec<ClassId>;

    /// Returns true if `value` is a live value of `class`.
    fn is_valid_class_value(&self, class: ClassId, value: ClassValueId) -> bool;
}

/// A word class with its values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordClass {
    /// Class identifier.
    pub id: ClassId,
    /// Display label.
    pub label: String,
    /// Parts of speech the class applies to. Empty means every part of speech.
    pub applies_to: BTreeSet<PosId>,
    /// Values in insertion order.
    pub values: Vec<(ClassValueId, String)>,
}

impl WordClass {
    /// Returns true if the class applies to `pos`.
    #[must_use]
    pub fn applies_to(&self, pos: PosId) -> bool {
        self.applies_to.is_empty() || self.applies_to.contains(&pos)
    }

    /// Returns the label of a value.
    #[must_use]
    pub fn value_label(&self, value: ClassValueId) -> Option<&str> {
        self.values
            .iter()
            .find(|(id, _)| *id == value)
            .map(|(_, label)| label.as_str())
    }
}

/// In-memory word-class registry.
#[derive(Clone, Debug, Default)]
pub struct ClassRegistry {
    classes: Vec<WordClass>,
    class_ids: IdAllocator,
    value_ids: IdAllocator,
}

impl ClassRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class applying to the given parts of speech (empty for all).
    pub fn add_class(
        &mut self,
        label: impl Into<String>,
        applies_to: impl IntoIterator<Item = PosId>,
    ) -> ClassId {
        let id = ClassId::new(self.class_ids.allocate());
        self.classes.push(WordClass {
            id,
            label: label.into(),
            applies_to: applies_to.into_iter().collect(),
            values: Vec::new(),
        });
        id
    }

    /// Inserts a class with caller-chosen ids, as when loading.
    pub fn insert_class(&mut self, class: WordClass) {
        self.class_ids.observe(class.id.get());
        for (value, _) in &class.values {
            self.value_ids.observe(value.get());
        }
        match self.classes.iter_mut().find(|c| c.id == class.id) {
            Some(existing) => *existing = class,
            None => self.classes.push(class),
        }
    }

    /// Adds a value to a class.
    ///
    /// # Errors
    /// Returns [`ErrorKind::ClassNotFound`] if the class does not exist.
    pub fn add_value(&mut self, class: ClassId, label: impl Into<String>) -> Result<ClassValueId> {
        let id = ClassValueId::new(self.value_ids.peek());
        self.class_mut(class)?.values.push((id, label.into()));
        self.value_ids.allocate();
        Ok(id)
    }

    /// Removes a value from a class.
    ///
    /// Word assignments are not touched here; the session clears them.
    ///
    /// # Errors
    /// Returns [`ErrorKind::ClassNotFound`] or [`ErrorKind::ClassValueNotFound`].
    pub fn remove_value(&mut self, class: ClassId, value: ClassValueId) -> Result<()> {
        let entry = self.class_mut(class)?;
        let position = entry
            .values
            .iter()
            .position(|(id, _)| *id == value)
            .ok_or_else(|| Error::new(ErrorKind::ClassValueNotFound { class, value }))?;
        entry.values.remove(position);
        Ok(())
    }

    /// Removes a class.
    ///
    /// # Errors
    /// Returns [`ErrorKind::ClassNotFound`] if the class does not exist.
    pub fn remove_class(&mut self, class: ClassId) -> Result<WordClass> {
        let position = self
            .classes
            .iter()
            .position(|c| c.id == class)
            .ok_or_else(|| Error::new(ErrorKind::ClassNotFound(class)))?;
        Ok(self.classes.remove(position))
    }

    /// Returns a class by id.
    #[must_use]
    pub fn class(&self, id: ClassId) -> Option<&WordClass> {
        self.classes.iter().find(|c| c.id == id)
    }

    /// Finds a class by label.
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&WordClass> {
        self.classes.iter().find(|c| c.label == label)
    }

    /// Iterates over every class in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &WordClass> + '_ {
        self.classes.iter()
    }

    fn class_mut(&mut self, id: ClassId) -> Result<&mut WordClass> {
        self.classes
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::new(ErrorKind::ClassNotFound(id)))
    }
}

impl WordClasses for ClassRegistry {
    fn class_axes_for(&self, pos: PosId) -> Vec<ClassId> {
        self.classes
            .iter()
            .filter(|c| c.applies_to(pos))
            .map(|c| c.id)
            .collect()
    }

    fn is_valid_class_value(&self, class: ClassId, value: ClassValueId) -> bool {
        self.class(class)
            .is_some_and(|c| c.values.iter().any(|(id, _)| *id == value))
    }
}
