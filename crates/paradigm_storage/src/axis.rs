//! Grammatical axes and their values.
//!
//! An axis (tense, number, case) belongs to one part of speech and holds an
//! ordered list of values. Non-singleton axes span the inflection grid; a
//! singleton axis holds one synthetic value and stands for a single form
//! outside the grid.
//!
//! Slot identifiers and labels are derived from axis order and value order, so
//! both are kept in insertion order in plain vectors. Never swap these for an
//! unordered map.

use paradigm_foundation::{AxisId, Error, ErrorKind, IdAllocator, PosId, Result, ValueId};

/// Label given to the synthetic value of a singleton axis.
pub const SINGLETON_VALUE_LABEL: &str = "SINGLETON-DIMENSION";

/// One value of an axis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisValue {
    /// Value identifier.
    pub id: ValueId,
    /// Display label.
    pub label: String,
}

impl AxisValue {
    /// Creates a value.
    #[must_use]
    pub fn new(id: ValueId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// A grammatical axis owned by a part of speech.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Axis {
    /// Axis identifier.
    pub id: AxisId,
    /// Owning part of speech.
    pub pos: PosId,
    /// Display label.
    pub label: String,
    singleton: bool,
    values: Vec<AxisValue>,
}

impl Axis {
    /// Creates an empty, non-singleton axis.
    #[must_use]
    pub fn new(id: AxisId, pos: PosId, label: impl Into<String>) -> Self {
        Self {
            id,
            pos,
            label: label.into(),
            singleton: false,
            values: Vec::new(),
        }
    }

    /// Creates a singleton axis carrying its synthetic value.
    #[must_use]
    pub fn singleton(id: AxisId, pos: PosId, label: impl Into<String>, value: ValueId) -> Self {
        Self {
            id,
            pos,
            label: label.into(),
            singleton: true,
            values: vec![AxisValue::new(value, SINGLETON_VALUE_LABEL)],
        }
    }

    /// Returns true for a singleton axis.
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.singleton
    }

    /// Returns the values in order.
    #[must_use]
    pub fn values(&self) -> &[AxisValue] {
        &self.values
    }

    /// Returns a value by id.
    #[must_use]
    pub fn value(&self, id: ValueId) -> Option<&AxisValue> {
        self.values.iter().find(|v| v.id == id)
    }

    /// Returns the position of a value within this axis.
    #[must_use]
    pub fn position_of(&self, id: ValueId) -> Option<usize> {
        self.values.iter().position(|v| v.id == id)
    }

    /// Appends a value, replacing the label if the id is already present.
    ///
    /// # Errors
    /// Returns [`ErrorKind::SingletonAxis`] for singleton axes.
    pub fn push_value(&mut self, value: AxisValue) -> Result<()> {
        if self.singleton {
            return Err(Error::new(ErrorKind::SingletonAxis(self.id)));
        }
        match self.values.iter_mut().find(|v| v.id == value.id) {
            Some(existing) => existing.label = value.label,
            None => self.values.push(value),
        }
        Ok(())
    }
}

/// All axes of all parts of speech, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct AxisModel {
    axes: Vec<Axis>,
    axis_ids: IdAllocator,
    value_ids: IdAllocator,
}

impl AxisModel {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of axes across all parts of speech.
    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Returns true if no axes exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Adds an empty non-singleton axis at the end of the part of speech's axis list.
    pub fn add_axis(&mut self, pos: PosId, label: impl Into<String>) -> AxisId {
        let id = AxisId::new(self.axis_ids.allocate());
        self.axes.push(Axis::new(id, pos, label));
        tracing::debug!(%pos, axis = %id, "axis added");
        id
    }

    /// Adds a singleton axis.
    pub fn add_singleton_axis(&mut self, pos: PosId, label: impl Into<String>) -> AxisId {
        let id = AxisId::new(self.axis_ids.allocate());
        let value = ValueId::new(self.value_ids.allocate());
        self.axes.push(Axis::singleton(id, pos, label, value));
        tracing::debug!(%pos, axis = %id, "singleton axis added");
        id
    }

    /// Inserts a fully formed axis with caller-chosen ids, as when loading a document.
    ///
    /// An axis with the same id is replaced in place, keeping its position.
    pub fn insert_axis(&mut self, axis: Axis) {
        self.axis_ids.observe(axis.id.get());
        for value in &axis.values {
            self.value_ids.observe(value.id.get());
        }
        match self.axes.iter_mut().find(|a| a.id == axis.id) {
            Some(existing) => *existing = axis,
            None => self.axes.push(axis),
        }
    }

    /// Removes an axis and all its values.
    ///
    /// # Errors
    /// Returns [`ErrorKind::AxisNotFound`] if the axis does not exist.
    pub fn remove_axis(&mut self, id: AxisId) -> Result<Axis> {
        let position = self
            .axes
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| Error::axis_not_found(id))?;
        let removed = self.axes.remove(position);
        tracing::debug!(pos = %removed.pos, axis = %id, "axis removed");
        Ok(removed)
    }

    /// Renames an axis.
    ///
    /// # Errors
    /// Returns [`ErrorKind::AxisNotFound`] if the axis does not exist.
    pub fn rename_axis(&mut self, id: AxisId, label: impl Into<String>) -> Result<()> {
        self.axis_mut(id)?.label = label.into();
        Ok(())
    }

    /// Switches an axis between singleton and dimensional.
    ///
    /// A change of kind discards the existing values; a new singleton axis
    /// receives a fresh synthetic value. Setting the current kind is a no-op.
    ///
    /// # Errors
    /// Returns [`ErrorKind::AxisNotFound`] if the axis does not exist.
    pub fn set_singleton(&mut self, id: AxisId, singleton: bool) -> Result<()> {
        let fresh = ValueId::new(self.value_ids.peek());
        let axis = self.axis_mut(id)?;
        if axis.singleton == singleton {
            return Ok(());
        }
        axis.singleton = singleton;
        axis.values.clear();
        if singleton {
            axis.values.push(AxisValue::new(fresh, SINGLETON_VALUE_LABEL));
            self.value_ids.allocate();
        }
        Ok(())
    }

    /// Appends a value to an axis.
    ///
    /// # Errors
    /// Returns [`ErrorKind::AxisNotFound`] or [`ErrorKind::SingletonAxis`].
    pub fn add_value(&mut self, axis: AxisId, label: impl Into<String>) -> Result<ValueId> {
        if self.axis(axis).ok_or_else(|| Error::axis_not_found(axis))?.singleton {
            return Err(Error::new(ErrorKind::SingletonAxis(axis)));
        }
        let id = ValueId::new(self.value_ids.allocate());
        self.axis_mut(axis)?.push_value(AxisValue::new(id, label))?;
        Ok(id)
    }

    /// Inserts a value with a caller-chosen id, as when loading a document.
    ///
    /// # Errors
    /// Returns [`ErrorKind::AxisNotFound`] or [`ErrorKind::SingletonAxis`].
    pub fn insert_value(&mut self, axis: AxisId, value: AxisValue) -> Result<()> {
        self.value_ids.observe(value.id.get());
        self.axis_mut(axis)?.push_value(value)
    }

    /// Removes a value from an axis.
    ///
    /// # Errors
    /// Returns [`ErrorKind::AxisNotFound`] or [`ErrorKind::ValueNotFound`].
    pub fn remove_value(&mut self, axis: AxisId, value: ValueId) -> Result<AxisValue> {
        let target = self.axis_mut(axis)?;
        let position = target
            .position_of(value)
            .ok_or_else(|| Error::value_not_found(axis, value))?;
        Ok(target.values.remove(position))
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
        let target = self.axis_mut(axis)?;
        let entry = target
            .values
            .iter_mut()
            .find(|v| v.id == value)
            .ok_or_else(|| Error::value_not_found(axis, value))?;
        entry.label = label.into();
        Ok(())
    }

    /// Returns an axis by id.
    #[must_use]
    pub fn axis(&self, id: AxisId) -> Option<&Axis> {
        self.axes.iter().find(|a| a.id == id)
    }

    fn axis_mut(&mut self, id: AxisId) -> Result<&mut Axis> {
        self.axes
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| Error::axis_not_found(id))
    }

    /// Returns every axis of a part of speech, in insertion order.
    pub fn axes_for(&self, pos: PosId) -> impl Iterator<Item = &Axis> + '_ {
        self.axes.iter().filter(move |a| a.pos == pos)
    }

    /// Returns the non-singleton axes of a part of speech, in insertion order.
    #[must_use]
    pub fn dimensional_axes(&self, pos: PosId) -> Vec<&Axis> {
        self.axes_for(pos).filter(|a| !a.singleton).collect()
    }

    /// Returns the singleton axes of a part of speech, in insertion order.
    #[must_use]
    pub fn singleton_axes(&self, pos: PosId) -> Vec<&Axis> {
        self.axes_for(pos).filter(|a| a.singleton).collect()
    }

    /// Returns the position of an axis among the non-singleton axes of its
    /// part of speech, which is also its position inside slot identifiers.
    #[must_use]
    pub fn dimension_position(&self, pos: PosId, axis: AxisId) -> Option<usize> {
        self.dimensional_axes(pos).iter().position(|a| a.id == axis)
    }

    /// Returns the non-singleton axis at a position, skipping singletons.
    #[must_use]
    pub fn dimensional_axis_at(&self, pos: PosId, position: usize) -> Option<&Axis> {
        self.axes_for(pos).filter(|a| !a.singleton).nth(position)
    }

    /// Returns every part of speech that owns at least one axis, ascending.
    #[must_use]
    pub fn parts_of_speech(&self) -> Vec<PosId> {
        let mut all: Vec<PosId> = self.axes.iter().map(|a| a.pos).collect();
        all.sort_unstable();
        all.dedup();
        all
    }

    /// Returns every axis across all parts of speech, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Axis> + '_ {
        self.axes.iter()
    }
}
