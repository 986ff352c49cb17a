//! Slot enumeration.
//!
//! The dimensional slots of a part of speech are the cartesian product of its
//! non-singleton axes, walked depth-first in axis order then value order.
//! Singleton axes contribute one extra slot each, appended after the grid.

use std::collections::HashSet;

use paradigm_foundation::{PosId, SlotId, ValueId};
use paradigm_storage::{Axis, AxisModel, SuppressionRegistry};

/// Whether a slot is a grid cell or a standalone form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Cell of the product over non-singleton axes.
    Dimensional,
    /// Standalone form of a singleton axis.
    Singleton,
}

/// One enumerated slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotEntry {
    /// Canonical identifier.
    pub slot: SlotId,
    /// Human label.
    pub label: String,
    /// Grid cell or standalone.
    pub kind: SlotKind,
}

/// Enumerates slots from an axis model snapshot.
#[derive(Clone, Copy, Debug)]
pub struct SlotEnumerator<'a> {
    axes: &'a AxisModel,
}

impl<'a> SlotEnumerator<'a> {
    /// Creates an enumerator over `axes`.
    #[must_use]
    pub fn new(axes: &'a AxisModel) -> Self {
        Self { axes }
    }

    /// Returns every grid cell. Empty when the part of speech has no
    /// non-singleton axes.
    #[must_use]
    pub fn dimensional(&self, pos: PosId) -> Vec<SlotEntry> {
        let axes = self.axes.dimensional_axes(pos);
        let mut out = Vec::new();
        if axes.is_empty() {
            return out;
        }
        let mut ids = Vec::with_capacity(axes.len());
        let mut labels = Vec::with_capacity(axes.len());
        expand(&axes, 0, &mut ids, &mut labels, &mut out);
        out
    }

    /// Returns one slot per singleton axis, in axis order.
    #[must_use]
    pub fn singletons(&self, pos: PosId) -> Vec<SlotEntry> {
        self.axes
            .singleton_axes(pos)
            .into_iter()
            .map(|axis| SlotEntry {
                slot: SlotId::singleton(axis.id),
                label: axis.label.clone(),
                kind: SlotKind::Singleton,
            })
            .collect()
    }

    /// Returns the grid followed by the singleton slots.
    #[must_use]
    pub fn all(&self, pos: PosId) -> Vec<SlotEntry> {
        let mut slots = self.dimensional(pos);
        slots.extend(self.singletons(pos));
        slots
    }

    /// Returns every slot not hidden by `suppression`.
    #[must_use]
    pub fn visible(&self, pos: PosId, suppression: &SuppressionRegistry) -> Vec<SlotEntry> {
        self.all(pos)
            .into_iter()
            .filter(|entry| !suppression.is_suppressed(pos, &entry.slot))
            .collect()
    }

    /// Returns the set of currently producible slot identifiers.
    ///
    /// Suppressed slots are included; they are hidden, not invalid.
    #[must_use]
    pub fn valid_slots(&self, pos: PosId) -> HashSet<SlotId> {
        self.all(pos).into_iter().map(|entry| entry.slot).collect()
    }

    /// Returns true if `slot` is currently producible for `pos`.
    #[must_use]
    pub fn is_valid(&self, pos: PosId, slot: &SlotId) -> bool {
        if let Some(axis) = slot.singleton_axis() {
            return self
                .axes
                .axis(axis)
                .is_some_and(|a| a.pos == pos && a.is_singleton());
        }
        let Some(values) = slot.components() else {
            return false;
        };
        let axes = self.axes.dimensional_axes(pos);
        axes.len() == values.len()
            && axes
                .iter()
                .zip(&values)
                .all(|(axis, value)| axis.value(*value).is_some())
    }

    /// Rebuilds the label of a slot from its identifier.
    ///
    /// Unknown value ids are skipped. Returns `None` for deprecated or
    /// unparseable identifiers and for singleton ids of unknown axes.
    #[must_use]
    pub fn label_for(&self, pos: PosId, slot: &SlotId) -> Option<String> {
        if let Some(axis) = slot.singleton_axis() {
            return self
                .axes
                .axis(axis)
                .filter(|a| a.pos == pos)
                .map(|a| a.label.clone());
        }
        let values = slot.components()?;
        let axes = self.axes.dimensional_axes(pos);
        let labels: Vec<&str> = values
            .iter()
            .enumerate()
            .filter_map(|(position, value)| {
                axes.get(position)
                    .and_then(|axis| axis.value(*value))
                    .map(|v| v.label.as_str())
            })
            .collect();
        Some(labels.join(" "))
    }

    /// Returns every grid cell selecting `value` on the axis at `position`.
    #[must_use]
    pub fn siblings(&self, pos: PosId, position: usize, value: ValueId) -> Vec<SlotEntry> {
        self.dimensional(pos)
            .into_iter()
            .filter(|entry| entry.slot.selects(position, value))
            .collect()
    }
}

fn expand<'a>(
    axes: &[&'a Axis],
    depth: usize,
    ids: &mut Vec<ValueId>,
    labels: &mut Vec<&'a str>,
    out: &mut Vec<SlotEntry>,
) {
    if depth == axes.len() {
        out.push(SlotEntry {
            slot: SlotId::dimensional(ids),
            label: labels.join(" "),
            kind: SlotKind::Dimensional,
        });
        return;
    }
    for value in axes[depth].values() {
        ids.push(value.id);
        labels.push(&value.label);
        expand(axes, depth + 1, ids, labels, out);
        ids.pop();
        labels.pop();
    }
}
