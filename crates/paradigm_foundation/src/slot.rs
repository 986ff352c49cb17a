//! Slot identifiers.
//!
//! A slot is one addressable inflected form of a part of speech. Slots come in
//! two shapes:
//!
//! - **Dimensional** slots are cells of the cartesian product over the
//!   non-singleton axes. Their identifier lists one value id per axis, in axis
//!   order, wrapped in delimiters: `,3,7,`. The wrapping makes substring tests
//!   such as `contains(",7,")` unambiguous.
//! - **Singleton** slots stand outside the grid (a gerund, say). Their
//!   identifier is the owning axis id rendered as a bare number: `12`.
//!
//! Stored overrides whose slot stopped existing are tombstoned by prefixing
//! [`DEPRECATION_TAG`]; a tag can be applied more than once.

use std::fmt;

use crate::ids::{AxisId, ValueId};

/// Separator between value ids in a dimensional slot identifier.
pub const DELIMITER: char = ',';

/// Prefix marking a stored slot identifier as deprecated.
pub const DEPRECATION_TAG: char = 'D';

/// Canonical identifier of one inflection slot.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SlotId(String);

impl SlotId {
    /// Wraps a raw identifier string without validation.
    ///
    /// Used when reading persisted data; the string may be deprecated or may
    /// name a slot that no longer exists.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Builds a dimensional identifier from value ids in axis order.
    #[must_use]
    pub fn dimensional(values: &[ValueId]) -> Self {
        let mut raw = String::from(DELIMITER);
        for value in values {
            raw.push_str(&value.get().to_string());
            raw.push(DELIMITER);
        }
        Self(raw)
    }

    /// Builds the identifier of a singleton axis's standalone form.
    #[must_use]
    pub fn singleton(axis: AxisId) -> Self {
        Self(axis.get().to_string())
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the raw string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns true if this identifier carries at least one deprecation tag.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.0.starts_with(DEPRECATION_TAG)
    }

    /// Returns true for a live dimensional identifier (`,a,b,`).
    #[must_use]
    pub fn is_dimensional(&self) -> bool {
        self.0.len() >= 2 && self.0.starts_with(DELIMITER) && self.0.ends_with(DELIMITER)
    }

    /// Returns true for a live singleton identifier (a bare number).
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.singleton_axis().is_some()
    }

    /// Returns this identifier with one more deprecation tag.
    #[must_use]
    pub fn deprecated(&self) -> Self {
        let mut raw = String::with_capacity(self.0.len() + 1);
        raw.push(DEPRECATION_TAG);
        raw.push_str(&self.0);
        Self(raw)
    }

    /// Returns this identifier with every deprecation tag removed.
    #[must_use]
    pub fn undeprecated(&self) -> Self {
        Self(self.0.trim_start_matches(DEPRECATION_TAG).to_string())
    }

    /// Parses the value ids of a dimensional identifier, in axis order.
    ///
    /// Returns `None` for singleton or deprecated identifiers and for anything
    /// that does not parse.
    #[must_use]
    pub fn components(&self) -> Option<Vec<ValueId>> {
        if !self.is_dimensional() {
            return None;
        }
        self.0[1..self.0.len() - 1]
            .split(DELIMITER)
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<u32>().ok().map(ValueId::new))
            .collect()
    }

    /// Returns the value id selected at `position` among the dimensional axes.
    #[must_use]
    pub fn value_at(&self, position: usize) -> Option<ValueId> {
        self.components()
            .and_then(|values| values.get(position).copied())
    }

    /// Returns true if this dimensional identifier selects `value` at `position`.
    #[must_use]
    pub fn selects(&self, position: usize, value: ValueId) -> bool {
        self.value_at(position) == Some(value)
    }

    /// Returns the axis id of a singleton identifier.
    #[must_use]
    pub fn singleton_axis(&self) -> Option<AxisId> {
        if self.0.is_empty() || !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.0.parse::<u32>().ok().map(AxisId::new)
    }
}

impl fmt::Debug for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotId({:?})", self.0)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SlotId {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

impl From<String> for SlotId {
    fn from(raw: String) -> Self {
        Self::from_raw(raw)
    }
}

impl AsRef<str> for SlotId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
