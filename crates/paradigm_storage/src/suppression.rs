//! Hide flags on (part of speech, slot) pairs.
//!
//! Suppression only affects listing: rules and instances for a suppressed slot
//! stay intact and generation still works when asked directly.

use im::OrdMap;
use paradigm_foundation::{Error, ErrorKind, PosId, Result, SlotId};

/// Separator between the part of speech and the slot in a persisted key.
const KEY_SEPARATOR: char = ',';

/// Flat map of suppression flags. Absent means not suppressed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuppressionRegistry {
    flags: OrdMap<(PosId, SlotId), bool>,
}

impl SuppressionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the slot is hidden for the part of speech.
    #[must_use]
    pub fn is_suppressed(&self, pos: PosId, slot: &SlotId) -> bool {
        self.flags
            .get(&(pos, slot.clone()))
            .copied()
            .unwrap_or(false)
    }

    /// Sets the flag. An explicit `false` is kept so it round-trips.
    pub fn set_suppressed(&mut self, pos: PosId, slot: SlotId, suppressed: bool) {
        self.flags.insert((pos, slot), suppressed);
    }

    /// Builds the persisted key `pos,slot`.
    #[must_use]
    pub fn composite_key(pos: PosId, slot: &SlotId) -> String {
        format!("{}{KEY_SEPARATOR}{slot}", pos.get())
    }

    /// Splits a persisted key at its first separator.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidSuppressionKey`] if the key has no separator
    /// or the part of speech is not a number.
    pub fn parse_key(key: &str) -> Result<(PosId, SlotId)> {
        let invalid = || Error::new(ErrorKind::InvalidSuppressionKey(key.to_string()));
        let (pos, slot) = key.split_once(KEY_SEPARATOR).ok_or_else(invalid)?;
        let pos = pos.parse::<u32>().map_err(|_| invalid())?;
        Ok((PosId::new(pos), SlotId::from_raw(slot)))
    }

    /// Sets a flag from a persisted key.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidSuppressionKey`] for malformed keys.
    pub fn set_raw(&mut self, key: &str, suppressed: bool) -> Result<()> {
        let (pos, slot) = Self::parse_key(key)?;
        self.set_suppressed(pos, slot, suppressed);
        Ok(())
    }

    /// Returns every stored flag as (persisted key, flag), in key order.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, bool)> {
        self.flags
            .iter()
            .map(|((pos, slot), flag)| (Self::composite_key(*pos, slot), *flag))
            .collect()
    }

    /// Returns every suppressed slot of a part of speech.
    #[must_use]
    pub fn suppressed_slots(&self, pos: PosId) -> Vec<SlotId> {
        self.flags
            .iter()
            .filter(|((p, _), flag)| *p == pos && **flag)
            .map(|((_, slot), _)| slot.clone())
            .collect()
    }

    /// Returns the number of stored flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns true if no flags are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
