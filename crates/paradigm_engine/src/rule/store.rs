//! Ordered rule storage.
//!
//! Rules live in an arena keyed by [`RuleId`]. Ordering is carried by each
//! rule's `index`, which is unique within its part of speech. Reads renumber
//! indices to `1..N` on the returned copies; [`RuleStore::smooth`] persists the
//! renumbering.

use std::collections::HashSet;

use im::OrdMap;
use paradigm_foundation::{
    ClassId, ClassValueId, Error, IdAllocator, PosId, Result, RuleId, SlotId, ValueId,
};
use paradigm_storage::{Word, WordClasses};

use super::Rule;
use crate::enumerate::SlotEnumerator;

/// A class requirement that no longer validates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidClassFilter {
    /// The rule carrying the requirement.
    pub rule: RuleId,
    /// Required class.
    pub class: ClassId,
    /// Required value.
    pub value: ClassValueId,
}

/// All rules of all parts of speech.
#[derive(Clone, Debug, Default)]
pub struct RuleStore {
    rules: OrdMap<RuleId, Rule>,
    ids: IdAllocator,
}

impl RuleStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Adds a rule, assigning the next index of its part of speech if unset.
    ///
    /// Patterns are not checked here; see [`Rule::validate`].
    pub fn add(&mut self, mut rule: Rule) -> RuleId {
        if rule.index.is_none() {
            rule.index = Some(self.next_free_index(rule.pos));
        }
        let id = RuleId::new(self.ids.allocate());
        tracing::debug!(rule = %id, pos = %rule.pos, slot = %rule.slot, index = ?rule.index, "rule added");
        self.rules.insert(id, rule);
        id
    }

    /// Inserts a rule exactly as given, keeping a missing index missing.
    ///
    /// Used when loading persisted rules.
    pub fn load(&mut self, rule: Rule) -> RuleId {
        let id = RuleId::new(self.ids.allocate());
        self.rules.insert(id, rule);
        id
    }

    /// Returns a rule by id.
    #[must_use]
    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        self.rules.get(&id)
    }

    /// Replaces a rule's content. A missing index on `rule` keeps the old index.
    ///
    /// # Errors
    /// Returns [`paradigm_foundation::ErrorKind::RuleNotFound`] if the rule does not exist.
    pub fn replace(&mut self, id: RuleId, mut rule: Rule) -> Result<()> {
        let existing = self
            .rules
            .get_mut(&id)
            .ok_or_else(|| Error::rule_not_found(id))?;
        if rule.index.is_none() {
            rule.index = existing.index;
        }
        *existing = rule;
        Ok(())
    }

    /// Deletes a rule.
    ///
    /// # Errors
    /// Returns [`paradigm_foundation::ErrorKind::RuleNotFound`] if the rule does not exist.
    pub fn delete(&mut self, id: RuleId) -> Result<Rule> {
        let removed = self.rules.remove(&id).ok_or_else(|| Error::rule_not_found(id))?;
        tracing::debug!(rule = %id, pos = %removed.pos, slot = %removed.slot, "rule deleted");
        Ok(removed)
    }

    /// Deletes every rule targeting a slot. Returns how many were deleted.
    pub fn delete_for_slot(&mut self, pos: PosId, slot: &SlotId) -> usize {
        self.delete_where(|rule| rule.pos == pos && rule.slot == *slot)
    }

    /// Deletes every rule of a part of speech. Returns how many were deleted.
    pub fn wipe(&mut self, pos: PosId) -> usize {
        self.delete_where(|rule| rule.pos == pos)
    }

    fn delete_where(&mut self, predicate: impl Fn(&Rule) -> bool) -> usize {
        let doomed: Vec<RuleId> = self
            .rules
            .iter()
            .filter(|(_, rule)| predicate(rule))
            .map(|(id, _)| *id)
            .collect();
        for id in &doomed {
            self.rules.remove(id);
        }
        doomed.len()
    }

    /// Returns the index after the highest in use, or `None` once `u32::MAX` is taken.
    fn next_index(&self, pos: PosId) -> Option<u32> {
        self.rules
            .values()
            .filter(|rule| rule.pos == pos)
            .filter_map(|rule| rule.index)
            .max()
            .map_or(Some(1), |max| max.checked_add(1))
    }

    /// Like `next_index`, but smooths the bucket when its indices are exhausted.
    fn next_free_index(&mut self, pos: PosId) -> u32 {
        if let Some(index) = self.next_index(pos) {
            return index;
        }
        self.smooth_pos(pos);
        self.next_index(pos).unwrap_or(u32::MAX)
    }

    // =========================================================================
    // Ordered reads
    // =========================================================================

    /// Returns the ids of a part of speech's rules in evaluation order.
    ///
    /// Sorted by index; rules without an index come last; ties fall back to
    /// insertion order.
    #[must_use]
    pub fn ordered_ids(&self, pos: PosId) -> Vec<RuleId> {
        let mut ids: Vec<(u32, RuleId)> = self
            .rules
            .iter()
            .filter(|(_, rule)| rule.pos == pos)
            .map(|(id, rule)| (rule.index.unwrap_or(u32::MAX), *id))
            .collect();
        ids.sort_unstable();
        ids.into_iter().map(|(_, id)| id).collect()
    }

    /// Returns every rule of a part of speech in order, with indices renumbered `1..N`.
    #[must_use]
    pub fn rules_for_pos(&self, pos: PosId) -> Vec<(RuleId, Rule)> {
        self.ordered_ids(pos)
            .into_iter()
            .zip(1u32..)
            .filter_map(|(id, index)| {
                self.rules.get(&id).map(|rule| {
                    let mut copy = rule.clone();
                    copy.index = Some(index);
                    (id, copy)
                })
            })
            .collect()
    }

    /// Returns every rule of the word's part of speech in order.
    #[must_use]
    pub fn rules_for_word(&self, word: &Word) -> Vec<(RuleId, Rule)> {
        self.rules_for_pos(word.pos)
    }

    /// Returns the rules targeting one slot, in order.
    ///
    /// Indices are positions within the whole part of speech.
    #[must_use]
    pub fn rules_for_slot(&self, pos: PosId, slot: &SlotId) -> Vec<(RuleId, Rule)> {
        self.rules_for_pos(pos)
            .into_iter()
            .filter(|(_, rule)| rule.slot == *slot)
            .collect()
    }

    /// Returns the parts of speech that own at least one rule, ascending.
    #[must_use]
    pub fn parts_of_speech(&self) -> Vec<PosId> {
        let mut all: Vec<PosId> = self.rules.values().map(|rule| rule.pos).collect();
        all.sort_unstable();
        all.dedup();
        all
    }

    /// Iterates over every rule in id order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleId, &Rule)> + '_ {
        self.rules.iter().map(|(id, rule)| (*id, rule))
    }

    // =========================================================================
    // Reordering
    // =========================================================================

    /// Renumbers every bucket to `1..N` in place. Returns how many indices changed.
    pub fn smooth(&mut self) -> usize {
        let changed = self
            .parts_of_speech()
            .into_iter()
            .map(|pos| self.smooth_pos(pos))
            .sum();
        tracing::debug!(changed, "rules smoothed");
        changed
    }

    fn smooth_pos(&mut self, pos: PosId) -> usize {
        let mut changed = 0;
        for (id, index) in self.ordered_ids(pos).into_iter().zip(1u32..) {
            if let Some(rule) = self.rules.get_mut(&id) {
                if rule.index != Some(index) {
                    rule.index = Some(index);
                    changed += 1;
                }
            }
        }
        changed
    }

    fn has_duplicate_indices(&self, pos: PosId) -> bool {
        let mut seen = HashSet::new();
        self.rules
            .values()
            .filter(|rule| rule.pos == pos)
            .filter_map(|rule| rule.index)
            .any(|index| !seen.insert(index))
    }

    /// Moves a contiguous block of same-slot rules above its preceding neighbor.
    ///
    /// Returns false (changing nothing) if the block is empty, spans several
    /// slots, is not contiguous within its slot, or is already first.
    pub fn move_block_up(&mut self, block: &[RuleId]) -> bool {
        self.move_block(block, true)
    }

    /// Moves a contiguous block of same-slot rules below its following neighbor.
    ///
    /// Returns false under the same conditions as [`move_block_up`](Self::move_block_up),
    /// or if the block is already last.
    pub fn move_block_down(&mut self, block: &[RuleId]) -> bool {
        self.move_block(block, false)
    }

    fn move_block(&mut self, block: &[RuleId], up: bool) -> bool {
        let Some(first) = block.first().and_then(|id| self.rules.get(id)) else {
            return false;
        };
        let (pos, slot) = (first.pos, first.slot.clone());
        if block
            .iter()
            .any(|id| self.rules.get(id).is_none_or(|r| r.pos != pos || r.slot != slot))
        {
            return false;
        }

        self.index_unindexed(pos);
        if self.has_duplicate_indices(pos) {
            self.smooth_pos(pos);
        }
        let lane: Vec<RuleId> = self
            .ordered_ids(pos)
            .into_iter()
            .filter(|id| self.rules.get(id).is_some_and(|r| r.slot == slot))
            .collect();
        let mut positions: Vec<usize> = block
            .iter()
            .filter_map(|id| lane.iter().position(|l| l == id))
            .collect();
        positions.sort_unstable();
        positions.dedup();
        let (Some(&start), Some(&end)) = (positions.first(), positions.last()) else {
            return false;
        };
        if end - start + 1 != positions.len() {
            return false;
        }
        let neighbor = if up {
            if start == 0 {
                return false;
            }
            start - 1
        } else {
            if end + 1 >= lane.len() {
                return false;
            }
            end + 1
        };

        let span_start = start.min(neighbor);
        let span_end = end.max(neighbor);
        let indices: Vec<u32> = lane[span_start..=span_end]
            .iter()
            .filter_map(|id| self.rules.get(id).and_then(|r| r.index))
            .collect();
        let mut reordered: Vec<RuleId> = lane[start..=end].to_vec();
        if up {
            reordered.push(lane[neighbor]);
        } else {
            reordered.insert(0, lane[neighbor]);
        }
        let mut changed = false;
        for (id, index) in reordered.iter().zip(indices) {
            if let Some(rule) = self.rules.get_mut(id) {
                changed |= rule.index != Some(index);
                rule.index = Some(index);
            }
        }
        if changed {
            tracing::debug!(%pos, %slot, up, moved = block.len(), "rule block moved");
        }
        changed
    }

    fn index_unindexed(&mut self, pos: PosId) {
        let Some(mut next) = self.next_index(pos) else {
            self.smooth_pos(pos);
            return;
        };
        for id in self.ordered_ids(pos) {
            let Some(rule) = self.rules.get_mut(&id) else {
                continue;
            };
            if rule.index.is_some() {
                continue;
            }
            rule.index = Some(next);
            match next.checked_add(1) {
                Some(after) => next = after,
                // Out of indices; renumbering from 1 makes room.
                None => {
                    self.smooth_pos(pos);
                    return;
                }
            }
        }
    }

    // =========================================================================
    // Schema drift
    // =========================================================================

    /// Returns rules whose slot is not in `valid`, in order.
    ///
    /// Rules of the part of speech that lack an index receive trailing indices.
    pub fn find_orphaned(&mut self, pos: PosId, valid: &HashSet<SlotId>) -> Vec<RuleId> {
        self.index_unindexed(pos);
        let orphaned: Vec<RuleId> = self
            .ordered_ids(pos)
            .into_iter()
            .filter(|id| self.rules.get(id).is_some_and(|r| !valid.contains(&r.slot)))
            .collect();
        if !orphaned.is_empty() {
            tracing::debug!(%pos, count = orphaned.len(), "orphaned rules found");
        }
        orphaned
    }

    /// Returns every class requirement of the part of speech's rules that the
    /// class system no longer validates.
    #[must_use]
    pub fn invalid_class_filters(
        &self,
        pos: PosId,
        classes: &dyn WordClasses,
    ) -> Vec<InvalidClassFilter> {
        self.ordered_ids(pos)
            .into_iter()
            .filter_map(|id| self.rules.get(&id).map(|rule| (id, rule)))
            .flat_map(|(id, rule)| {
                rule.filter
                    .requirements()
                    .filter(|(class, value)| !classes.is_valid_class_value(*class, *value))
                    .map(move |(class, value)| InvalidClassFilter {
                        rule: id,
                        class,
                        value,
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    // =========================================================================
    // Bulk edits
    // =========================================================================

    /// Rewrites every rule of `pos` whose content equals `before` to carry the
    /// content of `after`. Placement (slot, index) is kept. Returns the count.
    pub fn bulk_update(&mut self, pos: PosId, before: &Rule, after: &Rule) -> usize {
        let targets: Vec<RuleId> = self
            .rules
            .iter()
            .filter(|(_, rule)| rule.pos == pos && rule.same_content(before))
            .map(|(id, _)| *id)
            .collect();
        for id in &targets {
            if let Some(rule) = self.rules.get_mut(id) {
                rule.name.clone_from(&after.name);
                rule.pattern.clone_from(&after.pattern);
                rule.transforms.clone_from(&after.transforms);
                rule.filter = after.filter.clone();
            }
        }
        targets.len()
    }

    /// Deletes every rule of `pos` whose content equals any template.
    pub fn bulk_delete(&mut self, pos: PosId, templates: &[Rule]) -> usize {
        self.delete_where(|rule| rule.pos == pos && templates.iter().any(|t| rule.same_content(t)))
    }

    /// Copies `rules` to every grid slot selecting `value` at `position`,
    /// except `exclude`. Copies go to the end of the ordering.
    pub fn copy_to_sibling_slots(
        &mut self,
        enumerator: &SlotEnumerator<'_>,
        pos: PosId,
        position: usize,
        value: ValueId,
        rules: &[Rule],
        exclude: &SlotId,
    ) -> Vec<RuleId> {
        let mut added = Vec::new();
        for entry in enumerator.siblings(pos, position, value) {
            if entry.slot == *exclude {
                continue;
            }
            for rule in rules {
                let mut copy = rule.retarget(entry.slot.clone());
                copy.pos = pos;
                added.push(self.add(copy));
            }
        }
        added
    }

    /// Deletes, from every grid slot selecting `value` at `position`, the
    /// rules whose content equals any template.
    pub fn delete_from_sibling_slots(
        &mut self,
        enumerator: &SlotEnumerator<'_>,
        pos: PosId,
        position: usize,
        value: ValueId,
        templates: &[Rule],
    ) -> usize {
        let slots: HashSet<SlotId> = enumerator
            .siblings(pos, position, value)
            .into_iter()
            .map(|entry| entry.slot)
            .collect();
        self.delete_where(|rule| {
            rule.pos == pos
                && slots.contains(&rule.slot)
                && templates.iter().any(|t| rule.same_content(t))
        })
    }

    /// Marks every rule of `pos` as applying regardless of class.
    pub fn set_all_universal(&mut self, pos: PosId) {
        for id in self.ordered_ids(pos) {
            if let Some(rule) = self.rules.get_mut(&id) {
                rule.filter = super::ClassFilter::Universal;
            }
        }
    }
}
