//! Integration tests for slot enumeration

use std::collections::HashSet;

use paradigm_engine::{SlotEnumerator, SlotKind};
use paradigm_foundation::{PosId, SlotId};
use paradigm_storage::{AxisModel, SuppressionRegistry};
use proptest::prelude::*;

const NOUN: PosId = PosId::new(1);

// =============================================================================
// Totality
// =============================================================================

#[test]
fn grid_times_plus_singletons() {
    let mut model = AxisModel::new();
    let number = model.add_axis(NOUN, "Number");
    for label in ["singular", "dual", "plural"] {
        model.add_value(number, label).unwrap();
    }
    let case = model.add_axis(NOUN, "Case");
    for label in ["nominative", "accusative"] {
        model.add_value(case, label).unwrap();
    }
    model.add_singleton_axis(NOUN, "Vocative");
    model.add_singleton_axis(NOUN, "Citation");

    let slots = SlotEnumerator::new(&model).all(NOUN);
    assert_eq!(slots.len(), 3 * 2 + 2);
    assert_eq!(slots[0].label, "singular nominative");
    assert_eq!(slots[1].label, "singular accusative");
    assert_eq!(slots[6].kind, SlotKind::Singleton);
    assert_eq!(slots[7].label, "Citation");
}

proptest! {
    #[test]
    fn enumeration_counts_and_unique_ids(
        sizes in prop::collection::vec(0usize..4, 0..4),
        singletons in 0usize..3,
    ) {
        let mut model = AxisModel::new();
        for (a, size) in sizes.iter().enumerate() {
            let axis = model.add_axis(NOUN, format!("axis{a}"));
            for v in 0..*size {
                model.add_value(axis, format!("v{v}")).unwrap();
            }
        }
        for s in 0..singletons {
            model.add_singleton_axis(NOUN, format!("single{s}"));
        }

        let slots = SlotEnumerator::new(&model).all(NOUN);
        let grid = if sizes.is_empty() { 0 } else { sizes.iter().product() };
        prop_assert_eq!(slots.len(), grid + singletons);

        let unique: HashSet<&SlotId> = slots.iter().map(|e| &e.slot).collect();
        prop_assert_eq!(unique.len(), slots.len());
    }
}

// =============================================================================
// Visibility & validity
// =============================================================================

#[test]
fn suppressed_slots_stay_valid() {
    let mut model = AxisModel::new();
    let number = model.add_axis(NOUN, "Number");
    let sg = model.add_value(number, "singular").unwrap();
    model.add_value(number, "plural").unwrap();

    let mut suppression = SuppressionRegistry::new();
    let hidden = SlotId::dimensional(&[sg]);
    suppression.set_suppressed(NOUN, hidden.clone(), true);

    let enumerator = SlotEnumerator::new(&model);
    let visible = enumerator.visible(NOUN, &suppression);
    assert_eq!(visible.len(), 1);
    assert!(visible.iter().all(|e| e.slot != hidden));
    assert!(enumerator.is_valid(NOUN, &hidden));
    assert!(enumerator.valid_slots(NOUN).contains(&hidden));
}

#[test]
fn labels_come_back_from_ids() {
    let mut model = AxisModel::new();
    let number = model.add_axis(NOUN, "Number");
    let pl = model.add_value(number, "plural").unwrap();
    let vocative = model.add_singleton_axis(NOUN, "Vocative");

    let enumerator = SlotEnumerator::new(&model);
    assert_eq!(
        enumerator.label_for(NOUN, &SlotId::dimensional(&[pl])),
        Some("plural".to_string())
    );
    assert_eq!(
        enumerator.label_for(NOUN, &SlotId::singleton(vocative)),
        Some("Vocative".to_string())
    );
    assert_eq!(enumerator.label_for(NOUN, &SlotId::dimensional(&[pl]).deprecated()), None);
}
