//! Integration tests for the suppression registry

use paradigm_foundation::{AxisId, ErrorKind, PosId, SlotId};
use paradigm_storage::SuppressionRegistry;

const NOUN: PosId = PosId::new(3);

#[test]
fn keys_join_pos_and_slot() {
    assert_eq!(
        SuppressionRegistry::composite_key(NOUN, &SlotId::from(",1,2,")),
        "3,,1,2,"
    );
    assert_eq!(
        SuppressionRegistry::composite_key(NOUN, &SlotId::singleton(AxisId::new(8))),
        "3,8"
    );
}

#[test]
fn keys_split_at_first_separator() {
    let (pos, slot) = SuppressionRegistry::parse_key("3,,1,2,").unwrap();
    assert_eq!(pos, NOUN);
    assert_eq!(slot, SlotId::from(",1,2,"));

    for bad in ["", "3", "x,,1,"] {
        let err = SuppressionRegistry::parse_key(bad).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidSuppressionKey(_)));
    }
}

#[test]
fn flags_are_independent_per_pos() {
    let mut registry = SuppressionRegistry::new();
    let slot = SlotId::from(",1,");
    registry.set_suppressed(NOUN, slot.clone(), true);
    assert!(registry.is_suppressed(NOUN, &slot));
    assert!(!registry.is_suppressed(PosId::new(4), &slot));

    registry.set_raw("4,,1,", false).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.suppressed_slots(NOUN), vec![slot]);
    assert_eq!(
        registry.entries(),
        vec![("3,,1,".to_string(), true), ("4,,1,".to_string(), false)]
    );
}
