//! Integration tests for slot identifiers

use paradigm_foundation::{AxisId, DELIMITER, DEPRECATION_TAG, SlotId, ValueId};

fn values(raw: &[u32]) -> Vec<ValueId> {
    raw.iter().copied().map(ValueId::new).collect()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn dimensional_ids_wrap_values_in_delimiters() {
    let slot = SlotId::dimensional(&values(&[3, 7]));
    assert_eq!(slot.as_str(), ",3,7,");
    assert!(slot.as_str().starts_with(DELIMITER));
    assert!(slot.is_dimensional());
    assert!(!slot.is_singleton());
}

#[test]
fn singleton_ids_are_the_axis_id() {
    let slot = SlotId::singleton(AxisId::new(12));
    assert_eq!(slot.as_str(), "12");
    assert_eq!(slot.singleton_axis(), Some(AxisId::new(12)));
    assert!(!slot.is_dimensional());
}

#[test]
fn raw_ids_are_not_validated() {
    let slot = SlotId::from_raw("not a slot");
    assert!(!slot.is_dimensional());
    assert!(!slot.is_singleton());
    assert_eq!(slot.components(), None);
}

// =============================================================================
// Components
// =============================================================================

#[test]
fn components_follow_axis_order() {
    let slot = SlotId::from(",4,1,9,");
    assert_eq!(slot.components(), Some(values(&[4, 1, 9])));
    assert_eq!(slot.value_at(1), Some(ValueId::new(1)));
    assert_eq!(slot.value_at(3), None);
    assert!(slot.selects(2, ValueId::new(9)));
    assert!(!slot.selects(0, ValueId::new(9)));
}

// =============================================================================
// Deprecation
// =============================================================================

#[test]
fn deprecation_prefixes_tag() {
    let slot = SlotId::from(",1,2,");
    let dead = slot.deprecated();
    assert!(dead.as_str().starts_with(DEPRECATION_TAG));
    assert!(dead.is_deprecated());
    assert!(!dead.is_dimensional());
    assert_eq!(dead.components(), None);
}

#[test]
fn undeprecation_strips_every_tag() {
    let slot = SlotId::singleton(AxisId::new(5));
    let buried = slot.deprecated().deprecated();
    assert_eq!(buried.as_str(), "DD5");
    assert!(!buried.is_singleton());
    assert_eq!(buried.undeprecated(), slot);
}

#[test]
fn display_matches_raw_text() {
    let slot = SlotId::from(",2,");
    assert_eq!(slot.to_string(), ",2,");
    assert_eq!(slot.clone().into_string(), ",2,".to_string());
}
