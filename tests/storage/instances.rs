//! Integration tests for stored forms and deprecation

use std::collections::HashSet;

use paradigm_foundation::{ErrorKind, SlotId, WordId};
use paradigm_storage::{Instance, InstanceStore};

const KATO: WordId = WordId::new(1);
const IRI: WordId = WordId::new(2);

fn slot(raw: &str) -> SlotId {
    SlotId::from(raw)
}

#[test]
fn deprecated_forms_are_stored_minus_valid() {
    let mut store = InstanceStore::new();
    store.set(KATO, slot(",1,"), "kato");
    store.set(KATO, slot(",2,"), "katoj");
    store.set(KATO, slot(",3,"), "katon");

    let valid: HashSet<SlotId> = [slot(",1,"), slot(",4,")].into_iter().collect();
    let deprecated: HashSet<SlotId> = store.deprecated_forms(KATO, &valid).into_iter().collect();
    let expected: HashSet<SlotId> = [slot(",2,"), slot(",3,")].into_iter().collect();
    assert_eq!(deprecated, expected);
    assert!(store.has_deprecated_forms(KATO, &valid));
    assert!(!store.has_deprecated_forms(IRI, &valid));
}

#[test]
fn notes_survive_value_updates() {
    let mut store = InstanceStore::new();
    store.set(KATO, slot(",1,"), "kato");
    store.set_notes(KATO, &slot(",1,"), "archaic").unwrap();
    store.set(KATO, slot(",1,"), "katto");

    let instance = store.get(KATO, &slot(",1,")).unwrap();
    assert_eq!(instance.value, "katto");
    assert_eq!(instance.notes, "archaic");

    let err = store.set_notes(KATO, &slot(",9,"), "x").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InstanceNotFound { .. }));
}

#[test]
fn deprecating_twice_keeps_both_generations() {
    let mut store = InstanceStore::new();
    store.set(KATO, slot(",1,"), "old");
    assert_eq!(store.deprecate_word(KATO), 1);
    store.set(KATO, slot(",1,"), "new");
    assert_eq!(store.deprecate_word(KATO), 1);

    assert_eq!(store.len(), 2);
    let slots = store.slots(KATO);
    assert!(slots.contains(&slot("D,1,")));
    assert!(slots.contains(&slot("DD,1,")));
    assert_eq!(store.get(KATO, &slot("D,1,")).unwrap().value, "old");
    assert_eq!(store.get(KATO, &slot("DD,1,")).unwrap().value, "new");
}

#[test]
fn restore_moves_back_unless_occupied() {
    let mut store = InstanceStore::new();
    store.insert(KATO, Instance::new(slot("D,1,"), "kato"));
    assert_eq!(store.restore(KATO, &slot("D,1,")).unwrap(), slot(",1,"));
    assert_eq!(store.get(KATO, &slot(",1,")).unwrap().slot, slot(",1,"));

    store.insert(KATO, Instance::new(slot("D,1,"), "older"));
    let err = store.restore(KATO, &slot("D,1,")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SlotOccupied { .. }));
}

#[test]
fn clearing_forms() {
    let mut store = InstanceStore::new();
    store.set(KATO, slot(",1,"), "kato");
    store.set(KATO, slot(",2,"), "katoj");
    store.set(IRI, slot(",1,"), "iri");

    assert!(store.clear(KATO, &slot(",2,")).is_some());
    assert_eq!(store.clear_word(KATO), 1);
    assert_eq!(store.words(), vec![IRI]);
    assert_eq!(store.iter().count(), 1);
}
