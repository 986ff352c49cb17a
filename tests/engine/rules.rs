//! Integration tests for the rule store

use paradigm_engine::{Rule, RuleStore, SlotEnumerator};
use paradigm_foundation::{PosId, RuleId, SlotId};
use paradigm_storage::AxisModel;

const VERB: PosId = PosId::new(1);
const NOUN: PosId = PosId::new(2);

fn names(store: &RuleStore, pos: PosId) -> Vec<String> {
    store
        .rules_for_pos(pos)
        .into_iter()
        .map(|(_, rule)| rule.name)
        .collect()
}

fn indices(store: &RuleStore, pos: PosId) -> Vec<Option<u32>> {
    store
        .ordered_ids(pos)
        .into_iter()
        .map(|id| store.get(id).and_then(|rule| rule.index))
        .collect()
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn indices_are_per_part_of_speech() {
    let mut store = RuleStore::new();
    store.add(Rule::new(VERB, SlotId::from(",1,")).with_name("v1"));
    store.add(Rule::new(NOUN, SlotId::from(",5,")).with_name("n1"));
    store.add(Rule::new(VERB, SlotId::from(",2,")).with_name("v2"));

    assert_eq!(indices(&store, VERB), vec![Some(1), Some(2)]);
    assert_eq!(indices(&store, NOUN), vec![Some(1)]);
    assert_eq!(store.parts_of_speech(), vec![VERB, NOUN]);
}

#[test]
fn unindexed_rules_sort_last_in_insertion_order() {
    let mut store = RuleStore::new();
    store.load(Rule::new(VERB, SlotId::from("A")).with_name("late-a"));
    store.load(Rule::new(VERB, SlotId::from("A")).with_name("early").with_index(4));
    store.load(Rule::new(VERB, SlotId::from("A")).with_name("late-b"));

    assert_eq!(names(&store, VERB), vec!["early", "late-a", "late-b"]);
}

#[test]
fn smoothing_makes_indices_contiguous() {
    let mut store = RuleStore::new();
    store.add(Rule::new(VERB, SlotId::from("A")).with_index(10));
    store.add(Rule::new(VERB, SlotId::from("A")).with_index(3));
    let gone = store.add(Rule::new(VERB, SlotId::from("B")).with_index(7));
    store.add(Rule::new(NOUN, SlotId::from("A")).with_index(40));
    store.delete(gone).unwrap();

    assert_eq!(store.smooth(), 3);
    assert_eq!(indices(&store, VERB), vec![Some(1), Some(2)]);
    assert_eq!(indices(&store, NOUN), vec![Some(1)]);
    assert_eq!(store.smooth(), 0);
}

#[test]
fn listing_renumbers_without_mutating() {
    let mut store = RuleStore::new();
    let a = store.add(Rule::new(VERB, SlotId::from("A")).with_index(5));
    store.add(Rule::new(VERB, SlotId::from("A")).with_index(9));

    let listed: Vec<Option<u32>> = store
        .rules_for_pos(VERB)
        .into_iter()
        .map(|(_, rule)| rule.index)
        .collect();
    assert_eq!(listed, vec![Some(1), Some(2)]);
    assert_eq!(store.get(a).unwrap().index, Some(5));
}

// =============================================================================
// Block moves
// =============================================================================

fn lane(store: &mut RuleStore, labels: &[&str]) -> Vec<RuleId> {
    labels
        .iter()
        .map(|name| store.add(Rule::new(VERB, SlotId::from("A")).with_name(*name)))
        .collect()
}

#[test]
fn block_moves_swap_with_neighbor() {
    let mut store = RuleStore::new();
    let ids = lane(&mut store, &["a", "b", "c", "d"]);
    store.add(Rule::new(VERB, SlotId::from("B")).with_name("other"));

    assert!(store.move_block_up(&ids[2..4]));
    assert_eq!(names(&store, VERB), vec!["a", "c", "d", "b", "other"]);

    assert!(store.move_block_down(&ids[0..1]));
    assert_eq!(names(&store, VERB), vec!["c", "a", "d", "b", "other"]);
}

#[test]
fn block_moves_refuse_bad_blocks() {
    let mut store = RuleStore::new();
    let ids = lane(&mut store, &["a", "b", "c"]);
    let elsewhere = store.add(Rule::new(VERB, SlotId::from("B")).with_name("x"));

    assert!(!store.move_block_up(&[]));
    assert!(!store.move_block_up(&ids[0..1]));
    assert!(!store.move_block_down(&ids[2..3]));
    assert!(!store.move_block_up(&[ids[0], ids[2]]));
    assert!(!store.move_block_up(&[ids[1], elsewhere]));
    assert_eq!(names(&store, VERB), vec!["a", "b", "c", "x"]);
}

// =============================================================================
// Bulk & sibling edits
// =============================================================================

#[test]
fn bulk_update_and_delete_match_content() {
    let template = Rule::new(VERB, SlotId::from("A"))
        .with_name("plural")
        .with_transform("$", "s");
    let mut store = RuleStore::new();
    store.add(template.clone());
    store.add(template.retarget(SlotId::from("B")));
    store.add(template.clone().with_pattern("k.*"));

    let updated = template.clone().with_transform("s$", "z");
    assert_eq!(store.bulk_update(VERB, &template, &updated), 2);
    assert_eq!(store.bulk_delete(VERB, &[updated]), 2);
    assert_eq!(store.len(), 1);
}

#[test]
fn sibling_copy_covers_the_column() {
    let mut axes = AxisModel::new();
    let tense = axes.add_axis(VERB, "Tense");
    let present = axes.add_value(tense, "present").unwrap();
    axes.add_value(tense, "past").unwrap();
    let person = axes.add_axis(VERB, "Person");
    let first = axes.add_value(person, "1").unwrap();
    let second = axes.add_value(person, "2").unwrap();
    let third = axes.add_value(person, "3").unwrap();

    let origin = SlotId::dimensional(&[present, first]);
    let mut store = RuleStore::new();
    let template = Rule::new(VERB, origin.clone()).with_transform("$", "u");
    store.add(template.clone());

    let enumerator = SlotEnumerator::new(&axes);
    let added =
        store.copy_to_sibling_slots(&enumerator, VERB, 0, present, &[template.clone()], &origin);
    assert_eq!(added.len(), 2);
    let targets: Vec<SlotId> = added
        .iter()
        .map(|id| store.get(*id).unwrap().slot.clone())
        .collect();
    assert_eq!(
        targets,
        vec![
            SlotId::dimensional(&[present, second]),
            SlotId::dimensional(&[present, third]),
        ]
    );

    assert_eq!(
        store.delete_from_sibling_slots(&enumerator, VERB, 0, present, &[template]),
        3
    );
    assert!(store.is_empty());
}

#[test]
fn orphans_are_rules_off_the_grid() {
    let mut axes = AxisModel::new();
    let number = axes.add_axis(NOUN, "Number");
    let sg = axes.add_value(number, "singular").unwrap();

    let mut store = RuleStore::new();
    store.add(Rule::new(NOUN, SlotId::dimensional(&[sg])));
    let stale = store.add(Rule::new(NOUN, SlotId::from(",99,")));
    let unindexed = store.load(Rule::new(NOUN, SlotId::from("77")));

    let valid = SlotEnumerator::new(&axes).valid_slots(NOUN);
    assert_eq!(store.find_orphaned(NOUN, &valid), vec![stale, unindexed]);
    assert_eq!(store.get(unindexed).unwrap().index, Some(3));
}
