//! Integration tests for form generation

use paradigm_engine::{
    FormGenerator, FormSource, GeneratorConfig, Rule, RuleOutcome, RuleStore, SkipReason,
};
use paradigm_foundation::{PosId, SlotId, WordId};
use paradigm_storage::{ClassRegistry, Word};

const NOUN: PosId = PosId::new(1);
const VERB: PosId = PosId::new(2);

fn kato() -> Word {
    Word::new(WordId::new(1), "kato", NOUN)
}

// =============================================================================
// Empty vs unmatched
// =============================================================================

#[test]
fn no_rules_at_all_yields_empty_form() {
    let mut rules = RuleStore::new();
    rules.add(Rule::new(VERB, SlotId::from(",1,")).with_transform("$", "s"));
    let classes = ClassRegistry::new();

    let generation = FormGenerator::new(&rules, &classes)
        .decline(&kato(), &SlotId::from(",1,"))
        .unwrap();
    assert_eq!(generation.form, "");
    assert_eq!(generation.source, FormSource::Absent);
}

#[test]
fn rules_for_other_slots_yield_headword() {
    let mut rules = RuleStore::new();
    rules.add(Rule::new(NOUN, SlotId::from("A")).with_transform("$", "s"));
    let classes = ClassRegistry::new();

    let generation = FormGenerator::new(&rules, &classes)
        .decline(&kato(), &SlotId::from("B"))
        .unwrap();
    assert_eq!(generation.form, "kato");
    assert_eq!(generation.source, FormSource::Generated);
    assert!(generation.trace.unwrap().is_empty());
}

// =============================================================================
// Ordering & triggers
// =============================================================================

#[test]
fn rules_apply_in_index_order_against_the_headword() {
    let slot = SlotId::from(",2,");
    let mut rules = RuleStore::new();
    rules.add(Rule::new(NOUN, slot.clone()).with_name("plural").with_transform("o$", "oj"));
    // The trigger sees "kato", not "katoj".
    rules.add(
        Rule::new(NOUN, slot.clone())
            .with_name("only-after-j")
            .with_pattern(".*j")
            .with_transform("$", "!"),
    );
    rules.add(
        Rule::new(NOUN, slot.clone())
            .with_name("accusative")
            .with_pattern("kat.*")
            .with_transform("$", "n"),
    );
    let classes = ClassRegistry::new();

    let generation = FormGenerator::new(&rules, &classes)
        .decline(&kato(), &slot)
        .unwrap();
    assert_eq!(generation.form, "katojn");

    let trace = generation.trace.unwrap();
    assert_eq!(trace.applied_count(), 2);
    assert_eq!(trace.skipped_count(), 1);
    assert_eq!(trace.steps[1].name, "only-after-j");
    assert_eq!(
        trace.steps[1].outcome,
        RuleOutcome::Skipped(SkipReason::PatternMismatch)
    );
}

#[test]
fn replacement_supports_groups_and_escapes() {
    let slot = SlotId::from(",1,");
    let mut rules = RuleStore::new();
    rules.add(
        Rule::new(NOUN, slot.clone())
            .with_transform("^(k)(a)", "$2$1")
            .with_transform("o$", "\\$"),
    );
    let classes = ClassRegistry::new();

    let generation = FormGenerator::new(&rules, &classes)
        .decline(&kato(), &slot)
        .unwrap();
    assert_eq!(generation.form, "akt$");
}

// =============================================================================
// Class filters
// =============================================================================

#[test]
fn class_filters_gate_rules() {
    let slot = SlotId::from(",1,");
    let mut classes = ClassRegistry::new();
    let gender = classes.add_class("Gender", [NOUN]);
    let feminine = classes.add_value(gender, "feminine").unwrap();
    let masculine = classes.add_value(gender, "masculine").unwrap();

    let mut rules = RuleStore::new();
    rules.add(
        Rule::new(NOUN, slot.clone())
            .with_class(gender, feminine)
            .with_transform("o$", "ino"),
    );

    let generator = FormGenerator::new(&rules, &classes);
    let fem = kato().with_class(gender, feminine);
    let masc = kato().with_class(gender, masculine);
    assert_eq!(generator.decline(&fem, &slot).unwrap().form, "katino");
    let generation = generator.decline(&masc, &slot).unwrap();
    assert_eq!(generation.form, "kato");
    assert!(matches!(
        generation.trace.unwrap().steps[0].outcome,
        RuleOutcome::Skipped(SkipReason::ClassMismatch { .. })
    ));
}

// =============================================================================
// Failure & determinism
// =============================================================================

#[test]
fn malformed_rule_aborts_the_call() {
    let slot = SlotId::from(",1,");
    let mut rules = RuleStore::new();
    rules.add(Rule::new(NOUN, slot.clone()).with_transform("o$", "oj"));
    rules.add(Rule::new(NOUN, slot.clone()).with_name("broken").with_transform("[", "x"));
    let classes = ClassRegistry::new();

    let err = FormGenerator::new(&rules, &classes)
        .decline(&kato(), &slot)
        .unwrap_err();
    assert!(err.is_malformed_regex());
    assert!(err.to_string().contains("broken"));
    let context = err.context.unwrap();
    assert_eq!(context.source.as_deref(), Some("kato"));
}

#[test]
fn malformed_trigger_on_the_target_slot_aborts() {
    let slot = SlotId::from(",1,");
    let mut rules = RuleStore::new();
    rules.add(Rule::new(NOUN, slot.clone()).with_name("unclosed").with_pattern("("));
    let classes = ClassRegistry::new();

    let err = FormGenerator::new(&rules, &classes)
        .decline(&kato(), &slot)
        .unwrap_err();
    assert!(err.is_malformed_regex());
    let context = err.context.unwrap();
    assert_eq!(context.source.as_deref(), Some("kato"));
    assert!(context.stack.iter().any(|frame| frame == "rule unclosed"));
    assert!(context.stack.iter().any(|frame| frame == "slot ,1,"));
}

#[test]
fn broken_replacement_text_aborts_the_call() {
    let slot = SlotId::from(",1,");
    let classes = ClassRegistry::new();
    for replacement in ["$2x", "$x", "a\\"] {
        let mut rules = RuleStore::new();
        rules.add(
            Rule::new(NOUN, slot.clone())
                .with_name("ending")
                .with_transform("o$", replacement),
        );
        let err = FormGenerator::new(&rules, &classes)
            .decline(&kato(), &slot)
            .unwrap_err();
        assert!(err.is_malformed_regex(), "{replacement}");
        assert!(err.to_string().contains("ending"), "{replacement}");
    }
}

#[test]
fn trailing_digits_past_the_group_count_are_literal() {
    let slot = SlotId::from(",1,");
    let mut rules = RuleStore::new();
    rules.add(Rule::new(NOUN, slot.clone()).with_transform("(o)$", "$10"));
    let classes = ClassRegistry::new();

    let generation = FormGenerator::new(&rules, &classes)
        .decline(&kato(), &slot)
        .unwrap();
    assert_eq!(generation.form, "kato0");
}

#[test]
fn generation_is_deterministic() {
    let slot = SlotId::from(",1,");
    let mut rules = RuleStore::new();
    rules.add(Rule::new(NOUN, slot.clone()).with_transform("a", "e"));
    rules.add(Rule::new(NOUN, slot.clone()).with_pattern("x.*").with_transform("$", "y"));
    let classes = ClassRegistry::new();
    let generator = FormGenerator::new(&rules, &classes);

    let first = generator.decline(&kato(), &slot).unwrap();
    let second = generator.decline(&kato(), &slot).unwrap();
    assert_eq!(first, second);

    let untraced = FormGenerator::new(&rules, &classes)
        .with_config(GeneratorConfig::untraced())
        .decline(&kato(), &slot)
        .unwrap();
    assert_eq!(untraced.form, first.form);
    assert!(untraced.trace.is_none());
}
