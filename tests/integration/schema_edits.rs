//! Axis edits and the forms they strand.

use paradigm_foundation::SlotId;

use crate::fixture::{HUNDO, KATO, NOUN, language};

#[test]
fn adding_a_value_keeps_saved_forms_live() {
    let mut lang = language();
    let slot = lang.slot(lang.singular, lang.nominative);
    lang.session.set_override(KATO, slot.clone(), "kato");

    lang.session.add_value(lang.number, "dual").unwrap();
    assert_eq!(lang.session.all_slots(NOUN).len(), 3 * 2 + 1);
    assert!(lang.session.override_form(KATO, &slot).is_some());
    assert!(!lang.session.has_deprecated_forms(KATO).unwrap());
}

#[test]
fn adding_an_axis_deprecates_every_form_of_the_pos() {
    let mut lang = language();
    let slot = lang.slot(lang.singular, lang.accusative);
    lang.session.set_override(KATO, slot.clone(), "katon");
    lang.session.set_override(HUNDO, slot.clone(), "hundon");

    let definiteness = lang.session.add_axis(NOUN, "Definiteness");
    lang.session.add_value(definiteness, "definite").unwrap();

    assert!(lang.session.override_form(KATO, &slot).is_none());
    assert_eq!(
        lang.session.override_form(KATO, &slot.deprecated()).unwrap().value,
        "katon"
    );
    assert_eq!(lang.session.deprecated_forms(HUNDO).unwrap(), vec![slot.deprecated()]);
}

#[test]
fn removed_value_strands_forms_until_restored() {
    let mut lang = language();
    let kept = lang.slot(lang.singular, lang.nominative);
    let lost = lang.slot(lang.plural, lang.nominative);
    lang.session.set_override(KATO, kept.clone(), "kato");
    lang.session.set_override(KATO, lost.clone(), "katoj");

    lang.session.remove_value(lang.number, lang.plural).unwrap();
    let mut stranded = lang.session.deprecated_forms(KATO).unwrap();
    stranded.sort();
    let mut expected = vec![kept.deprecated(), lost.deprecated()];
    expected.sort();
    assert_eq!(stranded, expected);

    // The singular slot still exists, so its form can come back.
    assert_eq!(
        lang.session.restore_override(KATO, &kept.deprecated()).unwrap(),
        kept
    );
    assert_eq!(lang.session.deprecated_forms(KATO).unwrap(), vec![lost.deprecated()]);
}

#[test]
fn singleton_toggle_deprecates_and_rebuilds_slots() {
    let mut lang = language();
    let vocative = SlotId::singleton(lang.vocative);
    lang.session.set_override(KATO, vocative.clone(), "kato!");

    lang.session.set_singleton(lang.vocative, false).unwrap();
    assert!(lang.session.singleton_slots(NOUN).is_empty());
    // An empty dimensional axis collapses the grid.
    assert!(lang.session.dimensional_slots(NOUN).is_empty());
    assert!(lang.session.has_deprecated_forms(KATO).unwrap());

    lang.session.set_singleton(lang.vocative, true).unwrap();
    assert_eq!(lang.session.all_slots(NOUN).len(), 5);
    assert_eq!(
        lang.session.override_form(KATO, &vocative.deprecated().deprecated()).unwrap().value,
        "kato!"
    );
}

#[test]
fn renames_do_not_deprecate() {
    let mut lang = language();
    let slot = lang.slot(lang.singular, lang.nominative);
    lang.session.set_override(KATO, slot.clone(), "kato");

    lang.session.rename_axis(lang.case, "Kazo").unwrap();
    lang.session
        .rename_value(lang.case, lang.nominative, "nominativo")
        .unwrap();
    assert_eq!(
        lang.session.label_for(NOUN, &slot),
        Some("singular nominativo".to_string())
    );
    assert!(lang.session.override_form(KATO, &slot).is_some());
}

#[test]
fn consistency_report_lists_what_drifted() {
    let mut lang = language();
    assert!(lang.session.consistency_report(NOUN).is_clean());

    let lost = lang.slot(lang.plural, lang.accusative);
    lang.session.set_override(HUNDO, lost.clone(), "hundojn");
    lang.session.remove_value(lang.number, lang.plural).unwrap();

    let report = lang.session.consistency_report(NOUN);
    // Three rules targeted plural slots; one form was stranded.
    assert_eq!(report.orphaned_rules.len(), 3);
    assert_eq!(report.deprecated_forms.len(), 1);
    assert_eq!(report.deprecated_forms[0].word, HUNDO);
    assert_eq!(report.issue_count(), 4);
    assert!(report.summary().contains("orphaned rule plural"));

    let orphans = lang.session.find_orphaned(NOUN);
    assert_eq!(orphans.len(), 3);
    for id in orphans {
        lang.session.delete_rule(id).unwrap();
    }
    lang.session.clear_overrides(HUNDO);
    assert!(lang.session.consistency_report(NOUN).is_clean());
}
