//! Saving and loading whole documents.

use std::env;
use std::fs;
use std::path::PathBuf;

use paradigm_engine::ReplaceScope;
use paradigm_foundation::{ErrorKind, SlotId};
use paradigm_runtime::{Document, FORMAT_VERSION, Session, SessionConfig, from_bytes, to_bytes};
use paradigm_storage::OverrideMode;

use crate::fixture::{HUNDO, KATO, NOUN, language};

fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("paradigm_{}_{name}.msgpack", std::process::id()))
}

fn populated() -> Session {
    let mut lang = language();
    let gender = lang.session.add_class("Gender", [NOUN]);
    let animate = lang.session.add_class_value(gender, "animate").unwrap();
    lang.session.assign_class(KATO, gender, animate).unwrap();

    let sg_nom = lang.slot(lang.singular, lang.nominative);
    lang.session.set_override(HUNDO, sg_nom.clone(), "hundo");
    lang.session
        .set_override_notes(HUNDO, &sg_nom, "attested form")
        .unwrap();
    lang.session
        .set_override_mode(HUNDO, OverrideMode::Slots([sg_nom].into_iter().collect()))
        .unwrap();
    lang.session
        .set_suppressed(NOUN, SlotId::singleton(lang.vocative), true);
    lang.session
}

#[test]
fn save_load_save_is_byte_identical() {
    let session = populated();
    let first = temp_path("first");
    let second = temp_path("second");

    session.save(&first).unwrap();
    let loaded = Session::load(&first, SessionConfig::default()).unwrap();
    loaded.save(&second).unwrap();

    let a = fs::read(&first).unwrap();
    let b = fs::read(&second).unwrap();
    assert_eq!(a, b);

    let _ = fs::remove_file(first);
    let _ = fs::remove_file(second);
}

#[test]
fn loaded_sessions_decline_identically() {
    let session = populated();
    let restored = Session::import(session.export(), SessionConfig::default()).unwrap();

    for word in [KATO, HUNDO] {
        for entry in session.all_slots(NOUN) {
            assert_eq!(
                session.decline(word, &entry.slot).unwrap().form,
                restored.decline(word, &entry.slot).unwrap().form,
                "{word} {}",
                entry.label
            );
        }
    }
    assert_eq!(restored.visible_slots(NOUN).len(), 4);
    let note = restored
        .instances()
        .iter()
        .find(|(_, instance)| !instance.notes.is_empty())
        .map(|(_, instance)| instance.notes.clone());
    assert_eq!(note.as_deref(), Some("attested form"));
}

#[test]
fn loaded_sessions_keep_allocating_fresh_ids() {
    let session = populated();
    let mut restored = Session::import(session.export(), SessionConfig::default()).unwrap();

    let axis = restored.add_axis(NOUN, "Definiteness");
    assert!(session.axes().axis(axis).is_none());
    let value = restored.add_value(axis, "definite").unwrap();
    assert!(
        session
            .axes()
            .iter()
            .all(|a| a.values().iter().all(|v| v.id != value))
    );
}

#[test]
fn exported_rule_indices_are_contiguous() {
    let mut session = populated();
    let ids: Vec<_> = session.rules_for_pos(NOUN).into_iter().map(|(id, _)| id).collect();
    session.delete_rule(ids[1]).unwrap();

    let document = session.export();
    let indices: Vec<Option<u32>> = document.rules.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![Some(1), Some(2), Some(3)]);
}

#[test]
fn evolution_survives_a_round_trip() {
    let mut session = populated();
    let records = session
        .evolve_saved_forms(HUNDO, "o$", "u", ReplaceScope::All)
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(session.evolve_rules(Some(NOUN), "oj", "uj").len(), 2);

    let bytes = to_bytes(&session.export()).unwrap();
    let restored = Session::import(from_bytes(&bytes).unwrap(), SessionConfig::default()).unwrap();
    let stored: Vec<&str> = restored
        .instances()
        .iter()
        .map(|(_, instance)| instance.value.as_str())
        .collect();
    assert_eq!(stored, vec!["hundu"]);
    assert!(
        restored
            .rules_for_pos(NOUN)
            .iter()
            .any(|(_, rule)| rule.transforms.iter().any(|t| t.replacement == "uj"))
    );
}

#[test]
fn documents_from_the_future_are_refused() {
    let document = Document {
        format_version: FORMAT_VERSION + 1,
        ..Document::default()
    };
    let bytes = to_bytes(&document).unwrap();
    let err = from_bytes(&bytes).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedFormat { .. }));
}

#[test]
fn missing_files_are_io_errors() {
    let err = Session::load(temp_path("absent"), SessionConfig::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
}
