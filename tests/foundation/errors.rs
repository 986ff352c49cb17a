//! Integration tests for error kinds and context

use paradigm_foundation::{
    AxisId, Error, ErrorContext, ErrorKind, RuleId, SlotId, ValueId, WordId,
};

#[test]
fn malformed_regex_points_at_rule() {
    let err = Error::malformed_regex("plural", SlotId::from(",1,"), "(o", "unclosed group");
    let msg = err.to_string();
    assert!(err.is_malformed_regex());
    assert!(msg.contains("'plural'"));
    assert!(msg.contains(",1,"));
    assert!(msg.contains("repair the rule"));
}

#[test]
fn lookup_errors_name_the_missing_record() {
    assert!(Error::axis_not_found(AxisId::new(2)).to_string().contains("axis#2"));
    assert!(
        Error::value_not_found(AxisId::new(2), ValueId::new(8))
            .to_string()
            .contains("value#8")
    );
    assert!(Error::word_not_found(WordId::new(4)).to_string().contains("word"));
    assert!(matches!(
        Error::rule_not_found(RuleId::new(1)).kind,
        ErrorKind::RuleNotFound(_)
    ));
    assert!(matches!(
        Error::instance_not_found(WordId::new(1), SlotId::from("3")).kind,
        ErrorKind::InstanceNotFound { .. }
    ));
}

#[test]
fn context_renders_source_and_frames() {
    let context = ErrorContext::new()
        .with_source("kato")
        .with_frame("rule plural")
        .with_frame("slot ,1,");
    let rendered = context.to_string();
    assert!(rendered.starts_with("while processing kato"));
    assert!(rendered.contains("  in rule plural\n"));
    assert!(rendered.contains("  in slot ,1,\n"));
}

#[test]
fn context_is_optional() {
    let err = Error::new(ErrorKind::Internal("boom".to_string()));
    assert!(err.context.is_none());
    let err = err.with_context(ErrorContext::new().with_source("doc.msgpack"));
    assert_eq!(
        err.context.and_then(|c| c.source),
        Some("doc.msgpack".to_string())
    );
}

#[test]
fn suppression_key_errors_quote_the_key() {
    let err = Error::new(ErrorKind::InvalidSuppressionKey("oops".to_string()));
    assert!(err.to_string().contains("\"oops\""));
}
