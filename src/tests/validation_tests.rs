//! Tests for the per-definition validation pipeline.

use crate::error::{PolicyError, ValidationError};
use crate::loader::load_policy;
use crate::model::ItemKind;

fn load_err(yaml: &str) -> PolicyError {
    load_policy(yaml.as_bytes()).unwrap_err()
}

#[test]
fn test_rule_without_id_fails() {
    let err = load_err("- rule: {expression: e}\n");
    assert!(matches!(
        err,
        PolicyError::Validation(ValidationError::MissingId {
            kind: ItemKind::Rule
        })
    ));
    assert!(err.to_string().contains("rule has no name"));
}

#[test]
fn test_rule_with_empty_id_fails() {
    let err = load_err("- rule: {id: \"\", expression: e}\n");
    assert!(matches!(
        err,
        PolicyError::Validation(ValidationError::MissingId {
            kind: ItemKind::Rule
        })
    ));
}

#[test]
fn test_macro_without_id_fails() {
    let err = load_err("- macro: {expression: e}\n");
    assert!(matches!(
        err,
        PolicyError::Validation(ValidationError::MissingId {
            kind: ItemKind::Macro
        })
    ));
    assert!(err.to_string().contains("macro has no name"));
}

#[test]
fn test_rule_id_outside_grammar_fails() {
    for id in ["open-file", "open.file", "open file", "open!"] {
        let yaml = format!("- rule: {{id: \"{}\", expression: e}}\n", id);
        let err = load_err(&yaml);
        assert!(
            matches!(
                err,
                PolicyError::Validation(ValidationError::InvalidIdFormat {
                    kind: ItemKind::Rule
                })
            ),
            "id '{}' should fail the grammar, got {:?}",
            id,
            err
        );
    }
}

#[test]
fn test_invalid_id_message_cites_pattern() {
    let err = load_err("- macro: {id: bad-id, expression: e}\n");
    assert!(err
        .to_string()
        .contains("macro ID does not match pattern ^([a-zA-Z0-9]*_*)*$"));
}

#[test]
fn test_underscored_ids_are_accepted() {
    let yaml = r#"
- rule: {id: open_sensitive_file, expression: e}
- rule: {id: _leading, expression: e}
- rule: {id: trailing_, expression: e}
- macro: {id: __x__, expression: e}
"#;
    let policy = load_policy(yaml.as_bytes()).unwrap();
    assert_eq!(policy.rules.len(), 3);
    assert_eq!(policy.macros.len(), 1);
}

#[test]
fn test_rule_without_expression_fails() {
    let err = load_err("- rule: {id: r1}\n");
    assert!(matches!(
        err,
        PolicyError::Validation(ValidationError::MissingExpression {
            kind: ItemKind::Rule
        })
    ));
    assert!(err.to_string().contains("rule has no expression"));
}

#[test]
fn test_macro_with_empty_expression_fails() {
    let err = load_err("- macro: {id: m1, expression: \"\"}\n");
    assert!(matches!(
        err,
        PolicyError::Validation(ValidationError::MissingExpression {
            kind: ItemKind::Macro
        })
    ));
}

#[test]
fn test_missing_id_reported_before_missing_expression() {
    let err = load_err("- rule: {id: \"\", expression: \"\"}\n");
    assert!(matches!(
        err,
        PolicyError::Validation(ValidationError::MissingId {
            kind: ItemKind::Rule
        })
    ));
}

#[test]
fn test_bad_id_reported_before_missing_expression() {
    let err = load_err("- rule: {id: bad-id, expression: \"\"}\n");
    assert!(matches!(
        err,
        PolicyError::Validation(ValidationError::InvalidIdFormat {
            kind: ItemKind::Rule
        })
    ));
}

#[test]
fn test_first_invalid_item_aborts_load() {
    let yaml = r#"
- rule: {id: ok_rule, expression: e}
- rule: {id: "", expression: e}
- rule: {id: never_reached, expression: e}
"#;
    let err = load_err(yaml);
    assert!(matches!(
        err,
        PolicyError::Validation(ValidationError::MissingId { .. })
    ));
}
