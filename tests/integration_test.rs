//! Integration tests for scrutiny

use scrutiny::prelude::*;
use serde_json::json;
use std::collections::HashMap;

fn form(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_empty_set_passes_vacuously() {
    let report = RuleSet::new(form(&[])).evaluate();
    assert!(report.passed());
    assert!(report.messages().is_empty());

    let report = RuleSet::new(json!({})).evaluate();
    assert!(report.passed());
}

#[test]
fn test_invalid_email_reports_registered_message() {
    let mut set = RuleSet::new(form(&[("email", "not-an-email")]));
    set.is_email("email", "bad email");
    let report = set.evaluate();
    assert!(!report.passed());
    assert_eq!(report.messages(), ["bad email"]);
}

#[test]
fn test_multiple_passing_rules() {
    let mut set = RuleSet::new(form(&[("age", "42")]));
    set.is_int("age", "must be int")
        .min_length("age", "too short", 1);
    let report = set.evaluate();
    assert!(report.passed());
    assert!(report.messages().is_empty());
}

#[test]
fn test_required_on_empty_record() {
    let mut set = RuleSet::new(form(&[]));
    set.required("name", "name required");
    let report = set.evaluate();
    assert!(!report.passed());
    assert_eq!(report.messages(), ["name required"]);
}

#[test]
fn test_two_failures_on_one_field_keep_registration_order() {
    let mut set = RuleSet::new(form(&[("username", "!")]));
    set.min_length("username", "username too short", 3)
        .is_alphanumeric("username", "username has invalid characters");
    let report = set.evaluate();
    assert_eq!(
        report.messages(),
        ["username too short", "username has invalid characters"]
    );
}

#[test]
fn test_evaluate_is_idempotent_and_side_effect_free() {
    let mut set = RuleSet::new(form(&[("email", "nope")]));
    set.is_email("email", "bad email");
    let first = set.evaluate();
    let second = set.evaluate();
    assert_eq!(first, second);
    assert_eq!(set.rule_count(), 1);
}

#[test]
fn test_json_scalars_coerce_to_strings() {
    let mut set = RuleSet::new(json!({
        "port": 8080,
        "debug": true,
        "ratio": 0.5,
    }));
    set.is_int("port", "port must be an integer")
        .is_bool("debug", "debug must be a boolean")
        .is_float("ratio", "ratio must be a number");
    assert!(set.evaluate().passed());
}

#[test]
fn test_json_non_scalars_read_as_empty() {
    let mut set = RuleSet::new(json!({ "tags": ["a", "b"], "meta": {} }));
    set.required("tags", "tags required")
        .required("meta", "meta required");
    let report = set.evaluate();
    assert_eq!(report.messages(), ["tags required", "meta required"]);
}

#[test]
fn test_form_and_document_agree() {
    let mut from_form = RuleSet::new(form(&[("host", "example.com")]));
    from_form.is_fqdn("host", "bad host");

    let mut from_doc = RuleSet::new(json!({ "host": "example.com" }));
    from_doc.is_fqdn("host", "bad host");

    assert_eq!(from_form.evaluate(), from_doc.evaluate());
}

#[test]
fn test_mixed_outcome_collects_only_failures() {
    let mut set = RuleSet::new(form(&[
        ("email", "grace@example.com"),
        ("age", "very old"),
        ("card", "4111111111111111"),
    ]));
    set.is_email("email", "bad email")
        .is_int("age", "age must be a number")
        .is_credit_card("card", "bad card");
    let report = set.evaluate();
    assert!(!report.passed());
    assert_eq!(report.messages(), ["age must be a number"]);
}

#[test]
fn test_schema_definitions_build_configured_sets() {
    struct ChangePassword;

    impl Schema for ChangePassword {
        fn rules(set: &mut RuleSet) {
            set.required("current", "current password is required")
                .min_length("next", "new password is too short", 8)
                .max_length("next", "new password is too long", 64);
        }
    }

    let report =
        RuleSet::of::<ChangePassword>(form(&[("current", "hunter2"), ("next", "short")])).evaluate();
    assert_eq!(report.messages(), ["new password is too short"]);
}

#[test]
fn test_with_closure_setup() {
    let set = RuleSet::with(json!({ "id": "507f1f77bcf86cd799439011" }), |set| {
        set.is_mongo_id("id", "bad object id");
    });
    assert!(set.evaluate().passed());
}

#[test]
fn test_delegate_validator() {
    struct NoProfanity;

    impl Validator for NoProfanity {
        fn validate(&self, value: &str) -> bool {
            !value.contains("darn")
        }
    }

    let mut set = RuleSet::new(form(&[("comment", "what a darn shame")]));
    set.add("comment", "mind your language", NoProfanity);
    assert_eq!(set.evaluate().messages(), ["mind your language"]);
}

#[test]
fn test_catalog_is_usable_directly() {
    assert!(scrutiny::validators::is_uuid(
        "550e8400-e29b-41d4-a716-446655440000"
    ));
    let in_range = scrutiny::validators::is_in(&["low", "medium", "high"]);
    assert!(in_range("medium"));
    assert!(!in_range("extreme"));
}

#[test]
fn test_fqdn_options_through_the_set() {
    let mut set = RuleSet::new(form(&[("service", "_sip.example.com")]));
    set.is_fqdn_with(
        "service",
        "bad service name",
        FqdnOptions {
            allow_underscores: true,
            ..FqdnOptions::default()
        },
    );
    assert!(set.evaluate().passed());
}

#[test]
fn test_isbn_versions_through_the_set() {
    let mut set = RuleSet::new(form(&[("old", "0306406152"), ("new", "9780306406157")]));
    set.is_isbn("old", "bad isbn-10", IsbnVersion::Ten)
        .is_isbn("new", "bad isbn-13", IsbnVersion::Thirteen);
    assert!(set.evaluate().passed());
}

#[test]
fn test_date_rules_with_custom_format() {
    let mut set = RuleSet::new(form(&[("expires", "01/03/2031")]));
    set.is_after_format("expires", "already expired", "01/01/2030", "%d/%m/%Y")
        .is_before_format("expires", "too far out", "01/01/2040", "%d/%m/%Y");
    assert!(set.evaluate().passed());
}

#[test]
fn test_report_into_result_and_json() {
    let mut set = RuleSet::new(form(&[]));
    set.required("name", "name required");
    let report = set.evaluate();
    assert_eq!(
        report.to_json(),
        json!({ "passed": false, "messages": ["name required"] })
    );
    let err = report.into_result().unwrap_err();
    assert_eq!(err.to_string(), "name required\n");
}

#[test]
fn test_pattern_rule() {
    let pattern = regex::Regex::new(r"^[A-Z]{2}-\d{4}$").unwrap();
    let mut set = RuleSet::new(form(&[("sku", "AB-1234")]));
    set.matches("sku", "bad sku", pattern);
    assert!(set.evaluate().passed());
}
