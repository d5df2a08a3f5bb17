//! Behavioural scenarios for attribute bags

use attrs_bag::prelude::*;
use attrs_bag::MISSING_VALUE_MSG;
use attrs_test_utils::{assert_failed_with, assert_passes, filled_form, form};
use pretty_assertions::assert_eq;

#[test]
fn two_field_form_round_trip() {
    let mut fd = form(&["a", "b"]);
    fd.set("a", "A".into()).unwrap();
    fd.set("b", "B".into()).unwrap();

    assert_eq!(fd.get("a").unwrap().map(String::as_str), Some("A"));
    assert_eq!(fd.get("b").unwrap().map(String::as_str), Some("B"));
    assert!(!fd.validate().has_errors());

    let err = fd.get("c").unwrap_err();
    assert!(matches!(err, AttrsError::UnknownKey { ref key } if key == "c"));
}

#[test]
fn registration_form() {
    let mut fd = form(&["username", "email", "age", "referrer"]);
    fd.set_regex_validator("username", "[a-z][a-z0-9_]{2,}", Some("bad username"))
        .unwrap();
    fd.set_regex_validator("email", r"[^@\s]+@[^@\s]+\.", Some("bad email"))
        .unwrap();
    fd.set_validator(
        "age",
        |v: &String| v.parse::<u8>().is_ok_and(|age| age >= 18),
        Some("must be an adult"),
    )
    .unwrap();

    fd.set("username", "ada_l".into()).unwrap();
    fd.set("email", "ada@example.org".into()).unwrap();
    fd.set("age", "17".into()).unwrap();

    let result = fd.validate();
    assert_passes(&result, "username");
    assert_passes(&result, "email");
    assert_failed_with(&result, "age", "must be an adult");
    assert_failed_with(&result, "referrer", MISSING_VALUE_MSG);

    let keys: Vec<&str> = result.errors().map(ValidationError::key).collect();
    assert_eq!(keys, vec!["age", "referrer"]);
}

#[test]
fn fixing_a_value_clears_its_failure() {
    let mut fd = filled_form(&[("code", "xABC")]);
    fd.set_regex_validator("code", "^A", None).unwrap();
    assert_failed_with(&fd.validate(), "code", "");

    fd.set("code", "ABC".into()).unwrap();
    assert!(!fd.validate().has_errors());
}

#[test]
fn error_lookup_on_passing_key_fails() {
    let fd = filled_form(&[("a", "A")]);
    let result = fd.validate();
    assert!(matches!(
        result.get_error_for("a"),
        Err(AttrsError::NoErrorRecorded { .. })
    ));
    assert!(matches!(
        result.get_error_for("undeclared"),
        Err(AttrsError::NoErrorRecorded { .. })
    ));
}

#[test]
fn report_lines() {
    let mut fd = form(&["name", "zip"]);
    fd.set("zip", "ABCDE".into()).unwrap();
    fd.set_regex_validator("zip", r"\d{5}", Some("not a zip code"))
        .unwrap();

    let lines: Vec<String> = fd.validate().errors().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "Validation error for key name with value <unset> and message Value was never added"
                .to_string(),
            "Validation error for key zip with value ABCDE and message not a zip code".to_string(),
        ]
    );
}

#[test]
fn json_report() {
    let mut fd = form(&["a", "b"]);
    fd.set("b", "B".into()).unwrap();
    fd.set_validator("b", |_: &String| false, Some("rejected"))
        .unwrap();

    let json = serde_json::to_value(fd.validate()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "a": { "key": "a", "value": null, "error": "Value was never added" },
            "b": { "key": "b", "value": "B", "error": "rejected" },
        })
    );
}

#[test]
fn bag_can_live_behind_a_lock() {
    let fd = std::sync::Mutex::new(form(&["a"]));
    std::thread::scope(|s| {
        s.spawn(|| fd.lock().unwrap().set("a", "A".into()).unwrap());
    });
    assert!(!fd.lock().unwrap().validate().has_errors());
}
