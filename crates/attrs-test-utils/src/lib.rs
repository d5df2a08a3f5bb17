//! Testing utilities for the attrs workspace
//!
//! Shared fixtures, strategies, and assertions.

#![allow(missing_docs)]

use attrs_bag::{AttrsValidation, FormAttrs};
use proptest::prelude::*;
use std::fmt::Debug;

pub fn form(names: &[&str]) -> FormAttrs {
    FormAttrs::new(names.iter().copied()).unwrap()
}

/// Form with every pair declared and assigned, in order
pub fn filled_form(pairs: &[(&str, &str)]) -> FormAttrs {
    let mut form = form(&pairs.iter().map(|(k, _)| *k).collect::<Vec<_>>());
    for (key, value) in pairs {
        form.set(key, (*value).to_string()).unwrap();
    }
    form
}

#[track_caller]
pub fn assert_failed_with<V: Debug>(result: &AttrsValidation<V>, key: &str, msg: &str) {
    let err = result
        .get_error_for(key)
        .unwrap_or_else(|_| panic!("expected '{key}' to fail, failures: {result:?}"));
    assert_eq!(err.error(), msg, "wrong message for '{key}'");
}

#[track_caller]
pub fn assert_passes<V: Debug>(result: &AttrsValidation<V>, key: &str) {
    assert!(
        !result.has_error_for(key),
        "expected '{key}' to pass, failures: {result:?}"
    );
}

pub fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,15}"
}

pub fn identifiers(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(identifier(), 0..max)
}

/// Names that are never identifiers: empty, digit-led, or containing a
/// non-identifier character
pub fn non_identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[0-9][A-Za-z0-9_]{0,10}",
        "[A-Za-z_][A-Za-z0-9_]{0,5}[ .\\-!@#][A-Za-z0-9_ ]{0,5}",
    ]
}
