//! Identifier syntax for slot names

use crate::error::{AttrsError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A[A-Za-z_][A-Za-z0-9_]*\z").expect("identifier pattern compiles")
});

/// Check whether `name` is an ASCII identifier
///
/// A letter or underscore followed by any number of letters, digits or
/// underscores. The whole name must match.
///
/// ```
/// assert!(attrs_bag::is_identifier("user_name2"));
/// assert!(!attrs_bag::is_identifier("2fast"));
/// assert!(!attrs_bag::is_identifier("first name"));
/// ```
#[inline]
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

pub(crate) fn ensure_identifier(name: &str) -> Result<()> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(AttrsError::InvalidIdentifier {
            name: name.to_owned(),
        })
    }
}
