//! Validation results
//!
//! [`AttrsValidation`] is produced by
//! [`AttrsObject::validate`](crate::AttrsObject::validate) and holds one
//! [`ValidationError`] per failing slot, in declaration order.

use crate::error::{AttrsError, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// A single slot failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError<V> {
    key: String,
    value: Option<V>,
    error: String,
}

impl<V> ValidationError<V> {
    /// Create a failure record
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>, value: Option<V>, error: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value,
            error: error.into(),
        }
    }

    /// Failing slot name
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Value at validation time, `None` if the slot was unset
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Error message
    #[inline]
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }
}

impl<V: Display> Display for ValidationError<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error for key {} with value ", self.key)?;
        match &self.value {
            Some(value) => write!(f, "{value}")?,
            None => f.write_str("<unset>")?,
        }
        write!(f, " and message {}", self.error)
    }
}

/// Outcome of one validation sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttrsValidation<V> {
    errors: IndexMap<String, ValidationError<V>>,
}

impl<V> AttrsValidation<V> {
    pub(crate) fn new() -> Self {
        Self {
            errors: IndexMap::new(),
        }
    }

    pub(crate) fn add_error(&mut self, error: ValidationError<V>) {
        self.errors.insert(error.key.clone(), error);
    }

    /// Whether `key` failed
    #[inline]
    #[must_use]
    pub fn has_error_for(&self, key: &str) -> bool {
        self.errors.contains_key(key)
    }

    /// Failure recorded for `key`
    ///
    /// # Errors
    /// [`AttrsError::NoErrorRecorded`] if `key` did not fail, including
    /// keys the bag never declared. This is the result-side counterpart of
    /// [`AttrsError::UnknownKey`]: a result only knows the keys that failed.
    /// Check [`has_error_for`](Self::has_error_for) first.
    pub fn get_error_for(&self, key: &str) -> Result<&ValidationError<V>> {
        self.errors
            .get(key)
            .ok_or_else(|| AttrsError::NoErrorRecorded {
                key: key.to_owned(),
            })
    }

    /// Whether any slot failed
    #[inline]
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Failures in declaration order
    pub fn errors(&self) -> impl ExactSizeIterator<Item = &ValidationError<V>> + '_ {
        self.errors.values()
    }

    /// Failing keys in declaration order
    pub fn failed_keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.errors.keys().map(String::as_str)
    }

    /// Number of failing slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when every slot passed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<V> IntoIterator for AttrsValidation<V> {
    type Item = ValidationError<V>;
    type IntoIter = indexmap::map::IntoValues<String, ValidationError<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_values()
    }
}

impl<'a, V> IntoIterator for &'a AttrsValidation<V> {
    type Item = &'a ValidationError<V>;
    type IntoIter = indexmap::map::Values<'a, String, ValidationError<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.values()
    }
}
