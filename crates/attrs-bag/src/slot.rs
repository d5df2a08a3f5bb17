//! Named storage cell within a bag

use crate::result::ValidationError;
use crate::validator::Validator;
use std::fmt;

pub(crate) type BoxedValidator<V> = Box<dyn Validator<V> + Send + Sync>;

/// A declared slot: value, optional validator, and error message
///
/// Slots are owned by an [`AttrsObject`](crate::AttrsObject) and mutated
/// only through it.
pub struct Slot<V> {
    key: String,
    value: Option<V>,
    validator: Option<BoxedValidator<V>>,
    error_msg: String,
}

impl<V> Slot<V> {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            validator: None,
            error_msg: String::new(),
        }
    }

    /// Slot name
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current value, `None` while unset
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    #[inline]
    pub(crate) fn value_slot(&self) -> &Option<V> {
        &self.value
    }

    /// Whether a value was ever assigned
    #[inline]
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Whether a validator is attached
    #[inline]
    #[must_use]
    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    /// Message reported when the validator rejects the value
    #[inline]
    #[must_use]
    pub fn error_msg(&self) -> &str {
        &self.error_msg
    }

    #[inline]
    pub(crate) fn set_value(&mut self, value: V) {
        self.value = Some(value);
    }

    pub(crate) fn set_validator(&mut self, validator: BoxedValidator<V>, error_msg: String) {
        self.validator = Some(validator);
        self.error_msg = error_msg;
    }

    /// Evaluate this slot; `None` means it passes
    ///
    /// A panicking validator is not caught.
    pub(crate) fn check(&self, missing_value_msg: &str) -> Option<ValidationError<V>>
    where
        V: Clone,
    {
        let Some(value) = &self.value else {
            return Some(ValidationError::new(&self.key, None, missing_value_msg));
        };

        match &self.validator {
            Some(validator) if !validator.is_valid(value) => Some(ValidationError::new(
                &self.key,
                Some(value.clone()),
                &self.error_msg,
            )),
            _ => None,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Slot<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("has_validator", &self.has_validator())
            .field("error_msg", &self.error_msg)
            .finish()
    }
}
