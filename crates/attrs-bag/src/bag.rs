//! AttrsObject - fixed-key attribute bag
//!
//! Provides [`AttrsObject`], an ordered set of named slots declared once at
//! construction. Values and validators are assigned by key; keys outside
//! the declared set are rejected.

use crate::config::BagConfig;
use crate::error::{AttrsError, Result};
use crate::ident;
use crate::result::AttrsValidation;
use crate::slot::Slot;
use crate::validator::{RegexSource, Validator};
use indexmap::IndexMap;
use std::ops::Index;

/// Attribute bag with a fixed, ordered key set
///
/// # Example
/// ```
/// use attrs_bag::AttrsObject;
///
/// let mut bag = AttrsObject::new(["name", "code"]).unwrap();
/// bag.set("name", "Ada".to_string()).unwrap();
/// bag.set_regex_validator("code", "^[A-Z]{3}", Some("needs a 3 letter prefix")).unwrap();
/// bag.set("code", "abc".to_string()).unwrap();
///
/// let result = bag.validate();
/// assert!(!result.has_error_for("name"));
/// assert_eq!(result.get_error_for("code").unwrap().error(), "needs a 3 letter prefix");
/// ```
#[derive(Debug)]
pub struct AttrsObject<V = String> {
    slots: IndexMap<String, Slot<V>>,
    config: BagConfig,
}

/// Bag of string-valued form fields
pub type FormAttrs = AttrsObject<String>;

impl<V> AttrsObject<V> {
    /// Declare a bag with default configuration
    ///
    /// Duplicate names collapse into one slot at the position of their
    /// first declaration.
    ///
    /// # Errors
    /// [`AttrsError::InvalidIdentifier`] for the first name that is not an
    /// identifier. No bag is produced.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(names, BagConfig::default())
    }

    /// Declare a bag with explicit configuration
    ///
    /// # Errors
    /// Same as [`new`](Self::new).
    pub fn with_config<I, S>(names: I, config: BagConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut slots = IndexMap::new();
        for name in names {
            let name = name.as_ref();
            ident::ensure_identifier(name)?;
            slots
                .entry(name.to_owned())
                .or_insert_with(|| Slot::new(name));
        }

        tracing::debug!(slots = slots.len(), "declared attribute bag");
        Ok(Self { slots, config })
    }

    /// Current value of `key`, `None` while unset
    ///
    /// # Errors
    /// [`AttrsError::UnknownKey`] if `key` was not declared.
    pub fn get(&self, key: &str) -> Result<Option<&V>> {
        self.slot(key).map(Slot::value)
    }

    /// Assign `value` to `key`, replacing any previous value
    ///
    /// The slot's validator and message are left untouched.
    ///
    /// # Errors
    /// [`AttrsError::UnknownKey`] if `key` was not declared.
    pub fn set(&mut self, key: &str, value: V) -> Result<()> {
        self.slot_mut(key)?.set_value(value);
        Ok(())
    }

    /// Attach a validator to `key`
    ///
    /// Replaces the previous validator and message together. A `None`
    /// message installs [`BagConfig::default_error_msg`].
    ///
    /// # Errors
    /// [`AttrsError::UnknownKey`] if `key` was not declared.
    pub fn set_validator<F>(&mut self, key: &str, validator: F, error_msg: Option<&str>) -> Result<()>
    where
        F: Validator<V> + Send + Sync + 'static,
    {
        let error_msg = self.resolve_error_msg(error_msg);
        self.slot_mut(key)?
            .set_validator(Box::new(validator), error_msg);
        tracing::trace!(key, "validator attached");
        Ok(())
    }

    /// Attach a pattern validator to `key`
    ///
    /// The value passes when `pattern` matches starting at its first
    /// character; the remainder of the value is not required to match.
    /// `pattern` may be a raw pattern string or a compiled [`regex::Regex`].
    ///
    /// # Errors
    /// - [`AttrsError::UnknownKey`] if `key` was not declared
    /// - [`AttrsError::InvalidPattern`] if a raw pattern does not compile
    ///
    /// The bag is unchanged on either error.
    pub fn set_regex_validator<P>(&mut self, key: &str, pattern: P, error_msg: Option<&str>) -> Result<()>
    where
        P: RegexSource,
        V: AsRef<str>,
    {
        self.slot(key)?;
        let validator = pattern.into_regex_validator()?;
        self.set_validator(key, validator, error_msg)
    }

    /// Run every slot through its check
    ///
    /// Slots are visited in declaration order and all of them are
    /// evaluated. Unset slots fail with
    /// [`BagConfig::missing_value_msg`]; set slots fail when their
    /// validator returns `false`. A validator that panics aborts the sweep.
    #[must_use]
    pub fn validate(&self) -> AttrsValidation<V>
    where
        V: Clone,
    {
        let mut result = AttrsValidation::new();
        for slot in self.slots.values() {
            if let Some(error) = slot.check(&self.config.missing_value_msg) {
                tracing::trace!(key = slot.key(), error = error.error(), "slot failed");
                result.add_error(error);
            }
        }

        tracing::debug!(
            slots = self.slots.len(),
            failed = result.len(),
            "validation complete"
        );
        result
    }

    /// Declared keys in declaration order
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.slots.keys().map(String::as_str)
    }

    /// Slots in declaration order
    pub fn slots(&self) -> impl ExactSizeIterator<Item = &Slot<V>> + '_ {
        self.slots.values()
    }

    /// Number of declared slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no names were declared
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether `key` was declared
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Whether `key` has been assigned
    ///
    /// # Errors
    /// [`AttrsError::UnknownKey`] if `key` was not declared.
    pub fn is_set(&self, key: &str) -> Result<bool> {
        self.slot(key).map(Slot::is_set)
    }

    /// Whether `key` has a validator
    ///
    /// # Errors
    /// [`AttrsError::UnknownKey`] if `key` was not declared.
    pub fn has_validator(&self, key: &str) -> Result<bool> {
        self.slot(key).map(Slot::has_validator)
    }

    /// Error message configured for `key`
    ///
    /// # Errors
    /// [`AttrsError::UnknownKey`] if `key` was not declared.
    pub fn error_msg(&self, key: &str) -> Result<&str> {
        self.slot(key).map(Slot::error_msg)
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &BagConfig {
        &self.config
    }

    /// Slot for `key`
    ///
    /// # Errors
    /// [`AttrsError::UnknownKey`] if `key` was not declared.
    pub fn slot(&self, key: &str) -> Result<&Slot<V>> {
        self.slots.get(key).ok_or_else(|| AttrsError::unknown_key(key))
    }

    fn slot_mut(&mut self, key: &str) -> Result<&mut Slot<V>> {
        self.slots
            .get_mut(key)
            .ok_or_else(|| AttrsError::unknown_key(key))
    }

    fn resolve_error_msg(&self, error_msg: Option<&str>) -> String {
        error_msg.map_or_else(|| self.config.default_error_msg.clone(), str::to_owned)
    }
}

/// Read a slot by key
///
/// # Panics
/// If `key` was not declared. Use [`AttrsObject::get`] to handle that case.
impl<V> Index<&str> for AttrsObject<V> {
    type Output = Option<V>;

    fn index(&self, key: &str) -> &Self::Output {
        match self.slots.get(key) {
            Some(slot) => slot.value_slot(),
            None => panic!("key '{key}' is not present"),
        }
    }
}
