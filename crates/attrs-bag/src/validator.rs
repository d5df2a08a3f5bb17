//! Validator predicates attached to slots
//!
//! Provides the [`Validator`] trait, implemented for any `Fn(&V) -> bool`,
//! and [`RegexValidator`] for string-like values.

use crate::error::{AttrsError, Result};
use regex::Regex;

/// Single-predicate validation capability
///
/// Closures implement this automatically:
///
/// ```
/// use attrs_bag::Validator;
///
/// let non_empty = |v: &String| !v.is_empty();
/// assert!(non_empty.is_valid(&"x".to_string()));
/// assert!(!non_empty.is_valid(&String::new()));
/// ```
pub trait Validator<V: ?Sized> {
    /// Return `true` when `value` passes
    fn is_valid(&self, value: &V) -> bool;
}

impl<V: ?Sized, F> Validator<V> for F
where
    F: Fn(&V) -> bool,
{
    #[inline]
    fn is_valid(&self, value: &V) -> bool {
        self(value)
    }
}

/// Validator passing values the pattern matches at their first byte
///
/// Only the start is anchored: `^A` and `A` both accept `"ABC"` and
/// reject `"xABC"`, and `A` also accepts `"AxYZ"` since the rest of the
/// value is not required to match.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    regex: Regex,
}

impl RegexValidator {
    /// Wrap a compiled pattern
    #[inline]
    #[must_use]
    pub fn new(regex: Regex) -> Self {
        Self { regex }
    }

    /// Compile a raw pattern
    ///
    /// # Errors
    /// [`AttrsError::InvalidPattern`] if the pattern does not compile.
    pub fn compile(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Self::new)
            .map_err(|source| AttrsError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }

    /// Underlying pattern
    #[inline]
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Check for a match starting at position 0
    #[must_use]
    pub fn matches_at_start(&self, haystack: &str) -> bool {
        // leftmost-first: a match starting at 0 is always the one found
        self.regex.find(haystack).is_some_and(|m| m.start() == 0)
    }
}

impl<V> Validator<V> for RegexValidator
where
    V: AsRef<str> + ?Sized,
{
    #[inline]
    fn is_valid(&self, value: &V) -> bool {
        self.matches_at_start(value.as_ref())
    }
}

/// Anything that can become a [`RegexValidator`]
///
/// Implemented for raw patterns (`&str`, `String`) and for precompiled
/// [`Regex`] values.
pub trait RegexSource {
    /// Convert into a validator, compiling if needed
    ///
    /// # Errors
    /// [`AttrsError::InvalidPattern`] for raw patterns that do not compile.
    fn into_regex_validator(self) -> Result<RegexValidator>;
}

impl RegexSource for &str {
    fn into_regex_validator(self) -> Result<RegexValidator> {
        RegexValidator::compile(self)
    }
}

impl RegexSource for String {
    fn into_regex_validator(self) -> Result<RegexValidator> {
        RegexValidator::compile(&self)
    }
}

impl RegexSource for &String {
    fn into_regex_validator(self) -> Result<RegexValidator> {
        RegexValidator::compile(self)
    }
}

impl RegexSource for Regex {
    fn into_regex_validator(self) -> Result<RegexValidator> {
        Ok(RegexValidator::new(self))
    }
}

impl RegexSource for &Regex {
    fn into_regex_validator(self) -> Result<RegexValidator> {
        Ok(RegexValidator::new(self.clone()))
    }
}

impl RegexSource for RegexValidator {
    fn into_regex_validator(self) -> Result<RegexValidator> {
        Ok(self)
    }
}
