//! Error types for attribute bags
//!
//! Validation failures are not errors: they are collected into an
//! [`AttrsValidation`](crate::AttrsValidation). The variants here cover
//! misuse of the bag itself.

/// Result type for bag operations
pub type Result<T> = std::result::Result<T, AttrsError>;

/// Errors raised by [`AttrsObject`](crate::AttrsObject) and
/// [`AttrsValidation`](crate::AttrsValidation)
#[derive(Debug, thiserror::Error)]
pub enum AttrsError {
    /// A declared name is not a valid identifier
    #[error("cannot use this as identifier: '{name}'")]
    InvalidIdentifier {
        /// The rejected name
        name: String,
    },

    /// Key was not declared when the bag was constructed
    #[error("key '{key}' is not present")]
    UnknownKey {
        /// The requested key
        key: String,
    },

    /// Key has no failure in a validation result
    #[error("no validation error recorded for key '{key}'")]
    NoErrorRecorded {
        /// The requested key
        key: String,
    },

    /// Raw regex pattern failed to compile
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as given
        pattern: String,
        /// Compiler diagnostic
        #[source]
        source: regex::Error,
    },
}

impl AttrsError {
    #[inline]
    pub(crate) fn unknown_key(key: &str) -> Self {
        Self::UnknownKey {
            key: key.to_owned(),
        }
    }

    /// Check if the error came from an undeclared key
    #[inline]
    #[must_use]
    pub fn is_unknown_key(&self) -> bool {
        matches!(self, Self::UnknownKey { .. })
    }

    /// Check if the error came from an invalid identifier
    #[inline]
    #[must_use]
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, Self::InvalidIdentifier { .. })
    }
}
