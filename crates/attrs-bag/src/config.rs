//! Bag configuration

use serde::{Deserialize, Serialize};

/// Message recorded for a slot whose value was never assigned
pub const MISSING_VALUE_MSG: &str = "Value was never added";

/// Configuration for an [`AttrsObject`](crate::AttrsObject)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BagConfig {
    /// Message installed when a validator is attached without one
    pub default_error_msg: String,
    /// Message recorded for slots left unset
    pub missing_value_msg: String,
}

impl BagConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With default validator error message
    #[inline]
    #[must_use]
    pub fn with_default_error_msg(mut self, msg: impl Into<String>) -> Self {
        self.default_error_msg = msg.into();
        self
    }

    /// With message for unset slots
    #[inline]
    #[must_use]
    pub fn with_missing_value_msg(mut self, msg: impl Into<String>) -> Self {
        self.missing_value_msg = msg.into();
        self
    }
}

impl Default for BagConfig {
    fn default() -> Self {
        Self {
            default_error_msg: String::new(),
            missing_value_msg: MISSING_VALUE_MSG.to_owned(),
        }
    }
}
