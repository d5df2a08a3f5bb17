//! Attribute bags with per-field validation
//!
//! Fixed-key containers for form-style data.
//!
//! # Overview
//!
//! - **AttrsObject**: ordered, fixed set of named slots declared once
//! - **Validator**: predicate attached to a slot; closures qualify
//! - **RegexValidator**: pattern validator anchored at the start of the value
//! - **AttrsValidation**: every failing slot from one validation sweep
//!
//! # Example
//!
//! ```rust
//! use attrs_bag::FormAttrs;
//!
//! let mut form = FormAttrs::new(["a", "b"]).unwrap();
//! form.set("a", "A".to_string()).unwrap();
//! form.set("b", "B".to_string()).unwrap();
//!
//! assert_eq!(form.get("a").unwrap().map(String::as_str), Some("A"));
//! assert!(form.get("c").is_err());
//! assert!(!form.validate().has_errors());
//! ```

#![warn(missing_docs)]

pub mod bag;
pub mod config;
pub mod error;
pub mod ident;
pub mod result;
pub mod slot;
pub mod validator;

// Re-exports
pub use bag::{AttrsObject, FormAttrs};
pub use config::{BagConfig, MISSING_VALUE_MSG};
pub use error::{AttrsError, Result};
pub use ident::is_identifier;
pub use result::{AttrsValidation, ValidationError};
pub use slot::Slot;
pub use validator::{RegexSource, RegexValidator, Validator};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with bags
    pub use crate::{
        AttrsError, AttrsObject, AttrsValidation, BagConfig, FormAttrs, RegexValidator,
        ValidationError, Validator,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
