//! Form definition files
//!
//! A definition declares the fields of a form, the values to check, and
//! pattern validators. TOML and JSON are accepted, chosen by extension.

use anyhow::{bail, Context};
use attrs_bag::{BagConfig, FormAttrs};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Declared form plus the data to validate against it
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FormDefinition {
    /// Field names, in report order
    pub(crate) fields: Vec<String>,
    /// Values by field name
    #[serde(default)]
    pub(crate) values: IndexMap<String, String>,
    /// Pattern validators
    #[serde(default)]
    pub(crate) validators: Vec<PatternRule>,
    /// Bag configuration
    #[serde(default)]
    pub(crate) config: BagConfig,
}

/// Pattern validator for one field
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PatternRule {
    pub(crate) field: String,
    pub(crate) pattern: String,
    #[serde(default)]
    pub(crate) message: Option<String>,
}

impl FormDefinition {
    /// Read a definition, picking the format from the file extension
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let definition = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&text),
            Some("toml") | None => Self::from_toml(&text),
            Some(other) => bail!("unsupported definition format '.{other}'"),
        };
        definition.with_context(|| format!("invalid definition in {}", path.display()))
    }

    pub(crate) fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub(crate) fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the bag: declare fields, attach validators, assign values
    pub(crate) fn build(&self) -> attrs_bag::Result<FormAttrs> {
        let mut form = FormAttrs::with_config(&self.fields, self.config.clone())?;

        for rule in &self.validators {
            form.set_regex_validator(&rule.field, rule.pattern.as_str(), rule.message.as_deref())?;
        }
        for (field, value) in &self.values {
            form.set(field, value.clone())?;
        }

        tracing::debug!(
            fields = form.len(),
            values = self.values.len(),
            validators = self.validators.len(),
            "built form from definition"
        );
        Ok(form)
    }
}
