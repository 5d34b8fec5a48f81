//! Configuration for the contact form.
//!
//! The form carries no ambient state: a [`FormConfig`] is built in code or
//! parsed from JSON by the host and handed to [`crate::ContactForm::with_config`].

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// When inline errors are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Each change event also re-validates the edited field.
    #[default]
    OnChange,

    /// Errors appear only after a submit attempt.
    OnSubmit,
}

/// Configuration for a contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Minimum character count for first and last name (default: 5)
    pub min_name_length: usize,

    /// When inline errors are computed (default: on change)
    pub mode: ValidationMode,
}

impl FormConfig {
    /// Parse configuration from a JSON document.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::JsonError` for malformed JSON and
    /// `ConfigError::InvalidValue` if a setting is out of range.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: FormConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_name_length == 0 {
            return Err(ConfigError::InvalidValue {
                var: "min_name_length".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            min_name_length: 5,
            mode: ValidationMode::OnChange,
        }
    }
}
