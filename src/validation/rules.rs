//! Per-field validation rules.

use crate::config::FormConfig;
use crate::domain::Field;

/// Constraints on one field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRule {
    /// An empty value is an error.
    pub required: bool,

    /// Minimum number of characters for a non-empty value.
    pub min_length: Option<usize>,

    /// A non-empty value must be an email address.
    pub email: bool,
}

impl ValidationRule {
    /// A rule that accepts anything.
    pub const fn unconstrained() -> Self {
        Self {
            required: false,
            min_length: None,
            email: false,
        }
    }

    /// A required field with a minimum length.
    pub const fn required_min_length(min_length: usize) -> Self {
        Self {
            required: true,
            min_length: Some(min_length),
            email: false,
        }
    }

    /// A required email address.
    pub const fn required_email() -> Self {
        Self {
            required: true,
            min_length: None,
            email: true,
        }
    }
}

/// The rule for each of the form's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub first_name: ValidationRule,
    pub last_name: ValidationRule,
    pub email: ValidationRule,
    pub message: ValidationRule,
}

impl RuleSet {
    /// Build the contact form's rules from its configuration.
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            first_name: ValidationRule::required_min_length(config.min_name_length),
            last_name: ValidationRule::required_min_length(config.min_name_length),
            email: ValidationRule::required_email(),
            message: ValidationRule::unconstrained(),
        }
    }

    /// The rule applied to `field`.
    pub fn rule(&self, field: Field) -> &ValidationRule {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}
