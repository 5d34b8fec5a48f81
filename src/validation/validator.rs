//! Applies a [`RuleSet`] to the form's field values.

use super::result::ValidationResult;
use super::rules::{RuleSet, ValidationRule};
use crate::config::FormConfig;
use crate::domain::{EmailAddress, Field, ValidationError};
use crate::models::ContactFields;

/// Validates contact form fields against a fixed rule set.
///
/// Validation is pure: the same values always produce the same result.
///
/// # Example
///
/// ```
/// use contact_form::models::ContactFields;
/// use contact_form::validation::Validator;
///
/// let fields = ContactFields::new("firstname", "lastname", "test@test", "");
/// let result = Validator::default().validate(&fields);
/// assert_eq!(result.messages(), vec!["email must be a valid email address"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: RuleSet,
}

impl Validator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(RuleSet::from_config(config))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate every field, collecting one error per failing field.
    pub fn validate(&self, fields: &ContactFields) -> ValidationResult {
        let mut result = ValidationResult::new();
        for field in Field::ALL {
            result.set(field, self.validate_field(field, fields.get(field)));
        }
        result
    }

    /// Validate a single field's value.
    ///
    /// An empty required field reports only that it is required, never its
    /// length or format.
    pub fn validate_field(&self, field: Field, value: &str) -> Option<ValidationError> {
        check(field, self.rules.rule(field), value)
    }
}

fn check(field: Field, rule: &ValidationRule, value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return rule.required.then_some(ValidationError::Required(field));
    }

    if let Some(min_length) = rule.min_length {
        if value.chars().count() < min_length {
            return Some(ValidationError::TooShort { field, min_length });
        }
    }

    if rule.email && !EmailAddress::is_valid(value) {
        return Some(ValidationError::InvalidEmail(field));
    }

    None
}

/// Validate `fields` with the default contact form rules.
pub fn validate(fields: &ContactFields) -> ValidationResult {
    Validator::default().validate(fields)
}
