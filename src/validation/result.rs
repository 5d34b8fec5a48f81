//! The outcome of validating the form's fields.

use crate::domain::{Field, ValidationError};
use std::collections::BTreeMap;

/// Map from field to its error; a missing entry means the field is valid.
///
/// Iteration follows form order (first name, last name, email, message).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    errors: BTreeMap<Field, ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field has an error.
    pub fn is_valid(&self) -> bool {
        self.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error for `field`, if it failed.
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// The user-facing message for `field`, if it failed.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Failing fields and their errors, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.errors.iter().map(|(field, err)| (*field, err))
    }

    /// All error messages, in form order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.values().map(ToString::to_string).collect()
    }

    /// Record `field`'s outcome, replacing any earlier error for it.
    pub(crate) fn set(&mut self, field: Field, error: Option<ValidationError>) {
        match error {
            Some(err) => {
                self.errors.insert(field, err);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}

impl FromIterator<ValidationError> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut result = Self::new();
        for err in iter {
            result.set(err.field(), Some(err));
        }
        result
    }
}
