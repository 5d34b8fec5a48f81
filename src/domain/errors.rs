//! Domain validation errors.

use super::field::Field;
use std::fmt;

/// Why a field's current value is unacceptable.
///
/// The `Display` output is the exact message rendered beside the form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// A required field is empty.
    Required(Field),

    /// The field holds fewer characters than the rule allows.
    TooShort { field: Field, min_length: usize },

    /// The field does not hold a well-formed email address.
    InvalidEmail(Field),
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            Self::Required(field) | Self::InvalidEmail(field) => *field,
            Self::TooShort { field, .. } => *field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(field) => write!(f, "{} is a required field", field),
            Self::TooShort { field, min_length } => {
                write!(f, "{} must have at least {} characters", field, min_length)
            }
            Self::InvalidEmail(field) => write!(f, "{} must be a valid email address", field),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::Required(Field::LastName).to_string(),
            "lastName is a required field"
        );
        assert_eq!(
            ValidationError::TooShort {
                field: Field::FirstName,
                min_length: 5
            }
            .to_string(),
            "firstName must have at least 5 characters"
        );
        assert_eq!(
            ValidationError::InvalidEmail(Field::Email).to_string(),
            "email must be a valid email address"
        );
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::TooShort {
            field: Field::LastName,
            min_length: 5,
        };
        assert_eq!(err.field(), Field::LastName);
        assert_eq!(ValidationError::Required(Field::Email).field(), Field::Email);
    }
}
