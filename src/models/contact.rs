//! Contact field values and submitted snapshots.

use crate::domain::{EmailAddress, Field, ValidationError};
use serde::{Deserialize, Serialize};

/// Current values of the form's four inputs.
///
/// Created empty when the form mounts and overwritten on every change event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// Create field values from their four parts.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Get the value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Replace the value of one field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// Field values captured by the last successful submission.
///
/// Only the submission handler creates one, so holding a snapshot means the
/// values passed validation at that moment. The email is held as a checked
/// [`EmailAddress`]. Later edits to the form do not reach it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedSnapshot {
    first_name: String,
    last_name: String,
    email: EmailAddress,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    message: String,
}

impl SubmittedSnapshot {
    /// Copy `fields`, checking the email address on the way.
    pub(crate) fn capture(fields: &ContactFields) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            email: EmailAddress::new(fields.email.as_str())?,
            message: fields.message.clone(),
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// The submitted message, or `None` when it was left empty.
    pub fn message(&self) -> Option<&str> {
        if self.message.is_empty() {
            None
        } else {
            Some(&self.message)
        }
    }

    /// Get the submitted value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => self.email.as_str(),
            Field::Message => &self.message,
        }
    }
}
