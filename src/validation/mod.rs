//! Field validation for the contact form.
//!
//! Rules are plain data ([`ValidationRule`]); the [`Validator`] applies them
//! and collects at most one [`crate::domain::ValidationError`] per field.

pub mod result;
pub mod rules;
pub mod validator;

pub use result::ValidationResult;
pub use rules::{RuleSet, ValidationRule};
pub use validator::{validate, Validator};
