//! Contact Form - a contact form component with field validation and a
//! submitted summary view.
//!
//! The component holds four fields (first name, last name, email, message),
//! validates them on submit, and renders either inline errors or a summary
//! of the last successful submission.
//!
//! # Architecture
//!
//! - **domain**: Field identities, the email value object, validation errors
//! - **models**: Live field values and submitted snapshots
//! - **validation**: Per-field rules and the validator
//! - **form**: The `ContactForm` state holder and its event handlers
//! - **render**: The queryable view and its markup
//! - **config**: Rule parameters and validation mode
//! - **error**: Custom error types for the library's own APIs

pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod models;
pub mod render;
pub mod validation;

pub use config::{FormConfig, ValidationMode};
pub use domain::{EmailAddress, Field, ValidationError};
pub use error::{ConfigError, FormError, QueryError};
pub use form::{ContactForm, DisplayState, SubmitOutcome};
pub use models::{ContactFields, SubmittedSnapshot};
pub use render::{Element, ElementKind, Role, View};
pub use validation::{validate, ValidationResult, Validator};
