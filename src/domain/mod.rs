//! Domain value objects and types.
//!
//! This module contains the form's field identities, the email address
//! value object, and the per-field validation error shown to the user.

pub mod email;
pub mod errors;
pub mod field;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::Field;
