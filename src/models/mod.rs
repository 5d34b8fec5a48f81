//! Data models for the contact form's state.
//!
//! This module contains the live field values and the snapshot taken on a
//! successful submission.

pub mod contact;

pub use contact::{ContactFields, SubmittedSnapshot};
