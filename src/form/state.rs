//! Display states and the pure submission step.

use crate::models::{ContactFields, SubmittedSnapshot};
use crate::validation::{ValidationResult, Validator};

/// Which view the form shows, driven only by the latest submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// The latest submit had at least one failing field.
    Invalid,

    /// The latest submit passed and produced a snapshot.
    Valid,
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; the previous snapshot is kept.
    Invalid(ValidationResult),

    /// Every field passed; this snapshot replaces the previous one.
    Valid(SubmittedSnapshot),
}

impl SubmitOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, SubmitOutcome::Valid(_))
    }

    /// The display state this outcome moves the form into.
    pub fn display_state(&self) -> DisplayState {
        match self {
            SubmitOutcome::Invalid(_) => DisplayState::Invalid,
            SubmitOutcome::Valid(_) => DisplayState::Valid,
        }
    }
}

/// Validate `fields` and decide the outcome of submitting them.
///
/// The snapshot, when produced, is an owned copy of `fields` as they are now.
pub fn handle_submit(validator: &Validator, fields: &ContactFields) -> SubmitOutcome {
    let errors = validator.validate(fields);
    if !errors.is_valid() {
        return SubmitOutcome::Invalid(errors);
    }

    match SubmittedSnapshot::capture(fields) {
        Ok(snapshot) => SubmitOutcome::Valid(snapshot),
        Err(err) => SubmitOutcome::Invalid(std::iter::once(err).collect()),
    }
}
