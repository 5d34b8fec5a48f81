//! ContactForm state holder and event handlers.

use super::state::{handle_submit, DisplayState, SubmitOutcome};
use crate::config::{FormConfig, ValidationMode};
use crate::domain::Field;
use crate::error::FormResult;
use crate::models::{ContactFields, SubmittedSnapshot};
use crate::render::{self, View};
use crate::validation::{ValidationResult, Validator};
use tracing::{debug, trace};

/// A contact form with four fields and a submitted summary.
///
/// # Example
///
/// ```
/// use contact_form::{ContactForm, Field, SubmitOutcome};
///
/// let mut form = ContactForm::new();
/// form.on_change(Field::FirstName, "firstname");
/// form.on_change(Field::LastName, "lastname");
/// form.on_change(Field::Email, "test@test.com");
///
/// assert!(matches!(form.on_submit(), SubmitOutcome::Valid(_)));
/// assert!(form.view().query_by_text("firstname").is_some());
/// assert!(form.view().query_by_test_id("messageDisplay").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ContactForm {
    config: FormConfig,
    validator: Validator,
    fields: ContactFields,
    errors: ValidationResult,
    snapshot: Option<SubmittedSnapshot>,
    state: DisplayState,
}

impl ContactForm {
    /// Mount a form with empty fields and the default rules.
    ///
    /// Edited fields are re-validated as they change.
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Mount a form with empty fields and custom rules.
    pub fn with_config(config: FormConfig) -> Self {
        let validator = Validator::from_config(&config);
        Self {
            config,
            validator,
            fields: ContactFields::default(),
            errors: ValidationResult::new(),
            snapshot: None,
            state: DisplayState::Idle,
        }
    }

    /// Handle a change event on one input.
    ///
    /// In [`ValidationMode::OnChange`] the edited field's inline error is
    /// refreshed. The display state and snapshot never change here.
    pub fn on_change(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        trace!(field = field.name(), "field changed");

        if self.config.mode == ValidationMode::OnChange {
            let error = self.validator.validate_field(field, self.fields.get(field));
            self.errors.set(field, error);
        }
    }

    /// Handle a change event addressed by field name (`"firstName"`, ...).
    pub fn on_change_by_name(&mut self, name: &str, value: impl Into<String>) -> FormResult<()> {
        let field = name.parse::<Field>()?;
        self.on_change(field, value);
        Ok(())
    }

    /// Handle a click on the submit control.
    ///
    /// All errors are recomputed from the current values. A valid submit
    /// replaces the snapshot and clears errors; an invalid one keeps the
    /// previous snapshot.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        let outcome = handle_submit(&self.validator, &self.fields);
        self.state = outcome.display_state();

        match &outcome {
            SubmitOutcome::Valid(snapshot) => {
                debug!("submission accepted");
                self.errors = ValidationResult::new();
                self.snapshot = Some(snapshot.clone());
            }
            SubmitOutcome::Invalid(errors) => {
                debug!(failing_fields = errors.len(), "submission rejected");
                self.errors = errors.clone();
            }
        }

        outcome
    }

    /// Derive the rendered view from the current state.
    pub fn view(&self) -> View {
        render::render(&self.fields, &self.errors, self.snapshot.as_ref())
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Inline errors currently shown.
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    /// The last successfully submitted values.
    pub fn snapshot(&self) -> Option<&SubmittedSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
