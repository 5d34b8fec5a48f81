//! Shared helpers for contact form integration tests.
//!
//! These mimic how a user drives the rendered form: find an input by its
//! label, type into it one character at a time, click the button.

#![allow(dead_code)]

use contact_form::{
    ContactForm, ElementKind, FormConfig, Role, SubmitOutcome, ValidationMode,
};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Mount a form with default rules; edited fields validate as they change.
pub fn render_form() -> ContactForm {
    init_tracing();
    ContactForm::new()
}

/// Mount a form that shows errors only after a submit.
pub fn render_form_on_submit() -> ContactForm {
    init_tracing();
    ContactForm::with_config(FormConfig {
        mode: ValidationMode::OnSubmit,
        ..Default::default()
    })
}

/// Type `text` into the input labelled `label`, one keystroke per character.
///
/// # Panics
/// Panics if no single input matches the label.
pub fn type_into(form: &mut ContactForm, label: &str, text: &str) {
    let view = form.view();
    let input = view
        .get_by_label_text(label)
        .unwrap_or_else(|e| panic!("{}", e));
    let field = match input.kind() {
        ElementKind::Input(field) => field,
        other => panic!("label {:?} points at {:?}, not an input", label, other),
    };

    let mut value = input.value().unwrap_or_default().to_string();
    for c in text.chars() {
        value.push(c);
        form.on_change(field, value.clone());
    }
}

/// Click the form's button.
///
/// # Panics
/// Panics if the view has no single button.
pub fn click_submit(form: &mut ContactForm) -> SubmitOutcome {
    form.view()
        .get_by_role(Role::Button)
        .unwrap_or_else(|e| panic!("{}", e));
    form.on_submit()
}

/// Fill first name, last name and email with values that pass validation.
pub fn fill_valid_required(form: &mut ContactForm) {
    type_into(form, "first name", "firstname");
    type_into(form, "last name", "lastname");
    type_into(form, "email", "test@test.com");
}
