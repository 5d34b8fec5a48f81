//! The contact form component.
//!
//! [`ContactForm`] owns the field values, the current inline errors and the
//! last submitted snapshot. Events go through its named handlers
//! (`on_change`, `on_submit`); the rendered view is re-derived from state on
//! demand with [`ContactForm::view`].

pub mod contact_form;
pub mod state;

pub use contact_form::ContactForm;
pub use state::{handle_submit, DisplayState, SubmitOutcome};
