//! Rendering of the contact form.
//!
//! The form state is turned into a flat [`View`] of [`Element`]s. A view can
//! be queried the way a DOM testing library queries markup, and its
//! `Display` impl writes the markup itself.

pub mod markup;
pub mod view;

pub use view::{Element, ElementKind, Role, View};

use crate::domain::Field;
use crate::models::{ContactFields, SubmittedSnapshot};
use crate::validation::ValidationResult;

/// Heading text shown above the inputs.
pub const HEADING: &str = "Contact Form";

/// Test id carried by every inline error element.
pub const ERROR_TEST_ID: &str = "error";

/// Test id of the submitted summary region.
pub const SUMMARY_TEST_ID: &str = "summary";

/// Build the view for the given state.
///
/// Each input is followed by its error, if any. The summary region is
/// present exactly when a snapshot exists, and the message line only when
/// the submitted message is non-empty.
pub fn render(
    fields: &ContactFields,
    errors: &ValidationResult,
    snapshot: Option<&SubmittedSnapshot>,
) -> View {
    let mut elements = vec![Element::new(ElementKind::Heading, HEADING)];

    for field in Field::ALL {
        elements.push(Element::input(field, fields.get(field)));
        if let Some(err) = errors.get(field) {
            elements.push(Element::new(ElementKind::Error(field), err.to_string()));
        }
    }

    elements.push(Element::new(ElementKind::Button, "Submit"));

    if let Some(snapshot) = snapshot {
        for field in Field::ALL {
            let value = snapshot.get(field);
            if field == Field::Message && value.is_empty() {
                continue;
            }
            elements.push(Element::new(ElementKind::SummaryValue(field), value));
        }
    }

    View::new(elements)
}
