//! The rendered view and its queries.

use crate::domain::Field;
use crate::error::{QueryError, QueryResult};

/// Accessible role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Heading,
    Textbox,
    Button,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Heading => "heading",
            Role::Textbox => "textbox",
            Role::Button => "button",
        }
    }
}

/// What an element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Heading,
    /// A labelled input holding the field's current value.
    Input(Field),
    /// The inline error for a field.
    Error(Field),
    Button,
    /// A submitted value in the summary region.
    SummaryValue(Field),
}

/// One element of the rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    kind: ElementKind,
    text: String,
    value: Option<String>,
}

impl Element {
    pub(crate) fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            value: None,
        }
    }

    pub(crate) fn input(field: Field, value: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Input(field),
            text: String::new(),
            value: Some(value.into()),
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Text content. Inputs have none; their value is in [`Element::value`].
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current value of an input.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Accessible label, for inputs.
    pub fn label(&self) -> Option<&'static str> {
        match self.kind {
            ElementKind::Input(field) => Some(field.label()),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self.kind {
            ElementKind::Heading => Some(Role::Heading),
            ElementKind::Input(_) => Some(Role::Textbox),
            ElementKind::Button => Some(Role::Button),
            ElementKind::Error(_) | ElementKind::SummaryValue(_) => None,
        }
    }

    pub fn test_id(&self) -> Option<&'static str> {
        match self.kind {
            ElementKind::Error(_) => Some(super::ERROR_TEST_ID),
            ElementKind::SummaryValue(field) => Some(field.display_test_id()),
            _ => None,
        }
    }
}

/// The form as rendered for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    elements: Vec<Element>,
}

impl View {
    pub(crate) fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Whether the submitted summary region is shown.
    pub fn has_summary(&self) -> bool {
        self.summary().next().is_some()
    }

    /// Elements inside the summary region, in form order.
    pub fn summary(&self) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(|e| matches!(e.kind, ElementKind::SummaryValue(_)))
    }

    /// Text of every inline error, in form order.
    pub fn error_messages(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|e| matches!(e.kind, ElementKind::Error(_)))
            .map(Element::text)
            .collect()
    }

    pub fn query_all_by_test_id(&self, test_id: &str) -> Vec<&Element> {
        self.filter(|e| e.test_id() == Some(test_id))
    }

    pub fn query_by_test_id(&self, test_id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.test_id() == Some(test_id))
    }

    pub fn get_by_test_id(&self, test_id: &str) -> QueryResult<&Element> {
        single(
            self.query_all_by_test_id(test_id),
            format!("with test id: {}", test_id),
        )
    }

    /// Elements whose text content equals `text`.
    pub fn query_all_by_text(&self, text: &str) -> Vec<&Element> {
        self.filter(|e| !e.text.is_empty() && e.text == text)
    }

    pub fn query_by_text(&self, text: &str) -> Option<&Element> {
        self.query_all_by_text(text).into_iter().next()
    }

    pub fn get_by_text(&self, text: &str) -> QueryResult<&Element> {
        single(self.query_all_by_text(text), format!("with text: {}", text))
    }

    /// The input whose label contains `label`, ignoring case.
    pub fn get_by_label_text(&self, label: &str) -> QueryResult<&Element> {
        let needle = label.to_lowercase();
        single(
            self.filter(|e| {
                e.label()
                    .is_some_and(|l| l.to_lowercase().contains(&needle))
            }),
            format!("with label text: {}", label),
        )
    }

    pub fn get_by_role(&self, role: Role) -> QueryResult<&Element> {
        single(
            self.filter(|e| e.role() == Some(role)),
            format!("with role: {}", role.as_str()),
        )
    }

    fn filter(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        self.elements.iter().filter(|e| predicate(*e)).collect()
    }
}

fn single(mut matches: Vec<&Element>, query: String) -> QueryResult<&Element> {
    match matches.len() {
        0 => Err(QueryError::NotFound(query)),
        1 => Ok(matches.remove(0)),
        count => Err(QueryError::MultipleFound { query, count }),
    }
}
