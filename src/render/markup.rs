//! HTML-like markup for a rendered view.

use super::view::{Element, ElementKind, View};
use super::SUMMARY_TEST_ID;
use std::fmt::{self, Write};

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<form>")?;
        for element in self.elements().iter().filter(|e| !in_summary(e)) {
            write_element(f, element)?;
        }
        f.write_str("</form>")?;

        if self.has_summary() {
            write!(f, "<div data-testid=\"{}\"><h3>You Submitted:</h3>", SUMMARY_TEST_ID)?;
            for element in self.summary() {
                write_element(f, element)?;
            }
            f.write_str("</div>")?;
        }
        Ok(())
    }
}

fn in_summary(element: &Element) -> bool {
    matches!(element.kind(), ElementKind::SummaryValue(_))
}

fn write_element(f: &mut fmt::Formatter<'_>, element: &Element) -> fmt::Result {
    match element.kind() {
        ElementKind::Heading => write!(f, "<h1>{}</h1>", Escaped(element.text())),
        ElementKind::Input(field) => {
            let tag = if field.is_required() { "*" } else { "" };
            write!(
                f,
                "<label for=\"{name}\">{label}{tag}</label><input id=\"{name}\" name=\"{name}\" value=\"{value}\"/>",
                name = field.name(),
                label = field.label(),
                value = Escaped(element.value().unwrap_or_default()),
            )
        }
        ElementKind::Error(_) => write!(
            f,
            "<p data-testid=\"error\">Error: {}</p>",
            Escaped(element.text())
        ),
        ElementKind::Button => write!(
            f,
            "<button type=\"submit\">{}</button>",
            Escaped(element.text())
        ),
        ElementKind::SummaryValue(field) => write!(
            f,
            "<p data-testid=\"{}\">{}: <span>{}</span></p>",
            field.display_test_id(),
            field.label(),
            Escaped(element.text())
        ),
    }
}

/// Writes text with markup-significant characters escaped.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}
