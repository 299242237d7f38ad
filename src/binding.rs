//! Glue for host elements that hold a number as text
//!
//! A host element (an input box, a label, a table cell) only needs to expose its current
//! text and accept new text. `format_field` and `parse_field` read that text, run the
//! format engine and optionally write the result back.

use crate::formatter::format_str;
use crate::parser::parse_number;
use crate::types::FormatOptions;

/// A host element whose value is read and written as text
pub trait TextField {
    /// Current text of the element
    fn text(&self) -> String;
    /// Replace the element's text
    fn set_text(&mut self, text: &str);
}

impl TextField for String {
    fn text(&self) -> String {
        self.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Read a plain number from the field and format it.
///
/// With `write_back` the formatted text replaces the field's text; a value that cannot be
/// formatted writes an empty string.
pub fn format_field<F: TextField + ?Sized>(
    field: &mut F,
    options: &FormatOptions,
    write_back: bool,
) -> Option<String> {
    let formatted = format_str(&field.text(), options);
    if write_back {
        field.set_text(formatted.as_deref().unwrap_or_default());
    }
    formatted
}

/// Parse the field's display text into a number.
///
/// Only a non-zero numeric result counts as a success: zero and NaN return `None` and leave
/// the field untouched. With `write_back` a successful result replaces the field's text with
/// the plain number.
pub fn parse_field<F: TextField + ?Sized>(
    field: &mut F,
    options: &FormatOptions,
    write_back: bool,
) -> Option<f64> {
    let number = parse_number(&field.text(), options);
    if number == 0.0 || number.is_nan() {
        log::debug!("Field text did not parse to a usable number: {number}");
        return None;
    }
    if write_back {
        field.set_text(&number.to_string());
    }
    Some(number)
}
