//! Number formatting module
//!
//! This module renders numbers as display strings according to a format pattern and a
//! locale. The main entry point is the `format_number` function.

mod core;
mod digits;
pub(crate) mod rounding;

pub use self::core::format_value;

use crate::locale;
use crate::parser::{parse_format_pattern, to_number};
use crate::types::FormatOptions;

/// Format a number according to `options.format` and `options.locale`
///
/// # Arguments
/// * `value` - The numeric value to format
/// * `options` - Pattern, locale and rendering options
///
/// # Returns
/// * `Option<String>` - The formatted string, or `None` for NaN when `nan_force_zero` is off
///
/// # Examples
/// ```
/// use number_pattern::formatter::format_number;
/// use number_pattern::types::FormatOptions;
///
/// let options = FormatOptions::new("#,###.00").with_locale("de");
/// assert_eq!(format_number(1234567.8, &options).as_deref(), Some("1.234.567,80"));
/// ```
pub fn format_number(value: f64, options: &FormatOptions) -> Option<String> {
    let symbols = locale::resolve(&options.locale);
    let pattern = parse_format_pattern(&options.format);
    format_value(value, &pattern, &symbols, options)
}

/// Format a plain number string such as `"1002.0123"`.
///
/// The text is read as a plain numeric literal; text that is not one is treated as NaN.
pub fn format_str(text: &str, options: &FormatOptions) -> Option<String> {
    format_number(to_number(text), options)
}
