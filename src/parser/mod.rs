//! Pattern and number parsing module
//!
//! This module splits format pattern strings into their literal text and digit masks, and
//! turns display strings back into numbers. The main entry points are
//! `parse_format_pattern` and `parse_number`.

mod number;
mod pattern;

pub use number::{parse_number, to_number};
pub use pattern::{PATTERN_CHARS, parse_format_pattern};
