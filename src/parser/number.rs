use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::token::one_of;
use winnow::{ModalResult, Parser};

use crate::formatter::rounding::round_half_up;
use crate::locale;
use crate::types::FormatOptions;

/// Decimal literal with optional sign, fraction and exponent, e.g. `-12.5e3` or `.5`
fn parse_decimal_literal<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (
        opt(one_of(['+', '-'])),
        alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .parse_next(input)
}

fn parse_infinity(input: &mut &str) -> ModalResult<f64> {
    (opt(one_of(['+', '-'])), "Infinity")
        .map(|(sign, _)| {
            if sign == Some('-') {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        })
        .parse_next(input)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Convert a plain numeric string to a number.
///
/// Surrounding whitespace is ignored and an empty string is zero. Decimal literals,
/// `Infinity` and `0x`/`0o`/`0b` integer literals are accepted; anything else is NaN.
pub fn to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }
    if let Ok(value) = parse_infinity.parse(trimmed) {
        return value;
    }
    parse_decimal_literal
        .parse(trimmed)
        .ok()
        .and_then(|literal| literal.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Parse a display string back into a number using the locale of `options`.
///
/// Group separators are dropped, the locale's decimal separator and negative sign are
/// normalized, and every character other than digits, `.` and `-` is discarded. A trailing
/// `%` divides the result by 100. Returns NaN when what is left is not a number.
///
/// # Examples
/// ```
/// use number_pattern::parser::parse_number;
/// use number_pattern::types::FormatOptions;
///
/// let options = FormatOptions::default().with_locale("de");
/// assert_eq!(parse_number("1.234,56", &options), 1234.56);
/// ```
pub fn parse_number(text: &str, options: &FormatOptions) -> f64 {
    let symbols = locale::resolve(&options.locale);

    let ungrouped: String = text
        .chars()
        .filter(|c| *c != symbols.group_separator)
        .collect();
    let normalized = ungrouped
        .replacen(symbols.decimal_separator, ".", 1)
        .replacen(symbols.negative_sign, "-", 1);

    let has_percent = normalized.ends_with('%');
    let valid_text: String = normalized
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let number = to_number(&valid_text);
    if has_percent {
        // Precision follows the length of the filtered text, not the pattern
        round_half_up(number / 100.0, valid_text.len().saturating_sub(1))
    } else {
        number
    }
}
