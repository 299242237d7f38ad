use winnow::combinator::{alt, opt, repeat};
use winnow::token::{any, take_till};
use winnow::{ModalResult, Parser};

use crate::types::{FormatPattern, MaskToken};

/// Characters that belong to the mask; everything else at either end is literal text
pub const PATTERN_CHARS: [char; 6] = ['0', '#', '-', ',', '.', '^'];

#[derive(Debug, Clone, Copy, PartialEq)]
enum PatternChar {
    Mask(MaskToken),
    DecimalPoint,
    ScaleMarker,
}

fn parse_digit_or_zero(input: &mut &str) -> ModalResult<PatternChar> {
    '0'.value(PatternChar::Mask(MaskToken::DigitOrZero))
        .parse_next(input)
}

fn parse_digit_if_needed(input: &mut &str) -> ModalResult<PatternChar> {
    '#'.value(PatternChar::Mask(MaskToken::DigitIfNeeded))
        .parse_next(input)
}

fn parse_thousands_separator(input: &mut &str) -> ModalResult<PatternChar> {
    ','.value(PatternChar::Mask(MaskToken::ThousandsSeparator))
        .parse_next(input)
}

fn parse_decimal_point(input: &mut &str) -> ModalResult<PatternChar> {
    '.'.value(PatternChar::DecimalPoint).parse_next(input)
}

fn parse_scale_marker(input: &mut &str) -> ModalResult<PatternChar> {
    '^'.value(PatternChar::ScaleMarker).parse_next(input)
}

fn parse_literal(input: &mut &str) -> ModalResult<PatternChar> {
    any.map(|c| PatternChar::Mask(MaskToken::Literal(c)))
        .parse_next(input)
}

fn parse_pattern_char(input: &mut &str) -> ModalResult<PatternChar> {
    alt((
        parse_digit_or_zero,
        parse_digit_if_needed,
        parse_thousands_separator,
        parse_decimal_point,
        parse_scale_marker,
        parse_literal,
    ))
    .parse_next(input)
}

/// Leading literal text. A `-` at the very start is not part of the prefix: it moves the
/// sign in front of the prefix.
fn parse_prefix<'s>(input: &mut &'s str) -> ModalResult<(bool, &'s str)> {
    (opt('-').map(|sign| sign.is_some()), take_till(0.., PATTERN_CHARS)).parse_next(input)
}

/// Split a pattern string into prefix, masks and suffix.
///
/// This never fails: characters outside the mask alphabet are kept as literal text, and a
/// pattern without any mask character becomes a prefix with an empty mask.
///
/// # Examples
/// ```
/// use number_pattern::parser::parse_format_pattern;
///
/// let pattern = parse_format_pattern("-$#,##0.00 USD");
/// assert!(pattern.negative_in_front);
/// assert_eq!(pattern.prefix, "$");
/// assert_eq!(pattern.suffix, " USD");
/// assert_eq!(pattern.fraction_len(), 2);
/// ```
pub fn parse_format_pattern(pattern: &str) -> FormatPattern {
    let mut input = pattern;
    let (negative_in_front, prefix) = match parse_prefix.parse_next(&mut input) {
        Ok(parsed) => parsed,
        Err(_) => (false, ""),
    };

    let (mask, suffix) = match input.rfind(PATTERN_CHARS) {
        Some(idx) => input.split_at(idx + 1),
        None => ("", input),
    };

    let mut mask_input = mask;
    let chars: Vec<PatternChar> = repeat(0.., parse_pattern_char)
        .parse_next(&mut mask_input)
        .unwrap_or_default();

    let scale_enabled = chars.contains(&PatternChar::ScaleMarker);
    let chars: Vec<PatternChar> = chars
        .into_iter()
        .filter(|c| *c != PatternChar::ScaleMarker)
        .collect();

    let first_point = chars.iter().position(|c| *c == PatternChar::DecimalPoint);
    let last_point = chars.iter().rposition(|c| *c == PatternChar::DecimalPoint);

    let mask_tokens = |slice: &[PatternChar]| -> Vec<MaskToken> {
        slice
            .iter()
            .filter_map(|c| match c {
                PatternChar::Mask(token) => Some(*token),
                _ => None,
            })
            .collect()
    };

    let integer_mask = mask_tokens(&chars[..first_point.unwrap_or(chars.len())]);
    let fraction_mask = last_point.map(|idx| mask_tokens(&chars[idx + 1..]));

    let decomposed = FormatPattern {
        prefix: prefix.to_string(),
        suffix: suffix.to_string(),
        negative_in_front,
        integer_mask,
        fraction_mask,
        scale_enabled,
    };
    log::trace!("Decomposed format pattern '{pattern}': {decomposed:?}");
    decomposed
}
