use crate::types::MaskToken;

/// Render fraction digits against the fraction mask.
///
/// `0` always emits its digit. `#` emits a zero digit only when a non-zero digit follows it;
/// otherwise rendering stops for the rest of the mask. Other mask characters consume a digit
/// position without emitting anything.
pub(super) fn render_fraction(mask: &[MaskToken], digits: &str) -> String {
    let digits: Vec<char> = digits.chars().collect();
    let mut result = String::with_capacity(mask.len());

    for (i, token) in mask.iter().enumerate() {
        let Some(&digit) = digits.get(i) else {
            break;
        };
        match token {
            MaskToken::DigitOrZero => result.push(digit),
            MaskToken::DigitIfNeeded if digit != '0' => result.push(digit),
            MaskToken::DigitIfNeeded => {
                if digits[i..].iter().any(|d| matches!(d, '1'..='9')) {
                    result.push(digit);
                } else {
                    break;
                }
            }
            MaskToken::ThousandsSeparator | MaskToken::Literal(_) => {}
        }
    }

    result
}

/// Insert `separator` every `group_width` digits counted from the right
pub(super) fn group_digits(digits: &str, group_width: Option<usize>, separator: char) -> String {
    let width = match group_width {
        Some(width) if width > 0 => width,
        _ => return digits.to_string(),
    };

    let chars: Vec<char> = digits.chars().collect();
    let mut grouped: Vec<char> = Vec::with_capacity(chars.len() + chars.len() / width);
    for (count, digit) in chars.iter().rev().enumerate() {
        if count > 0 && count % width == 0 {
            grouped.push(separator);
        }
        grouped.push(*digit);
    }
    grouped.reverse();
    grouped.into_iter().collect()
}

/// Left-pad with zeros up to the width implied by the first `0` of the integer mask.
///
/// Padding only happens when the mask is wider than the rendered integer, group separators
/// included.
pub(super) fn pad_integer(rendered: String, mask: &[MaskToken]) -> String {
    let rendered_len = rendered.chars().count();
    if mask.len() <= rendered_len {
        return rendered;
    }
    let Some(pad_start) = mask.iter().position(|t| *t == MaskToken::DigitOrZero) else {
        return rendered;
    };
    let pad_len = mask.len() - pad_start;
    if rendered_len >= pad_len {
        return rendered;
    }
    let mut padded = "0".repeat(pad_len - rendered_len);
    padded.push_str(&rendered);
    padded
}
