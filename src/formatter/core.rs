use crate::formatter::digits::{group_digits, pad_integer, render_fraction};
use crate::formatter::rounding::{round_half_up, to_fixed, truncate};
use crate::types::{FormatOptions, FormatPattern, LocaleSymbols, MaskToken};

/// Divide by powers of 1000 until the magnitude drops below 1000 or the labels run out.
/// Returns the scaled value and the label index.
fn apply_scale(value: f64, scale_names: &[String]) -> (f64, usize) {
    let abs_value = value.abs();
    let mut factor = 1.0;
    let mut index = 0;
    while index + 1 < scale_names.len() && abs_value >= factor * 1000.0 {
        factor *= 1000.0;
        index += 1;
    }
    (value / factor, index)
}

/// Format a value with an already decomposed pattern and resolved locale symbols.
///
/// `options.format` and `options.locale` are ignored here; every other option applies.
/// Returns `None` for NaN or infinite input unless `nan_force_zero` is set.
pub fn format_value(
    value: f64,
    pattern: &FormatPattern,
    symbols: &LocaleSymbols,
    options: &FormatOptions,
) -> Option<String> {
    let mut number = value;
    let mut forced_to_zero = false;
    // Infinities cannot be rendered as digits, so they take the NaN path too
    if !number.is_finite() {
        if !options.nan_force_zero {
            log::debug!("Refusing to format non-numeric value {value}");
            return None;
        }
        number = 0.0;
        forced_to_zero = true;
    }

    // A `%` suffix is display only: the caller has already multiplied by 100

    let mut scale_name = options.scale_names.first().cloned().unwrap_or_default();
    if options.scale || pattern.scale_enabled {
        let (scaled, index) = apply_scale(number, &options.scale_names);
        number = scaled;
        if let Some(name) = options.scale_names.get(index) {
            scale_name.clone_from(name);
        }
    }

    let fraction_portion = match &pattern.fraction_mask {
        Some(mask) => {
            let places = mask.len();
            number = if options.round {
                round_half_up(number, places)
            } else {
                truncate(number, places)
            };
            let fixed = to_fixed(number.abs(), places);
            let digits = fixed.split_once('.').map_or("", |(_, digits)| digits);
            render_fraction(mask, digits)
        }
        None => {
            number = round_half_up(number, 0);
            String::new()
        }
    };

    let integer_digits = to_fixed(number.abs().trunc(), 0);
    let integer_mask = &pattern.integer_mask;
    let mask_ends_optional = integer_mask.last() == Some(&MaskToken::DigitIfNeeded);

    let mut integer_portion = String::new();
    if integer_digits != "0" || !mask_ends_optional || forced_to_zero {
        let grouped = group_digits(
            &integer_digits,
            pattern.group_width(),
            symbols.group_separator,
        );
        integer_portion = pad_integer(grouped, integer_mask);
    }
    if integer_portion.is_empty() && integer_mask.last() == Some(&MaskToken::DigitOrZero) {
        integer_portion.push('0');
    }

    let mut body = integer_portion;
    if options.use_scale_as_decimal_separator && !scale_name.is_empty() {
        body.push_str(&scale_name);
        body.push_str(&fraction_portion);
    } else {
        if !fraction_portion.is_empty() || options.decimal_separator_always_shown {
            body.push(symbols.decimal_separator);
        }
        body.push_str(&fraction_portion);
        body.push_str(&scale_name);
    }

    let mut prefix = pattern.prefix.clone();
    if number < 0.0 {
        if pattern.negative_in_front && !prefix.is_empty() {
            prefix.insert(0, symbols.negative_sign);
        } else {
            body.insert(0, symbols.negative_sign);
        }
    }

    let mut result = prefix;
    result.push_str(&body);
    result.push_str(&pattern.suffix);
    Some(result)
}
