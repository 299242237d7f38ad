//! Rounding helpers for the format engine
//!
//! Rounding is half toward positive infinity at a given number of decimal places, so
//! `2.5` becomes `3` and `-2.5` becomes `-2`.

/// Round to the nearest integer, ties toward positive infinity
fn round_half_toward_positive(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

// Largest power of ten that is still finite
const MAX_PLACES: usize = 308;
// Above this magnitude every f64 is already an integer
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Round `value` to `places` decimal places, ties toward positive infinity
pub(crate) fn round_half_up(value: f64, places: usize) -> f64 {
    let power = 10f64.powi(places.min(MAX_PLACES) as i32);
    let scaled = value * power;
    // No fraction left at this precision, or scaling would overflow
    if !scaled.is_finite() || value.abs() >= EXACT_INTEGER_LIMIT / power {
        return if value == 0.0 { 0.0 } else { value };
    }
    let rounded = round_half_toward_positive(scaled) / power;
    // Normalize -0.0 so the sign test downstream only sees real negatives
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Cut `value` toward zero after `places` decimal places of its shortest decimal rendering
pub(crate) fn truncate(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let mut text = value.to_string();
    if let Some(dot) = text.find('.') {
        let end = if places == 0 { dot } else { dot + places + 1 };
        text.truncate(end.min(text.len()));
    }
    match text.parse::<f64>() {
        Ok(truncated) if truncated == 0.0 => 0.0,
        Ok(truncated) => truncated,
        Err(_) => value,
    }
}

/// Render `value` with exactly `places` fraction digits.
///
/// `value` is expected to be already rounded to `places`, so the output digits are exact.
pub(crate) fn to_fixed(value: f64, places: usize) -> String {
    format!("{value:.places$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.5, 0, 3.0)]
    #[case(-2.5, 0, -2.0)]
    #[case(1.005, 2, 1.0)]
    #[case(1.235, 2, 1.24)]
    #[case(-23.455, 2, -23.45)]
    #[case(0.004, 2, 0.0)]
    #[case(1234567.8, 2, 1234567.8)]
    #[case(1e307, 2, 1e307)]
    #[case(f64::MAX, 2, f64::MAX)]
    #[case(-1e300, 20, -1e300)]
    #[case(1.5, 10_000, 1.5)]
    fn test_round_half_up(#[case] value: f64, #[case] places: usize, #[case] expected: f64) {
        assert_eq!(round_half_up(value, places), expected);
    }

    #[test]
    fn test_round_never_yields_negative_zero() {
        let rounded = round_half_up(-0.001, 2);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[rstest]
    #[case(1.239, 2, 1.23)]
    #[case(-1.239, 2, -1.23)]
    #[case(1234.0, 2, 1234.0)]
    #[case(9.99, 0, 9.0)]
    #[case(-0.001, 2, 0.0)]
    fn test_truncate(#[case] value: f64, #[case] places: usize, #[case] expected: f64) {
        assert_eq!(truncate(value, places), expected);
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(round_half_up(1234567.8, 2), 2), "1234567.80");
        assert_eq!(to_fixed(round_half_up(0.125, 2), 2), "0.13");
        assert_eq!(to_fixed(3.0, 0), "3");
    }
}
