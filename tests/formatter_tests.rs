use number_pattern::types::FormatOptions;
use number_pattern::{format_number, format_str, parse_number};

fn fmt(value: f64, options: &FormatOptions) -> String {
    format_number(value, options).expect("value should format")
}

#[test]
fn test_default_format() {
    let options = FormatOptions::default();
    assert_eq!(fmt(1234567.8, &options), "1,234,567.80");
    assert_eq!(fmt(4500.2, &options), "4,500.20");
    assert_eq!(fmt(12.0, &options), "12.00");
}

#[test]
fn test_locale_symbols() {
    let options = FormatOptions::new("#,###.00");
    assert_eq!(fmt(1234567.8, &options.clone().with_locale("de")), "1.234.567,80");
    assert_eq!(fmt(1234567.8, &options.clone().with_locale("fr")), "1 234 567,80");
    assert_eq!(fmt(1234567.8, &options.clone().with_locale("ch")), "1'234'567.80");
    assert_eq!(fmt(1234567.8, &options.clone().with_locale("DE")), "1.234.567,80");
    assert_eq!(fmt(1234567.8, &options.with_locale("zz")), "1,234,567.80");
}

#[test]
fn test_negative_sign_placement() {
    assert_eq!(fmt(-23.5, &FormatOptions::new("-$#,##0.00")), "-$23.50");
    assert_eq!(fmt(-23.5, &FormatOptions::new("$#,##0.00")), "$-23.50");
    assert_eq!(fmt(23.5, &FormatOptions::new("-$#,##0.00")), "$23.50");
    // Without a prefix the sign stays with the digits
    assert_eq!(fmt(-5.0, &FormatOptions::new("-#,##0")), "-5");
    assert_eq!(
        fmt(-1234.5, &FormatOptions::new("#,##0.00").with_locale("de")),
        "-1.234,50"
    );
}

#[test]
fn test_value_rounding_to_zero_drops_sign() {
    assert_eq!(fmt(-0.001, &FormatOptions::new("0.00")), "0.00");
}

#[test]
fn test_optional_digits_suppress_zero() {
    assert_eq!(fmt(0.004, &FormatOptions::new("#,###.##")), "");
    assert_eq!(fmt(0.004, &FormatOptions::new("#,##0.##")), "0");
    assert_eq!(fmt(0.5, &FormatOptions::new("#.00")), ".50");
    assert_eq!(fmt(0.5, &FormatOptions::new("0.00")), "0.50");
    assert_eq!(fmt(1.25, &FormatOptions::new("#.#")), "1.3");
    assert_eq!(fmt(1234567.891, &FormatOptions::new("#,##0.###")), "1,234,567.891");
}

#[test]
fn test_nan_handling() {
    let options = FormatOptions::new("#,###.##");
    assert_eq!(fmt(f64::NAN, &options), "0");
    assert_eq!(fmt(f64::NAN, &FormatOptions::default()), "0.00");

    let strict = options.with_nan_force_zero(false);
    assert_eq!(format_number(f64::NAN, &strict), None);
    assert_eq!(format_number(f64::INFINITY, &strict), None);
}

#[test]
fn test_integer_rounding() {
    let options = FormatOptions::new("0");
    assert_eq!(fmt(2.5, &options), "3");
    assert_eq!(fmt(-2.5, &options), "-2");
    assert_eq!(fmt(2.4, &options), "2");
}

#[test]
fn test_round_versus_truncate() {
    let options = FormatOptions::new("0.00");
    assert_eq!(fmt(1.239, &options), "1.24");
    assert_eq!(fmt(1.239, &options.clone().with_round(false)), "1.23");
    assert_eq!(fmt(-1.239, &options.with_round(false)), "-1.23");
}

#[test]
fn test_zero_padding() {
    assert_eq!(fmt(7.0, &FormatOptions::new("000")), "007");
    assert_eq!(fmt(7.0, &FormatOptions::new("00.0")), "07.0");
    assert_eq!(fmt(1234.0, &FormatOptions::new("00")), "1234");
}

#[test]
fn test_group_width_from_mask() {
    assert_eq!(fmt(1234567.0, &FormatOptions::new("#,##")), "1,23,45,67");
    assert_eq!(fmt(1234567.0, &FormatOptions::new("####")), "1234567");
}

#[test]
fn test_decimal_separator_always_shown() {
    let options = FormatOptions::new("#,##0").with_decimal_separator_always_shown(true);
    assert_eq!(fmt(12.0, &options), "12.");
    assert_eq!(
        fmt(12.0, &options.with_format("#,##0.##").with_locale("de")),
        "12,"
    );
    assert_eq!(fmt(12.0, &FormatOptions::new("#,##0.##")), "12");
}

#[test]
fn test_scale_enabled_by_marker() {
    let options = FormatOptions::new("#,###^").with_scale_names(["", "K", "M"]);
    assert_eq!(fmt(1_500_000.0, &options), "2M");
    assert_eq!(fmt(1_500_000.0, &options.clone().with_format("#,###.#^")), "1.5M");
    assert_eq!(fmt(999.0, &options), "999");
    assert_eq!(fmt(-1234.0, &options.with_format("#,###.##^")), "-1.23K");
}

#[test]
fn test_scale_option() {
    let options = FormatOptions::new("#.#").with_scale(true);
    assert_eq!(fmt(2500.0, &options), "2.5K");
    assert_eq!(fmt(3_000_000_000.0, &options), "3B");
}

#[test]
fn test_scale_beyond_last_label() {
    let options = FormatOptions::new("#,###").with_scale(true).with_scale_names(["", "K"]);
    assert_eq!(fmt(2_000_000.0, &options), "2,000K");
}

#[test]
fn test_scale_as_decimal_separator() {
    let options = FormatOptions::new("#.#^").with_scale_as_decimal_separator(true);
    assert_eq!(fmt(4700.0, &options), "4K7");
    assert_eq!(fmt(470.0, &options), "470");
}

#[test]
fn test_percent_suffix_is_display_only() {
    assert_eq!(fmt(12.5, &FormatOptions::new("#0.0%")), "12.5%");
}

#[test]
fn test_literal_prefix_and_suffix() {
    assert_eq!(fmt(5.0, &FormatOptions::new("0.0 kg")), "5.0 kg");
    assert_eq!(fmt(1234.5, &FormatOptions::new("USD #,##0.00")), "USD 1,234.50");
    // A pattern without mask characters is all prefix; the digits still follow it
    assert_eq!(fmt(5.0, &FormatOptions::new("n/a")), "n/a5");
}

#[test]
fn test_format_str() {
    let options = FormatOptions::new("#,###.##");
    assert_eq!(format_str("1002.0123", &options).as_deref(), Some("1,002.01"));
    assert_eq!(format_str(" 42 ", &options).as_deref(), Some("42"));
    assert_eq!(format_str("abc", &FormatOptions::default()).as_deref(), Some("0.00"));
    assert_eq!(
        format_str("abc", &FormatOptions::default().with_nan_force_zero(false)),
        None
    );
}

#[test]
fn test_huge_values_keep_their_digits() {
    let options = FormatOptions::default();
    for value in [1e306, 1e307, f64::MAX, -f64::MAX] {
        let text = fmt(value, &options);
        assert!(!text.contains("inf"), "{value} rendered as {text:?}");
        assert!(text.ends_with(".00"), "{value} rendered as {text:?}");
        assert_eq!(parse_number(&text, &options), value);
    }
}
