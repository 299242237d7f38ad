use number_pattern::types::FormatOptions;
use number_pattern::{format_number, parse_number};
use rstest::rstest;

fn locale(code: &str) -> FormatOptions {
    FormatOptions::default().with_locale(code)
}

#[rstest]
#[case("1,234.56", "us", 1234.56)]
#[case("1.234,56", "de", 1234.56)]
#[case("1 234,56", "fr", 1234.56)]
#[case("1'234.56", "ch", 1234.56)]
#[case("1.234.567,8", "DE", 1234567.8)]
#[case("1,234.56", "zz", 1234.56)]
fn test_parse_locales(#[case] text: &str, #[case] code: &str, #[case] expected: f64) {
    assert_eq!(parse_number(text, &locale(code)), expected);
}

#[test]
fn test_parse_discards_literals() {
    let options = FormatOptions::default();
    assert_eq!(parse_number("-$23.50", &options), -23.5);
    assert_eq!(parse_number("$-23.50", &options), -23.5);
    assert_eq!(parse_number("USD 1,234.50", &options), 1234.5);
    assert_eq!(parse_number("5.0 kg", &options), 5.0);
}

#[test]
fn test_parse_percent() {
    let options = FormatOptions::default();
    assert_eq!(parse_number("12.5%", &options), 0.125);
    assert_eq!(parse_number("50%", &options), 0.5);
}

#[test]
fn test_parse_percent_precision_follows_text_length() {
    // The rounding precision is the filtered text length minus one, so a single digit
    // percentage rounds away entirely
    let options = FormatOptions::default();
    assert_eq!(parse_number("1%", &options), 0.0);
    assert_eq!(parse_number("5%", &options), 0.0);
    assert_eq!(parse_number("10%", &options), 0.1);
}

#[test]
fn test_parse_empty_and_invalid() {
    let options = FormatOptions::default();
    assert_eq!(parse_number("", &options), 0.0);
    assert_eq!(parse_number("abc", &options), 0.0);
    assert!(parse_number("1.2.3", &options).is_nan());
    assert!(parse_number("--5", &options).is_nan());
    assert!(parse_number("1-2", &options).is_nan());
}

#[rstest]
#[case(0.5)]
#[case(42.0)]
#[case(1234.56)]
#[case(-9876543.21)]
#[case(1_000_000.0)]
fn test_round_trip(
    #[case] value: f64,
    #[values("us", "de", "fr", "ch")] code: &str,
    #[values("#,##0.00", "-$#,##0.00", "0.00 EUR")] format: &str,
) {
    let options = FormatOptions::new(format).with_locale(code);
    let text = format_number(value, &options).expect("value should format");
    let parsed = parse_number(&text, &options);
    assert!(
        (parsed - value).abs() < 1e-9,
        "{value} -> {text:?} -> {parsed} ({format}, {code})"
    );
}

#[test]
fn test_round_trip_within_mask_precision() {
    let options = FormatOptions::new("#,##0.0").with_locale("de");
    let text = format_number(1234.56, &options).expect("value should format");
    assert_eq!(text, "1.234,6");
    assert_eq!(parse_number(&text, &options), 1234.6);
}
