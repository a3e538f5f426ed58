use goldwatch::locale::{format_locale_number, format_price, parse_locale_number};

#[test]
fn parses_grouped_turkish_format() {
    assert_eq!(parse_locale_number("1.234,56"), 1234.56);
    assert_eq!(parse_locale_number("43.000,00"), 43000.0);
    assert_eq!(parse_locale_number("2.450.000"), 2450000.0);
}

#[test]
fn parses_plain_and_signed_values() {
    assert_eq!(parse_locale_number("42430"), 42430.0);
    assert_eq!(parse_locale_number("0,2712"), 0.2712);
    assert_eq!(parse_locale_number("-5,5"), -5.5);
}

#[test]
fn empty_and_garbage_parse_to_zero() {
    assert_eq!(parse_locale_number(""), 0.0);
    assert_eq!(parse_locale_number("   "), 0.0);
    assert_eq!(parse_locale_number("abc"), 0.0);
    assert_eq!(parse_locale_number(",-"), 0.0);
}

#[test]
fn tolerates_trailing_junk_like_parse_float() {
    assert_eq!(parse_locale_number("42,5 TL"), 42.5);
    assert_eq!(parse_locale_number("100abc"), 100.0);
}

#[test]
fn formats_with_grouping() {
    assert_eq!(format_locale_number(1234.56, 2), "1.234,56");
    assert_eq!(format_locale_number(42430.0, 2), "42.430");
    assert_eq!(format_locale_number(0.2712, 4), "0,2712");
    assert_eq!(format_locale_number(2450000.0, 2), "2.450.000");
}

#[test]
fn formats_negative_values() {
    assert_eq!(format_locale_number(-1234.5, 2), "-1.234,5");
}

#[test]
fn zero_and_non_finite_format_as_zero() {
    assert_eq!(format_locale_number(0.0, 2), "0");
    assert_eq!(format_locale_number(f64::NAN, 2), "0");
    assert_eq!(format_locale_number(f64::INFINITY, 2), "0");
}

#[test]
fn round_trip_recovers_value_within_formatted_precision() {
    for &x in &[1234.5_f64, 0.2712, 42430.0] {
        let formatted = format_locale_number(x, 4);
        let back = parse_locale_number(&formatted);
        assert!(
            (back - x).abs() < 1e-4,
            "{} formatted as {} parsed back as {}",
            x,
            formatted,
            back
        );
    }
}

#[test]
fn price_display_keeps_at_least_two_fraction_digits() {
    assert_eq!(format_price(43500.0), "43.500,00");
    assert_eq!(format_price(42.431), "42,431");
    assert_eq!(format_price(5.43219), "5,4322");
}
