use chrono::{NaiveDate, TimeDelta};
use rust_decimal::Decimal;

use crate::context::ParseContext;
use crate::typed::enums::SettingEnum;
use crate::typed::value::{unbox, SettingValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Green,
    Blue,
}

crate::setting_enum!(Color { Red, Green, Blue });

fn ctx() -> ParseContext {
    ParseContext::invariant()
}

#[test]
fn test_bool_parse_is_literal_only() {
    assert_eq!(bool::parse_setting("true", &ctx()), Some(true));
    assert_eq!(bool::parse_setting("FALSE", &ctx()), Some(false));
    assert_eq!(bool::parse_setting("  True  ", &ctx()), Some(true));

    // No numeric fallback
    assert_eq!(bool::parse_setting("1", &ctx()), None);
    assert_eq!(bool::parse_setting("0", &ctx()), None);
    assert_eq!(bool::parse_setting("yes", &ctx()), None);
}

#[test]
fn test_integer_parse_with_sign_and_grouping() {
    assert_eq!(i32::parse_setting("42", &ctx()), Some(42));
    assert_eq!(i32::parse_setting("-42", &ctx()), Some(-42));
    assert_eq!(i32::parse_setting("+42", &ctx()), Some(42));
    assert_eq!(i32::parse_setting(" 1,234 ", &ctx()), Some(1234));
    assert_eq!(u64::parse_setting("18,446,744,073,709,551,615", &ctx()), Some(u64::MAX));

    // Width and signedness are enforced by the target type
    assert_eq!(i32::parse_setting("2147483648", &ctx()), None);
    assert_eq!(u32::parse_setting("-1", &ctx()), None);
    assert_eq!(i64::parse_setting("3.5", &ctx()), None);
    assert_eq!(i32::parse_setting("abc", &ctx()), None);
}

#[test]
fn test_float_and_decimal_parse() {
    assert_eq!(f64::parse_setting("3.14", &ctx()), Some(3.14));
    assert_eq!(f64::parse_setting("-1,234.5", &ctx()), Some(-1234.5));
    assert_eq!(f64::parse_setting("1e3", &ctx()), Some(1000.0));
    assert_eq!(f32::parse_setting("0.5", &ctx()), Some(0.5));
    assert_eq!(
        Decimal::parse_setting("123.456", &ctx()),
        Some(Decimal::new(123_456, 3))
    );
    assert_eq!(f64::parse_setting("", &ctx()), None);
    assert_eq!(Decimal::parse_setting("12x", &ctx()), None);
}

#[test]
fn test_numeric_parse_under_localized_context() {
    // German-style context: ',' decimal point, '.' grouping
    let german = ParseContext::new(',', '.', '-');
    assert_eq!(f64::parse_setting("1.234,5", &german), Some(1234.5));
    assert_eq!(i32::parse_setting("1.234", &german), Some(1234));
    assert_eq!(f64::parse_setting("-0,25", &german), Some(-0.25));
}

#[test]
fn test_duration_grammar() {
    assert_eq!(
        TimeDelta::parse_setting("01:02:03", &ctx()),
        Some(TimeDelta::seconds(3723))
    );
    assert_eq!(
        TimeDelta::parse_setting("1.01:02:03", &ctx()),
        Some(TimeDelta::seconds(86_400 + 3723))
    );
    assert_eq!(
        TimeDelta::parse_setting("-00:00:01", &ctx()),
        Some(TimeDelta::seconds(-1))
    );
    assert_eq!(
        TimeDelta::parse_setting("00:00:00.5", &ctx()),
        Some(TimeDelta::milliseconds(500))
    );
    assert_eq!(
        TimeDelta::parse_setting("00:00:01.1234567", &ctx()),
        TimeDelta::new(1, 123_456_700)
    );

    // Component range and shape are enforced
    assert_eq!(TimeDelta::parse_setting("24:00:00", &ctx()), None);
    assert_eq!(TimeDelta::parse_setting("00:60:00", &ctx()), None);
    assert_eq!(TimeDelta::parse_setting("00:00:01.12345678", &ctx()), None);
    assert_eq!(TimeDelta::parse_setting("01:02", &ctx()), None);
    assert_eq!(TimeDelta::parse_setting("5", &ctx()), None);
}

#[test]
fn test_datetime_layouts() {
    let expected = NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();

    for raw in [
        "2024-03-15T10:30:00",
        "2024-03-15 10:30:00",
        "2024-03-15 10:30",
        "2024/03/15 10:30:00",
        "15.03.2024 10:30:00",
        "2024-03-15T10:30:00Z",
    ] {
        assert_eq!(
            chrono::NaiveDateTime::parse_setting(raw, &ctx()),
            Some(expected),
            "layout {:?} did not parse",
            raw
        );
    }

    // Date-only layouts yield midnight
    let midnight = NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(
        chrono::NaiveDateTime::parse_setting("2024-03-15", &ctx()),
        Some(midnight)
    );

    assert_eq!(chrono::NaiveDateTime::parse_setting("not a date", &ctx()), None);
}

#[test]
fn test_enum_name_matching() {
    assert_eq!(Color::from_name("Red"), Some(Color::Red));
    assert_eq!(Color::from_name("green"), Some(Color::Green));
    assert_eq!(Color::from_name("  BLUE  "), Some(Color::Blue));
    assert_eq!(Color::from_name("bogus"), None);

    assert_eq!(Color::Green.name(), "Green");
    assert_eq!(Color::parse_setting("blue", &ctx()), Some(Color::Blue));
}

#[test]
fn test_unbox_quote_stripping() {
    assert_eq!(unbox("\"hello\"", false), "hello");
    assert_eq!(unbox("'hello'", false), "hello");
    assert_eq!(unbox("plain", false), "plain");

    // Mismatched or lone quotes are left alone
    assert_eq!(unbox("\"hello'", false), "\"hello'");
    assert_eq!(unbox("\"", false), "\"");
}

#[test]
fn test_unbox_escape_policy() {
    // Decoding on: standard escapes expand, unknown ones stay verbatim
    assert_eq!(unbox("\"a\\tb\\n\"", true), "a\tb\n");
    assert_eq!(unbox("\"a\\qb\"", true), "a\\qb");

    // Decoding off: escapes survive literally
    assert_eq!(unbox("\"a\\tb\"", false), "a\\tb");
}
