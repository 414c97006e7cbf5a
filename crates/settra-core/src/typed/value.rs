use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;

use crate::context::ParseContext;

/// A value type that can be converted from a raw setting string.
///
/// Implementations must return `None` on any input they cannot represent;
/// error reporting (section/name/raw context) is handled by the caller.
pub trait SettingValue: Sized {
    /// Human-readable type tag used in error messages
    const TYPE_NAME: &'static str;

    /// Parse a raw (already unboxed) setting string under the given context
    fn parse_setting(raw: &str, ctx: &ParseContext) -> Option<Self>;
}

impl SettingValue for String {
    const TYPE_NAME: &'static str = "string";

    fn parse_setting(raw: &str, _ctx: &ParseContext) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl SettingValue for bool {
    const TYPE_NAME: &'static str = "bool";

    // Literal true/false only; numeric 0/1 is not a boolean here.
    fn parse_setting(raw: &str, _ctx: &ParseContext) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Some(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

// Numeric impls share the context normalization (trim, sign, grouping,
// decimal separator) and let the target type's parser enforce range,
// signedness, and shape. Integers reject fractional text because the
// normalized '.' never parses as part of an integer.
macro_rules! numeric_setting_value {
    ($($ty:ty => $tag:literal),+ $(,)?) => {
        $(impl SettingValue for $ty {
            const TYPE_NAME: &'static str = $tag;

            fn parse_setting(raw: &str, ctx: &ParseContext) -> Option<Self> {
                ctx.normalize_number(raw)?.parse().ok()
            }
        })+
    };
}

numeric_setting_value! {
    i32 => "int32",
    u32 => "uint32",
    i64 => "int64",
    u64 => "uint64",
    f32 => "float",
    f64 => "double",
    Decimal => "decimal",
}

impl SettingValue for TimeDelta {
    const TYPE_NAME: &'static str = "duration";

    fn parse_setting(raw: &str, _ctx: &ParseContext) -> Option<Self> {
        parse_duration(raw)
    }
}

impl SettingValue for NaiveDateTime {
    const TYPE_NAME: &'static str = "datetime";

    fn parse_setting(raw: &str, _ctx: &ParseContext) -> Option<Self> {
        parse_datetime(raw)
    }
}

/// Parse the duration grammar `[-][d.]hh:mm:ss[.fffffff]`.
///
/// Locale-independent: exactly three colon-separated components, an optional
/// whole-day prefix on the hours, and up to seven fractional-second digits.
fn parse_duration(raw: &str) -> Option<TimeDelta> {
    let trimmed = raw.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let parts: Vec<&str> = body.split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    let (days, hours) = match parts[0].split_once('.') {
        Some((d, h)) => (parse_component(d)?, parse_component(h)?),
        None => (0, parse_component(parts[0])?),
    };
    let minutes = parse_component(parts[1])?;
    let (seconds, nanos) = match parts[2].split_once('.') {
        Some((s, frac)) => (parse_component(s)?, parse_fraction(frac)?),
        None => (parse_component(parts[2])?, 0),
    };

    if hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }

    let total_seconds = days
        .checked_mul(86_400)?
        .checked_add(hours * 3_600 + minutes * 60 + seconds)?;
    let delta = TimeDelta::new(total_seconds, nanos)?;
    Some(if negative { -delta } else { delta })
}

/// Digits-only non-negative component of a duration
fn parse_component(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Fractional seconds, 1..=7 digits, scaled to nanoseconds
fn parse_fraction(frac: &str) -> Option<u32> {
    if frac.is_empty() || frac.len() > 7 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = frac.parse().ok()?;
    Some(value * 10u32.pow(9 - frac.len() as u32))
}

// Layouts tried in order by parse_datetime. RFC 3339 is tried first and is
// the only one that understands an offset; everything else is naive.
const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
];

const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%m/%d/%Y", "%d/%m/%Y"];

/// Flexible multi-layout date/time parse; date-only layouts yield midnight
fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    for layout in DATETIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Some(dt);
        }
    }
    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, layout) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Strip one matching pair of wrapping `"` or `'` quotes from a raw value.
///
/// With `decode_escapes` set, standard backslash escapes inside the quotes
/// are decoded; unknown escapes are kept verbatim. Record binding calls this
/// with `decode_escapes` off so embedded escapes survive literally.
pub fn unbox(raw: &str, decode_escapes: bool) -> Cow<'_, str> {
    let bytes = raw.as_bytes();
    let quoted = bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0];
    let inner = if quoted { &raw[1..raw.len() - 1] } else { raw };

    if !decode_escapes || !inner.contains('\\') {
        return Cow::Borrowed(inner);
    }

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}
