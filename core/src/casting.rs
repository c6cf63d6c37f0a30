//! Value coercions shared by the default operation handler and the default
//! type converter.
//!
//! - `to_number`: numbers pass through, text is parsed, booleans are 1/0,
//!   null is 0.
//! - `to_boolean`: booleans pass through, numbers are `!= 0`, text must be
//!   `true`/`false` (any case), null is false.
//! - `to_datetime`: text is parsed against a fixed list of layouts.
//!
//! Host objects never coerce to a number or a boolean.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::api::Error;
use crate::values::Value;
use crate::{String, ToString};

/// Layouts accepted for date-times, tried in order after RFC 3339.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Layouts accepted for dates; the time is midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

pub fn to_number(value: &Value) -> Result<f64, Error> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Text(s) => parse_number(s).ok_or_else(|| Error::format(s.as_str(), "number")),
        Value::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Null => Ok(0.0),
        Value::Object(obj) => Err(Error::invalid_cast((**obj).type_name(), "number")),
    }
}

pub fn to_boolean(value: &Value) -> Result<bool, Error> {
    match value {
        Value::Boolean(b) => Ok(*b),
        Value::Number(n) => Ok(*n != 0.0),
        Value::Text(s) => parse_boolean(s).ok_or_else(|| Error::format(s.as_str(), "boolean")),
        Value::Null => Ok(false),
        Value::Object(obj) => Err(Error::invalid_cast((**obj).type_name(), "boolean")),
    }
}

pub fn to_text(value: &Value) -> String {
    value.to_string()
}

pub fn to_datetime(value: &Value) -> Result<NaiveDateTime, Error> {
    match value {
        Value::Object(_) => value
            .downcast_ref::<NaiveDateTime>()
            .copied()
            .ok_or_else(|| Error::invalid_cast(value.kind(), "datetime")),
        Value::Text(s) => parse_datetime(s).ok_or_else(|| Error::format(s.as_str(), "datetime")),
        other => Err(Error::invalid_cast(other.kind(), "datetime")),
    }
}

/// Parse text as a number, tolerating surrounding whitespace.
///
/// Only text starting with a digit, a dot or a sign is considered, so words
/// like `inf` or `nan` are not numbers.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    if !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    text.parse::<f64>().ok()
}

pub fn parse_boolean(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FormatError;

    #[test]
    fn test_to_number() {
        assert_eq!(to_number(&Value::number(2.5)).unwrap(), 2.5);
        assert_eq!(to_number(&Value::text(" 8 ")).unwrap(), 8.0);
        assert_eq!(to_number(&Value::boolean(true)).unwrap(), 1.0);
        assert_eq!(to_number(&Value::Null).unwrap(), 0.0);
        assert_eq!(
            to_number(&Value::text("15.0004230fd")).unwrap_err(),
            Error::Format(FormatError {
                value: "15.0004230fd".into(),
                target: "number",
            })
        );
    }

    #[test]
    fn test_parse_number_rejects_words() {
        assert_eq!(parse_number("-1.5"), Some(-1.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_to_boolean() {
        assert!(!to_boolean(&Value::number(0.0)).unwrap());
        assert!(to_boolean(&Value::number(-10.0)).unwrap());
        assert!(to_boolean(&Value::text("True")).unwrap());
        assert!(!to_boolean(&Value::text("false")).unwrap());
        assert!(matches!(
            to_boolean(&Value::text("troo")),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn test_to_datetime() {
        let expected = NaiveDate::from_ymd_opt(2015, 5, 5)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(
            to_datetime(&Value::text("2015-05-05 12:30:00")).unwrap(),
            expected
        );
        assert_eq!(
            to_datetime(&Value::text("2015-05-05T12:30:00Z")).unwrap(),
            expected
        );
        assert_eq!(
            to_datetime(&Value::text("2015/05/05")).unwrap(),
            expected.date().and_hms_opt(0, 0, 0).unwrap()
        );
        assert!(matches!(
            to_datetime(&Value::text("2015/05/05/12")),
            Err(Error::Format(_))
        ));
        assert!(matches!(
            to_datetime(&Value::number(1.0)),
            Err(Error::Runtime(_))
        ));
    }
}
