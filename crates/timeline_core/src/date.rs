use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_yaml::Value;

/// Datetime shapes a YAML timestamp may take; the time part is discarded.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Coerce a metadata value into a calendar date.
///
/// Strings are tried against `formats` first, then against full timestamps
/// (RFC 3339 or a naive `date time`), which are truncated to their date.
/// Everything else, including numbers and sequences, is "no date".
pub fn coerce_date(value: &Value, formats: &[String]) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date_str(s, formats),
        Value::Tagged(tagged) => coerce_date(&tagged.value, formats),
        _ => None,
    }
}

pub fn parse_date_str(input: &str, formats: &[String]) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
        .or_else(|| parse_datetime_str(input))
}

fn parse_datetime_str(input: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|dt| dt.date())
}

/// Signed whole days from `today` to `date`.
pub fn days_between(today: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DATE_FORMATS;

    fn formats() -> Vec<String> {
        DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_both_date_patterns() {
        assert_eq!(parse_date_str("2025-01-01", &formats()), Some(ymd(2025, 1, 1)));
        assert_eq!(parse_date_str("2025/03/07", &formats()), Some(ymd(2025, 3, 7)));
    }

    #[test]
    fn datetimes_are_truncated() {
        assert_eq!(
            parse_date_str("2025-01-01 10:30:00", &formats()),
            Some(ymd(2025, 1, 1))
        );
        assert_eq!(
            parse_date_str("2025-01-01T23:59:59Z", &formats()),
            Some(ymd(2025, 1, 1))
        );
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(parse_date_str("01/02/2025", &formats()), None);
        assert_eq!(parse_date_str("next week", &formats()), None);
        assert_eq!(parse_date_str("2025-02-30", &formats()), None);
        assert_eq!(parse_date_str("   ", &formats()), None);
        assert_eq!(coerce_date(&Value::from(20250101), &formats()), None);
        assert_eq!(coerce_date(&Value::Null, &formats()), None);
    }

    #[test]
    fn day_deltas_are_signed() {
        let today = ymd(2026, 1, 10);
        assert_eq!(days_between(today, ymd(2026, 1, 9)), -1);
        assert_eq!(days_between(today, ymd(2026, 1, 24)), 14);
    }
}
