//! Date and timestamp parsing for store rows
//!
//! The record store writes dates as `YYYY-MM-DD` and timestamps in a few
//! shapes depending on the column type.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a timestamp string
///
/// Accepts RFC 3339 (normalized to UTC), naive `T`- or space-separated
/// date-times, and bare dates (midnight).
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let trimmed = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a calendar date, also accepting a full timestamp (date part kept)
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => parse_timestamp(trimmed).map(|dt| dt.date()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2026-11-17"), Some(ymd(2026, 11, 17)));
        assert_eq!(parse_date(" 2026-11-17 "), Some(ymd(2026, 11, 17)));
        assert_eq!(parse_date("2026-11-17T08:30:00Z"), Some(ymd(2026, 11, 17)));
        assert_eq!(parse_date("17/11/2026"), None);
        assert_eq!(parse_date("2026-02-30"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = ymd(2026, 10, 1).and_hms_opt(7, 15, 0).unwrap();
        assert_eq!(parse_timestamp("2026-10-01T07:15:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2026-10-01T09:15:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2026-10-01 07:15:00"), Some(expected));
        assert_eq!(parse_timestamp("2026-10-01T07:15:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2026-10-01"),
            Some(ymd(2026, 10, 1).and_hms_opt(0, 0, 0).unwrap())
        );
        assert_eq!(parse_timestamp("yesterday"), None);
    }
}
