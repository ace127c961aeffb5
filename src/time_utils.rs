// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for the backend's local date/time formats.

use chrono::{NaiveDateTime, NaiveTime};

const DATETIME_SECS: &str = "%Y-%m-%dT%H:%M:%S";
const DATETIME_MINUTES: &str = "%Y-%m-%dT%H:%M";
const CLOCK: &str = "%H:%M";

/// Parse a local ISO-8601 datetime, with or without seconds.
///
/// The backend echoes `2025-12-24T18:00` when seconds are zero, so both
/// forms show up in listings.
pub fn parse_local_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, DATETIME_SECS)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, DATETIME_MINUTES))
        .ok()
}

/// Format a local datetime the way the backend query parameters expect.
pub fn format_local_datetime(date: NaiveDateTime) -> String {
    date.format(DATETIME_SECS).to_string()
}

/// Parse an `HH:MM` wall-clock time.
pub fn parse_clock(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, CLOCK)
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_with_and_without_seconds() {
        let expected = NaiveDate::from_ymd_opt(2025, 12, 24)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        assert_eq!(parse_local_datetime("2025-12-24T18:00:00"), Some(expected));
        assert_eq!(parse_local_datetime("2025-12-24T18:00"), Some(expected));
        assert_eq!(parse_local_datetime(""), None);
        assert_eq!(parse_local_datetime("tomorrow"), None);
    }

    #[test]
    fn formats_with_seconds() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 28)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(format_local_datetime(date), "2025-12-28T09:05:00");
    }

    #[test]
    fn parses_clock_times() {
        assert_eq!(parse_clock("23:59"), NaiveTime::from_hms_opt(23, 59, 0));
        assert_eq!(parse_clock("07:30:00"), NaiveTime::from_hms_opt(7, 30, 0));
        assert_eq!(parse_clock("25:00"), None);
    }
}
