//! Date-time text formats used by OCHP
//!
//! `DateTime` values are UTC instants (`2015-06-29T22:39:09Z`), `LocalDateTime`
//! values keep the offset of the charge point (`2015-06-29T22:39:09+02:00`).
//! Sub-second digits are written only when present so that formatting and
//! parsing round-trip exactly.

use crate::error::{OchpError, OchpResult};
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

pub fn format_date_time(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn format_local_date_time(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

pub fn parse_date_time(text: &str) -> OchpResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text.trim())
        .map(|value| value.with_timezone(&Utc))
        .map_err(|e| OchpError::invalid_value("DateTime", format!("'{}': {}", text, e)))
}

pub fn parse_local_date_time(text: &str) -> OchpResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text.trim())
        .map_err(|e| OchpError::invalid_value("LocalDateTime", format!("'{}': {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_utc_round_trip() {
        let value = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let text = format_date_time(&value);
        assert_eq!(text, "2024-01-01T00:00:00Z");
        assert_eq!(parse_date_time(&text).unwrap(), value);
    }

    #[test]
    fn test_offset_is_normalized_to_utc() {
        let value = parse_date_time("2015-06-29T22:39:09+02:00").unwrap();
        assert_eq!(format_date_time(&value), "2015-06-29T20:39:09Z");
    }

    #[test]
    fn test_local_keeps_offset() {
        let value = parse_local_date_time("2015-06-29T22:39:09+02:00").unwrap();
        assert_eq!(format_local_date_time(&value), "2015-06-29T22:39:09+02:00");
    }

    #[test]
    fn test_sub_seconds_survive() {
        let value = parse_date_time("2024-03-05T10:11:12.250Z").unwrap();
        assert_eq!(parse_date_time(&format_date_time(&value)).unwrap(), value);
    }

    #[test]
    fn test_invalid() {
        assert!(parse_date_time("yesterday").is_err());
        assert!(parse_local_date_time("").is_err());
    }
}
