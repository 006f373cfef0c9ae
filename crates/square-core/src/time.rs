//! Timestamp helpers.
//!
//! Models keep timestamps as their wire strings so they are written back
//! byte-for-byte; these helpers give typed access on demand.

use chrono::{DateTime, Utc};

use crate::error::WireError;

/// Parse an RFC 3339 timestamp such as `2024-03-01T18:04:11.125Z`.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, WireError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| WireError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Parse an optional timestamp field; `None` stays `None`.
pub fn parse_optional_timestamp(value: Option<&str>) -> Result<Option<DateTime<Utc>>, WireError> {
    value.map(parse_timestamp).transpose()
}

/// Format a timestamp the way Square writes them (UTC, millisecond precision).
#[must_use]
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_utc() {
        let parsed = parse_timestamp("2024-03-01T18:04:11.125Z").unwrap();
        assert_eq!(parsed.timestamp_millis(), 1_709_316_251_125);
    }

    #[test]
    fn test_parse_offset_normalizes_to_utc() {
        let parsed = parse_timestamp("2024-03-01T10:04:11-08:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 1, 18, 4, 11).unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(matches!(err, WireError::InvalidTimestamp { ref value, .. } if value == "yesterday"));
    }

    #[test]
    fn test_optional() {
        assert_eq!(parse_optional_timestamp(None).unwrap(), None);
        assert!(parse_optional_timestamp(Some("2024-01-01T00:00:00Z")).unwrap().is_some());
    }

    #[test]
    fn test_format_millis() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 18, 4, 11).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-01T18:04:11.000Z");
    }
}
