//! Timestamp parsing and record age calculation.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Parses an ISO-8601 timestamp as stored by Airtable.
///
/// Airtable renders UTC instants with a trailing `Z`
/// (e.g. `2025-10-25T18:30:00.000Z`); offsets are accepted too.
///
/// # Errors
///
/// Returns an error if the string is not a valid ISO-8601 datetime.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("Unparseable timestamp: {raw}"))
}

/// Returns the age of `then` relative to `now`, in fractional hours.
///
/// Negative when `then` is in the future.
#[must_use]
pub fn age_hours(now: DateTime<Utc>, then: DateTime<Utc>) -> f64 {
    (now - then).num_milliseconds() as f64 / 3_600_000.0
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_parse_timestamp_with_z_suffix() {
        let dt = parse_timestamp("2025-10-25T18:30:00.000Z").expect("should parse");
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 10, 25, 18, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_with_offset() {
        let dt = parse_timestamp("2025-10-25T20:30:00+02:00").expect("should parse");
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 10, 25, 18, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_age_in_hours() {
        let then = Utc.with_ymd_and_hms(2025, 10, 25, 6, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 10, 25, 18, 30, 0).unwrap();
        assert!((age_hours(now, then) - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_age_monotone_as_now_advances() {
        let then = Utc.with_ymd_and_hms(2025, 10, 25, 6, 0, 0).unwrap();
        let now1 = Utc.with_ymd_and_hms(2025, 10, 25, 12, 0, 0).unwrap();
        let now2 = now1 + chrono::Duration::seconds(1);
        assert!(age_hours(now2, then) > age_hours(now1, then));
    }
}
