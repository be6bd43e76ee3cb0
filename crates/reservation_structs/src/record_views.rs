//! Typed views over Airtable record field maps.

use airtable::Record;
use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::age::{age_hours, parse_timestamp};

/// A row from the service records table.
#[derive(Debug, Clone, Copy)]
pub struct ServiceRecord<'a> {
    record: &'a Record,
}

impl<'a> ServiceRecord<'a> {
    #[must_use]
    pub const fn new(record: &'a Record) -> Self {
        Self { record }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.record.id
    }

    #[must_use]
    pub fn service_id(&self) -> &str {
        self.record.string_field_or_na("Service ID")
    }

    #[must_use]
    pub fn customer_name(&self) -> &str {
        self.record.string_field_or_na("Customer Name")
    }

    #[must_use]
    pub fn status(&self) -> &str {
        self.record.string_field_or_na("Status")
    }

    #[must_use]
    pub fn seated_at(&self) -> Option<&str> {
        self.record.string_field("Seated At").filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn departed_at(&self) -> &str {
        self.record.string_field_or_na("Departed At")
    }

    /// Age in hours since the party was seated.
    ///
    /// `None` when the record has no `Seated At` value; `Some(Err(..))` when
    /// the value does not parse (the caller logs and moves on).
    pub fn age(&self, now: DateTime<Utc>) -> Option<Result<f64>> {
        self.seated_at()
            .map(|raw| parse_timestamp(raw).map(|then| age_hours(now, then)))
    }
}

/// A row from the waitlist table.
#[derive(Debug, Clone, Copy)]
pub struct WaitlistEntry<'a> {
    record: &'a Record,
}

impl<'a> WaitlistEntry<'a> {
    #[must_use]
    pub const fn new(record: &'a Record) -> Self {
        Self { record }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.record.id
    }

    #[must_use]
    pub fn customer_name(&self) -> &str {
        self.record.string_field_or_na("Customer Name")
    }

    #[must_use]
    pub fn status(&self) -> &str {
        self.record.string_field_or_na("Status")
    }

    #[must_use]
    pub fn party_size(&self) -> Option<f64> {
        self.record.number_field("Party Size")
    }

    #[must_use]
    pub fn added_at(&self) -> Option<&str> {
        self.record.string_field("Added At").filter(|s| !s.is_empty())
    }

    /// Age in hours since the entry was added; see [`ServiceRecord::age`].
    pub fn age(&self, now: DateTime<Utc>) -> Option<Result<f64>> {
        self.added_at()
            .map(|raw| parse_timestamp(raw).map(|then| age_hours(now, then)))
    }
}

/// A row from the reservations table, including the ML prediction fields
/// written back by the scoring server.
#[derive(Debug, Clone, Copy)]
pub struct Reservation<'a> {
    record: &'a Record,
}

impl<'a> Reservation<'a> {
    #[must_use]
    pub const fn new(record: &'a Record) -> Self {
        Self { record }
    }

    #[must_use]
    pub fn customer_name(&self) -> &str {
        self.record.string_field_or_na("Customer Name")
    }

    #[must_use]
    pub fn reservation_id(&self) -> &str {
        self.record.string_field_or_na("Reservation ID")
    }

    #[must_use]
    pub fn status(&self) -> &str {
        self.record.string_field_or_na("Status")
    }

    #[must_use]
    pub fn party_size(&self) -> Option<f64> {
        self.record.number_field("Party Size")
    }

    #[must_use]
    pub fn date(&self) -> &str {
        self.record.string_field_or_na("Date")
    }

    #[must_use]
    pub fn time(&self) -> &str {
        self.record.string_field_or_na("Time")
    }

    #[must_use]
    pub fn special_requests(&self) -> Option<&str> {
        self.record
            .string_field("Special Requests")
            .filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn ml_risk_score(&self) -> Option<f64> {
        self.record.number_field("ML Risk Score")
    }

    #[must_use]
    pub fn ml_risk_level(&self) -> Option<&str> {
        self.record.string_field("ML Risk Level")
    }

    #[must_use]
    pub fn ml_confidence(&self) -> Option<f64> {
        self.record.number_field("ML Confidence")
    }

    #[must_use]
    pub fn ml_model_version(&self) -> Option<&str> {
        self.record.string_field("ML Model Version")
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn record(json: &str) -> Record {
        serde_json::from_str(json).expect("record json")
    }

    #[test]
    fn test_service_record_age() {
        let rec = record(
            r#"{"id": "rec1", "fields": {
                "Customer Name": "Jordan Smith",
                "Status": "Active",
                "Seated At": "2025-10-25T06:00:00.000Z"
            }}"#,
        );
        let view = ServiceRecord::new(&rec);
        let now = Utc.with_ymd_and_hms(2025, 10, 25, 19, 0, 0).unwrap();

        let age = view.age(now).expect("has timestamp").expect("parses");
        assert!((age - 13.0).abs() < 1e-9);
        assert_eq!(view.customer_name(), "Jordan Smith");
        assert_eq!(view.departed_at(), "N/A");
    }

    #[test]
    fn test_service_record_without_timestamp() {
        let rec = record(r#"{"id": "rec1", "fields": {"Seated At": ""}}"#);
        let view = ServiceRecord::new(&rec);
        assert!(view.age(Utc::now()).is_none());
    }

    #[test]
    fn test_service_record_bad_timestamp() {
        let rec = record(r#"{"id": "rec1", "fields": {"Seated At": "not-a-date"}}"#);
        let view = ServiceRecord::new(&rec);
        assert!(view.age(Utc::now()).expect("has timestamp").is_err());
    }

    #[test]
    fn test_waitlist_entry_fields() {
        let rec = record(
            r#"{"id": "rec2", "fields": {
                "Customer Name": "Alex Kim",
                "Party Size": 3,
                "Added At": "2025-10-24T12:00:00.000Z",
                "Status": "Waiting"
            }}"#,
        );
        let view = WaitlistEntry::new(&rec);
        assert_eq!(view.party_size(), Some(3.0));
        assert_eq!(view.status(), "Waiting");
        assert!(view.added_at().is_some());
    }

    #[test]
    fn test_reservation_ml_fields() {
        let rec = record(
            r#"{"id": "rec3", "fields": {
                "Customer Name": "Test Family Chen",
                "Party Size": 6,
                "ML Risk Score": 42.5,
                "ML Risk Level": "Medium",
                "ML Confidence": 88,
                "ML Model Version": "2.0.0",
                "Special Requests": "Window seat please"
            }}"#,
        );
        let view = Reservation::new(&rec);
        assert_eq!(view.ml_risk_score(), Some(42.5));
        assert_eq!(view.ml_risk_level(), Some("Medium"));
        assert_eq!(view.ml_model_version(), Some("2.0.0"));
        assert_eq!(view.special_requests(), Some("Window seat please"));
    }
}
