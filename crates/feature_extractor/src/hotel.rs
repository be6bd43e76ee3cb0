//! Hotel-booking dataset mapped onto the restaurant feature set.
//!
//! The hotel demand dataset has no restaurant semantics, so each of the 23
//! model features is a proxy derived from the closest hotel column (lead
//! time, repeated-guest flags, party composition, waiting-list days, ADR
//! spend). Engagement signals that do not exist in hotel data get fixed or
//! seeded defaults.

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::TrainingSample;

/// Number of features produced by the hotel pipeline.
pub const HOTEL_FEATURE_COUNT: usize = 23;

/// Feature names, in vector order.
pub const HOTEL_FEATURE_NAMES: [&str; HOTEL_FEATURE_COUNT] = [
    "booking_lead_time_hours",
    "hour_of_day",
    "day_of_week",
    "is_weekend",
    "is_prime_time",
    "month_of_year",
    "days_until_reservation",
    "is_repeat_customer",
    "customer_visit_count",
    "customer_no_show_rate",
    "customer_avg_party_size",
    "days_since_last_visit",
    "customer_lifetime_value",
    "party_size",
    "party_size_category",
    "is_large_party",
    "has_special_requests",
    "confirmation_sent",
    "confirmation_clicked",
    "hours_since_confirmation_sent",
    "historical_no_show_rate_for_day",
    "historical_no_show_rate_for_time",
    "occupancy_rate_for_slot",
];

/// Dinner-hour stand-in for hotel check-ins.
const DEFAULT_HOUR_OF_DAY: f64 = 19.0;

/// Prime-time no-show rate default (no per-hour data in the hotel set).
const DEFAULT_TIME_SLOT_RATE: f64 = 0.12;

/// Average occupancy default.
const DEFAULT_OCCUPANCY_RATE: f64 = 0.75;

/// One row of `hotel_bookings.csv`. Columns not used by the feature
/// mapping are ignored; numeric columns are optional because the public
/// dataset contains blanks (notably `children`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HotelBooking {
    pub is_canceled: Option<f64>,
    pub lead_time: Option<f64>,
    pub arrival_date_year: Option<i32>,
    pub arrival_date_month: Option<String>,
    pub arrival_date_day_of_month: Option<u32>,
    pub adults: Option<f64>,
    pub children: Option<f64>,
    pub babies: Option<f64>,
    pub is_repeated_guest: Option<f64>,
    pub previous_cancellations: Option<f64>,
    pub previous_bookings_not_canceled: Option<f64>,
    pub days_in_waiting_list: Option<f64>,
    pub adr: Option<f64>,
    pub stays_in_week_nights: Option<f64>,
    pub total_of_special_requests: Option<f64>,
}

impl HotelBooking {
    /// Arrival date assembled from the year / month-name / day columns.
    fn arrival_date(&self) -> Option<NaiveDate> {
        let year = self.arrival_date_year?;
        let month = month_from_name(self.arrival_date_month.as_deref()?)?;
        let day = self.arrival_date_day_of_month?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Day of week, Monday = 0 .. Sunday = 6.
    fn day_of_week(&self) -> Option<u32> {
        self.arrival_date()
            .map(|d| d.weekday().num_days_from_monday())
    }

    fn party_sum(&self) -> Option<f64> {
        Some(self.adults? + self.children? + self.babies?)
    }
}

fn month_from_name(name: &str) -> Option<u32> {
    let month = match name {
        "January" => 1,
        "February" => 2,
        "March" => 3,
        "April" => 4,
        "May" => 5,
        "June" => 6,
        "July" => 7,
        "August" => 8,
        "September" => 9,
        "October" => 10,
        "November" => 11,
        "December" => 12,
        _ => return None,
    };
    Some(month)
}

/// Per-weekday cancellation rate computed from the rows themselves.
fn day_cancel_rates(rows: &[HotelBooking]) -> [Option<f64>; 7] {
    let mut totals = [0u64; 7];
    let mut cancels = [0f64; 7];

    for row in rows {
        if let (Some(dow), Some(label)) = (row.day_of_week(), row.is_canceled) {
            totals[dow as usize] += 1;
            cancels[dow as usize] += label;
        }
    }

    let mut rates = [None; 7];
    for dow in 0..7 {
        if totals[dow] > 0 {
            rates[dow] = Some(cancels[dow] / totals[dow] as f64);
        }
    }
    rates
}

/// Derives the 23-feature training samples from hotel booking rows.
///
/// Rows missing any mandatory input (unparseable arrival date, blank
/// numeric column, no label) are dropped, mirroring the dataset cleaning of
/// the original pipeline. The `confirmation_clicked` proxy is drawn from a
/// seeded RNG (one draw per input row, dropped or not) so a fixed seed
/// reproduces the exact same matrix.
#[must_use]
pub fn extract_hotel_samples(rows: &[HotelBooking], seed: u64) -> Vec<TrainingSample> {
    let mut rng = StdRng::seed_from_u64(seed);
    let day_rates = day_cancel_rates(rows);

    let mut samples = Vec::with_capacity(rows.len());

    for row in rows {
        let clicked = f64::from(u8::from(rng.gen::<f64>() > 0.5));

        let Some(sample) = extract_row(row, clicked, &day_rates) else {
            continue;
        };
        samples.push(sample);
    }

    samples
}

fn extract_row(
    row: &HotelBooking,
    clicked: f64,
    day_rates: &[Option<f64>; 7],
) -> Option<TrainingSample> {
    let label = row.is_canceled?;
    let lead_time = row.lead_time?;
    let dow = row.day_of_week()?;
    let month = row.arrival_date()?.month();

    let prev_cancel = row.previous_cancellations?;
    let prev_kept = row.previous_bookings_not_canceled?;
    let no_show_rate = prev_cancel / (prev_cancel + prev_kept + 1.0);

    // Raw party sum feeds customer_avg_party_size unfilled; the party_size
    // feature falls back to 2 and never drops below 1.
    let avg_party = row.party_sum()?;
    let party_size = row.party_sum().unwrap_or(2.0).max(1.0);
    let party_category = if party_size <= 2.0 {
        0.0
    } else if party_size <= 4.0 {
        1.0
    } else {
        2.0
    };

    let lead_hours = lead_time * 24.0;
    let is_weekend = f64::from(u8::from(dow >= 4));

    let features = [
        lead_hours,
        DEFAULT_HOUR_OF_DAY,
        f64::from(dow),
        is_weekend,
        1.0, // is_prime_time
        f64::from(month),
        lead_time, // days_until_reservation
        row.is_repeated_guest?,
        prev_kept, // customer_visit_count
        no_show_rate,
        avg_party,
        row.days_in_waiting_list?, // days_since_last_visit proxy
        row.adr? * row.stays_in_week_nights?, // lifetime value proxy
        party_size,
        party_category,
        f64::from(u8::from(party_size >= 6.0)),
        f64::from(u8::from(row.total_of_special_requests? > 0.0)),
        1.0, // confirmation_sent
        clicked,
        lead_hours * 0.9,
        day_rates[dow as usize]?,
        DEFAULT_TIME_SLOT_RATE,
        DEFAULT_OCCUPANCY_RATE,
    ];

    Some(TrainingSample {
        features: features.iter().map(|&v| v as f32).collect(),
        label: u8::from(label > 0.5),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(month: &str, day: u32, canceled: f64) -> HotelBooking {
        HotelBooking {
            is_canceled: Some(canceled),
            lead_time: Some(10.0),
            arrival_date_year: Some(2017),
            arrival_date_month: Some(month.to_string()),
            arrival_date_day_of_month: Some(day),
            adults: Some(2.0),
            children: Some(1.0),
            babies: Some(0.0),
            is_repeated_guest: Some(0.0),
            previous_cancellations: Some(1.0),
            previous_bookings_not_canceled: Some(3.0),
            days_in_waiting_list: Some(0.0),
            adr: Some(100.0),
            stays_in_week_nights: Some(2.0),
            total_of_special_requests: Some(1.0),
        }
    }

    fn feature(sample: &TrainingSample, name: &str) -> f32 {
        let idx = HOTEL_FEATURE_NAMES
            .iter()
            .position(|&n| n == name)
            .expect("known feature");
        sample.features[idx]
    }

    #[test]
    fn test_feature_vector_length() {
        let rows = vec![booking("July", 3, 0.0)];
        let samples = extract_hotel_samples(&rows, 42);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].features.len(), HOTEL_FEATURE_COUNT);
    }

    #[test]
    fn test_day_of_week_and_weekend() {
        // 2017-07-03 was a Monday, 2017-07-07 a Friday
        let rows = vec![booking("July", 3, 0.0), booking("July", 7, 0.0)];
        let samples = extract_hotel_samples(&rows, 42);

        assert_eq!(feature(&samples[0], "day_of_week"), 0.0);
        assert_eq!(feature(&samples[0], "is_weekend"), 0.0);
        assert_eq!(feature(&samples[1], "day_of_week"), 4.0);
        assert_eq!(feature(&samples[1], "is_weekend"), 1.0);
        assert_eq!(feature(&samples[1], "month_of_year"), 7.0);
    }

    #[test]
    fn test_lead_time_conversions() {
        let rows = vec![booking("July", 3, 0.0)];
        let samples = extract_hotel_samples(&rows, 42);

        assert_eq!(feature(&samples[0], "booking_lead_time_hours"), 240.0);
        assert_eq!(feature(&samples[0], "days_until_reservation"), 10.0);
        assert!((feature(&samples[0], "hours_since_confirmation_sent") - 216.0).abs() < 1e-4);
    }

    #[test]
    fn test_no_show_rate_formula() {
        // 1 cancellation, 3 kept bookings: 1 / (1 + 3 + 1) = 0.2
        let rows = vec![booking("July", 3, 0.0)];
        let samples = extract_hotel_samples(&rows, 42);
        assert!((feature(&samples[0], "customer_no_show_rate") - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_party_size_features() {
        let mut small = booking("July", 3, 0.0);
        small.adults = Some(0.0);
        small.children = Some(0.0);
        small.babies = Some(0.0);

        let mut large = booking("July", 3, 0.0);
        large.adults = Some(5.0);
        large.children = Some(2.0);

        let samples = extract_hotel_samples(&vec![small, large], 42);

        // Empty party is clipped up to 1
        assert_eq!(feature(&samples[0], "party_size"), 1.0);
        assert_eq!(feature(&samples[0], "party_size_category"), 0.0);
        assert_eq!(feature(&samples[0], "is_large_party"), 0.0);

        assert_eq!(feature(&samples[1], "party_size"), 7.0);
        assert_eq!(feature(&samples[1], "party_size_category"), 2.0);
        assert_eq!(feature(&samples[1], "is_large_party"), 1.0);
    }

    #[test]
    fn test_rows_with_missing_inputs_are_dropped() {
        let mut bad_month = booking("Smarch", 3, 0.0);
        bad_month.arrival_date_month = Some("Smarch".to_string());

        let mut no_children = booking("July", 3, 0.0);
        no_children.children = None;

        let rows = vec![booking("July", 3, 0.0), bad_month, no_children];
        let samples = extract_hotel_samples(&rows, 42);
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn test_historical_day_rate_from_dataset() {
        // Two Mondays: one canceled, one kept -> Monday rate 0.5
        let rows = vec![booking("July", 3, 1.0), booking("July", 3, 0.0)];
        let samples = extract_hotel_samples(&rows, 42);
        for sample in &samples {
            assert!((feature(sample, "historical_no_show_rate_for_day") - 0.5).abs() < 1e-6);
        }
        assert_eq!(samples[0].label, 1);
        assert_eq!(samples[1].label, 0);
    }

    #[test]
    fn test_seeded_extraction_is_reproducible() {
        let rows: Vec<HotelBooking> = (1..=20).map(|d| booking("July", d, 0.0)).collect();

        let a = extract_hotel_samples(&rows, 42);
        let b = extract_hotel_samples(&rows, 42);

        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.features, y.features);
        }
    }
}
