//! Native restaurant training data: features logged per reservation.

use serde::Deserialize;

use crate::TrainingSample;

/// Number of features produced by the restaurant pipeline.
pub const RESTAURANT_FEATURE_COUNT: usize = 7;

/// Feature names, in vector order.
pub const RESTAURANT_FEATURE_NAMES: [&str; RESTAURANT_FEATURE_COUNT] = [
    "booking_lead_time_hours",
    "party_size",
    "is_repeat_customer",
    "customer_visit_count",
    "customer_no_show_rate",
    "days_since_last_visit",
    "has_special_requests",
];

/// Outcomes that count as completed reservations.
const COMPLETED_OUTCOMES: [&str; 3] = ["showed_up", "no_show", "cancelled"];

/// One row of `restaurant_training_data.csv`.
///
/// Every feature column is optional: the logger backfills columns over
/// time, and missing values are treated as zero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantRow {
    #[serde(default)]
    pub actual_outcome: String,
    #[serde(default)]
    pub special_requests: Option<String>,
    pub booking_lead_time_hours: Option<f64>,
    pub party_size: Option<f64>,
    pub is_repeat_customer: Option<f64>,
    pub customer_visit_count: Option<f64>,
    pub customer_no_show_rate: Option<f64>,
    pub days_since_last_visit: Option<f64>,
}

impl RestaurantRow {
    fn is_completed(&self) -> bool {
        COMPLETED_OUTCOMES.contains(&self.actual_outcome.as_str())
    }

    fn has_special_requests(&self) -> bool {
        self.special_requests
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }
}

/// Tally of completed reservation outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub showed_up: usize,
    pub no_show: usize,
    pub cancelled: usize,
}

impl OutcomeCounts {
    /// Total completed reservations.
    #[must_use]
    pub const fn completed(&self) -> usize {
        self.showed_up + self.no_show + self.cancelled
    }
}

/// Result of extracting the restaurant training set.
#[derive(Debug, Clone)]
pub struct RestaurantExtraction {
    /// One sample per completed reservation, in input order.
    pub samples: Vec<TrainingSample>,
    /// Outcome tally over the completed rows.
    pub counts: OutcomeCounts,
}

impl RestaurantExtraction {
    /// Fraction of completed reservations that did not show up
    /// (no-shows plus cancellations).
    #[must_use]
    pub fn no_show_rate(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let positives = self.samples.iter().filter(|s| s.label == 1).count();
        positives as f64 / self.samples.len() as f64
    }
}

/// Builds training samples from logged reservation rows.
///
/// Rows without a completed outcome are skipped. The label is 1 for any
/// outcome other than `showed_up` (cancellations count as no-shows for
/// risk purposes); missing feature values become 0.
#[must_use]
pub fn extract_restaurant_samples(rows: &[RestaurantRow]) -> RestaurantExtraction {
    let mut samples = Vec::new();
    let mut counts = OutcomeCounts::default();

    for row in rows {
        if !row.is_completed() {
            continue;
        }

        match row.actual_outcome.as_str() {
            "showed_up" => counts.showed_up += 1,
            "no_show" => counts.no_show += 1,
            _ => counts.cancelled += 1,
        }

        let features = [
            row.booking_lead_time_hours.unwrap_or(0.0),
            row.party_size.unwrap_or(0.0),
            row.is_repeat_customer.unwrap_or(0.0),
            row.customer_visit_count.unwrap_or(0.0),
            row.customer_no_show_rate.unwrap_or(0.0),
            row.days_since_last_visit.unwrap_or(0.0),
            f64::from(u8::from(row.has_special_requests())),
        ];

        samples.push(TrainingSample {
            features: features.iter().map(|&v| v as f32).collect(),
            label: u8::from(row.actual_outcome != "showed_up"),
        });
    }

    RestaurantExtraction { samples, counts }
}
