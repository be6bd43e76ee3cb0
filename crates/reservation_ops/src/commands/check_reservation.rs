//! Check-reservation command - verifies a reservation and its ML fields.

use airtable::AirtableClient;
use anyhow::Result;
use config::CONFIG;
use reservation_structs::Reservation;
use tracing::info;

/// Baseline no-show risk (percent) observed in the hotel training data.
const BASE_RISK_PERCENT: f64 = 37.0;

/// Party sizes at or above this count carry extra risk.
const LARGE_PARTY_SIZE: f64 = 6.0;

/// Runs the check-reservation command.
///
/// Looks the reservation up by customer name, prints the stored fields and
/// the ML prediction columns, then prints the expected risk range from the
/// heuristic the dashboard uses.
///
/// # Errors
///
/// Returns an error if the Airtable request fails.
pub fn run(customer_name: &str) -> Result<()> {
    info!(customer_name, "Checking reservation");

    let client = AirtableClient::new()?;
    let formula = format!(
        "SEARCH('{}', {{Customer Name}})",
        customer_name.replace('\'', "\\'")
    );
    let list = client.list_records(&CONFIG.reservations_table, Some(&formula))?;

    let Some(record) = list.records.first() else {
        println!("ERROR: NO RESERVATION FOUND");
        println!(
            "Response: {}",
            serde_json::to_string_pretty(&list).unwrap_or_default()
        );
        return Ok(());
    };

    let reservation = Reservation::new(record);

    println!("{}", "=".repeat(60));
    println!("RESERVATION FOUND");
    println!("{}", "=".repeat(60));
    println!("Customer: {}", reservation.customer_name());
    println!(
        "Party Size: {}",
        reservation
            .party_size()
            .map_or_else(|| "N/A".to_string(), |p| format!("{p}"))
    );
    println!(
        "Date/Time: {} at {}",
        reservation.date(),
        reservation.time()
    );
    let special = reservation.special_requests().unwrap_or("N/A");
    println!(
        "Special Requests: {}...",
        special.chars().take(60).collect::<String>()
    );
    println!("Reservation ID: {}", reservation.reservation_id());
    println!("Status: {}", reservation.status());
    println!();

    println!("{}", "=".repeat(60));
    println!("ML PREDICTIONS");
    println!("{}", "=".repeat(60));
    println!(
        "ML Risk Score: {}%",
        format_number(reservation.ml_risk_score())
    );
    println!(
        "ML Risk Level: {}",
        reservation.ml_risk_level().unwrap_or("NOT SET")
    );
    println!(
        "ML Confidence: {}%",
        format_number(reservation.ml_confidence())
    );
    println!(
        "ML Model Version: {}",
        reservation.ml_model_version().unwrap_or("NOT SET")
    );
    println!();

    println!("{}", "=".repeat(60));
    println!("RISK ANALYSIS");
    println!("{}", "=".repeat(60));
    let party_size = reservation.party_size().unwrap_or(0.0);
    let has_special_requests = reservation.special_requests().is_some();

    println!("Party Size: {party_size} (Large parties = higher risk)");
    println!(
        "Has Special Requests: {} (Shows engagement = lower risk)",
        if has_special_requests { "Yes" } else { "No" }
    );
    println!("Is New Customer: Yes (First visit = higher risk)");

    let expected = expected_risk(party_size, has_special_requests);
    println!("\nExpected Risk Range: {:.1}% - {:.1}%", expected, expected * 1.2);

    Ok(())
}

fn format_number(value: Option<f64>) -> String {
    value.map_or_else(|| "NOT SET".to_string(), |v| format!("{v}"))
}

/// The dashboard's heuristic risk estimate, as a percentage.
fn expected_risk(party_size: f64, has_special_requests: bool) -> f64 {
    let mut risk = BASE_RISK_PERCENT;
    if has_special_requests {
        risk *= 0.7; // engagement discount
    }
    if party_size >= LARGE_PARTY_SIZE {
        risk *= 1.1; // large-party premium
    }
    risk
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_risk() {
        assert!((expected_risk(2.0, false) - 37.0).abs() < 1e-9);
    }

    #[test]
    fn test_special_requests_discount() {
        assert!((expected_risk(2.0, true) - 25.9).abs() < 1e-9);
    }

    #[test]
    fn test_large_party_premium() {
        assert!((expected_risk(6.0, false) - 40.7).abs() < 1e-9);
        // Boundary: a party of 5 is not large
        assert!((expected_risk(5.0, false) - 37.0).abs() < 1e-9);
    }

    #[test]
    fn test_combined_adjustments() {
        let expected = 37.0 * 0.7 * 1.1;
        assert!((expected_risk(8.0, true) - expected).abs() < 1e-9);
    }
}
