//! CSV loading for the two training inputs.

use std::path::Path;

use anyhow::{Context, Result};

use crate::hotel::HotelBooking;
use crate::restaurant::RestaurantRow;

/// Loads `hotel_bookings.csv`.
///
/// # Errors
///
/// Returns an error if the file is missing or a row cannot be decoded.
pub fn load_hotel_csv(path: &Path) -> Result<Vec<HotelBooking>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: HotelBooking =
            result.with_context(|| format!("Bad row in {}", path.display()))?;
        rows.push(row);
    }

    Ok(rows)
}

/// Loads `restaurant_training_data.csv`.
///
/// # Errors
///
/// Returns an error if the file is missing or a row cannot be decoded.
pub fn load_restaurant_csv(path: &Path) -> Result<Vec<RestaurantRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: RestaurantRow =
            result.with_context(|| format!("Bad row in {}", path.display()))?;
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_restaurant_csv() {
        let dir = std::env::temp_dir();
        let path = dir.join("feature_extractor_test_restaurant.csv");
        let mut file = std::fs::File::create(&path).expect("create temp csv");
        writeln!(
            file,
            "actual_outcome,special_requests,booking_lead_time_hours,party_size,is_repeat_customer,customer_visit_count,customer_no_show_rate,days_since_last_visit"
        )
        .unwrap();
        writeln!(file, "showed_up,window seat,48,4,1,5,0.1,14").unwrap();
        writeln!(file, "no_show,,12,2,0,,,").unwrap();
        drop(file);

        let rows = load_restaurant_csv(&path).expect("should load");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].actual_outcome, "showed_up");
        assert_eq!(rows[1].customer_visit_count, None);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_restaurant_csv(Path::new("definitely_not_here.csv"));
        assert!(err.is_err());
    }
}
