//! Staleness thresholds and test-record detection.

/// Service records older than this are stale.
pub const SERVICE_STALE_HOURS: f64 = 12.0;

/// Waitlist entries older than this are stale.
pub const WAITLIST_STALE_HOURS: f64 = 24.0;

/// Substring marking a record as created by a test run.
pub const TEST_MARKER: &str = "Test";

/// Returns true when the customer name carries the test marker.
#[must_use]
pub fn is_test_customer(customer_name: &str) -> bool {
    customer_name.contains(TEST_MARKER)
}

/// Reasons a record should be deleted, empty when it should be kept.
///
/// A record is deleted iff the customer name carries the test marker OR its
/// age strictly exceeds `stale_hours`. An unknown age (missing or
/// unparseable timestamp) never counts as stale.
#[must_use]
pub fn deletion_reasons(customer_name: &str, age: Option<f64>, stale_hours: f64) -> Vec<String> {
    let mut reasons = Vec::new();

    if is_test_customer(customer_name) {
        reasons.push("Test customer".to_string());
    }

    if let Some(hours) = age {
        if hours > stale_hours {
            reasons.push(format!("Old record ({:.1}h)", hours));
        }
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_marker_match() {
        assert!(is_test_customer("Test Family Chen"));
        assert!(is_test_customer("Chen Test"));
        assert!(!is_test_customer("Jordan Smith"));
        // Substring match is case sensitive, like the source data
        assert!(!is_test_customer("test family chen"));
    }

    #[test]
    fn test_service_boundary_is_strict() {
        assert!(deletion_reasons("Jordan", Some(11.99), SERVICE_STALE_HOURS).is_empty());
        assert!(deletion_reasons("Jordan", Some(12.0), SERVICE_STALE_HOURS).is_empty());
        assert_eq!(
            deletion_reasons("Jordan", Some(12.01), SERVICE_STALE_HOURS),
            vec!["Old record (12.0h)".to_string()]
        );
    }

    #[test]
    fn test_waitlist_boundary_is_strict() {
        assert!(deletion_reasons("Jordan", Some(23.99), WAITLIST_STALE_HOURS).is_empty());
        assert!(!deletion_reasons("Jordan", Some(24.01), WAITLIST_STALE_HOURS).is_empty());
    }

    #[test]
    fn test_both_reasons_reported() {
        let reasons = deletion_reasons("Test Family Chen", Some(30.0), SERVICE_STALE_HOURS);
        assert_eq!(reasons.len(), 2);
        assert_eq!(reasons[0], "Test customer");
        assert!(reasons[1].starts_with("Old record"));
    }

    #[test]
    fn test_unknown_age_is_not_stale() {
        assert!(deletion_reasons("Jordan", None, SERVICE_STALE_HOURS).is_empty());
        assert_eq!(
            deletion_reasons("Test Jordan", None, SERVICE_STALE_HOURS),
            vec!["Test customer".to_string()]
        );
    }
}
