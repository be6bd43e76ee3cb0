//! Common structs for reservation-system records shared across commands.
//!
//! These are read-only views over Airtable record field maps: a record
//! fetched from the store is the source of truth for that run.

mod age;
mod record_views;
mod staleness;

pub use age::{age_hours, parse_timestamp};
pub use record_views::{Reservation, ServiceRecord, WaitlistEntry};
pub use staleness::{
    deletion_reasons, is_test_customer, SERVICE_STALE_HOURS, TEST_MARKER, WAITLIST_STALE_HOURS,
};
