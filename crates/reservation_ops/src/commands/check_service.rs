//! Check-service command - lists every service record with its age and
//! whether the cleanup rules would delete it.

use airtable::AirtableClient;
use anyhow::Result;
use chrono::Utc;
use config::CONFIG;
use reservation_structs::{deletion_reasons, ServiceRecord, SERVICE_STALE_HOURS};

/// Runs the check-service command.
///
/// # Errors
///
/// Returns an error if the Airtable request fails.
pub fn run() -> Result<()> {
    let client = AirtableClient::new()?;
    let list = client.list_records(&CONFIG.service_records_table, None)?;
    let now = Utc::now();

    println!("Total service records in Airtable: {}\n", list.records.len());

    if list.records.is_empty() {
        println!("No service records in Airtable!");
        return Ok(());
    }

    println!("All service records:");
    for record in &list.records {
        let view = ServiceRecord::new(record);

        println!("\n{}", "=".repeat(60));
        println!("Record ID: {}", view.id());
        println!("Service ID: {}", view.service_id());
        println!("Customer: {}", view.customer_name());
        println!("Status: {}", view.status());
        println!("Seated At: {}", view.seated_at().unwrap_or("N/A"));
        println!("Departed At: {}", view.departed_at());

        let age = match view.age(now) {
            Some(Ok(hours)) => {
                println!("Age: {:.1} hours ago", hours);
                Some(hours)
            }
            Some(Err(e)) => {
                eprintln!("Error parsing date for {}: {e}", view.customer_name());
                None
            }
            None => None,
        };

        let reasons = deletion_reasons(view.customer_name(), age, SERVICE_STALE_HOURS);
        if !reasons.is_empty() {
            println!("SHOULD BE DELETED: {}", reasons.join(", "));
        }
    }

    Ok(())
}
