//! Delete-old-active command - deletes active service records that are
//! stale or left behind by test runs.

use airtable::AirtableClient;
use anyhow::Result;
use chrono::Utc;
use config::CONFIG;
use reservation_structs::{deletion_reasons, ServiceRecord, SERVICE_STALE_HOURS};

struct Candidate {
    airtable_id: String,
    service_id: String,
    customer_name: String,
    reason: String,
}

/// Runs the delete-old-active command.
///
/// A failed deletion is reported with the response body and does not stop
/// the remaining deletions.
///
/// # Errors
///
/// Returns an error if the listing request fails.
pub fn run() -> Result<()> {
    let client = AirtableClient::new()?;

    println!("Step 1: Finding active service records...");
    let list = client.list_records(&CONFIG.service_records_table, Some("{Status} = 'Active'"))?;

    println!("Found {} active service records\n", list.records.len());

    let now = Utc::now();
    let mut candidates = Vec::new();

    for record in &list.records {
        let view = ServiceRecord::new(record);

        println!("\nRecord ID: {}", view.id());
        println!("Service ID: {}", view.service_id());
        println!("Customer: {}", view.customer_name());
        println!("Status: {}", view.status());
        println!("Seated At: {}", view.seated_at().unwrap_or(""));

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
        if reasons.is_empty() {
            println!("Keep this record");
        } else {
            let reason = reasons.join(", ");
            println!("SHOULD DELETE: {reason}");
            candidates.push(Candidate {
                airtable_id: view.id().to_string(),
                service_id: view.service_id().to_string(),
                customer_name: view.customer_name().to_string(),
                reason,
            });
        }
    }

    if candidates.is_empty() {
        println!("\nNo old/test records found to delete!");
        return Ok(());
    }

    println!("\n{}", "=".repeat(60));
    println!("Found {} record(s) to delete:", candidates.len());
    for candidate in &candidates {
        println!(
            "  - {} ({}): {}",
            candidate.service_id, candidate.customer_name, candidate.reason
        );
    }

    println!("\n{}", "=".repeat(60));
    println!("Proceeding with deletion...");

    for candidate in &candidates {
        match client.delete_record(&CONFIG.service_records_table, &candidate.airtable_id) {
            Ok(()) => {
                println!(
                    "Deleted: {} ({})",
                    candidate.service_id, candidate.customer_name
                );
            }
            Err(e) => {
                println!("Failed to delete {}: {e}", candidate.service_id);
            }
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("Cleanup complete!");

    Ok(())
}
