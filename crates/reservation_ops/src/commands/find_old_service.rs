//! Find-old-service command - reports service records older than 12 hours.

use airtable::AirtableClient;
use anyhow::Result;
use chrono::Utc;
use config::CONFIG;
use reservation_structs::{ServiceRecord, SERVICE_STALE_HOURS};

struct OldRecord {
    id: String,
    name: String,
    hours_ago: f64,
    status: String,
}

/// Runs the find-old-service command.
///
/// Prints a human-readable report of stale records followed by a JSON
/// array of record ids for programmatic use.
///
/// # Errors
///
/// Returns an error if the Airtable request fails.
pub fn run() -> Result<()> {
    let client = AirtableClient::new()?;
    let list = client.list_records(&CONFIG.service_records_table, None)?;
    let now = Utc::now();

    println!("Total service records: {}", list.records.len());

    let mut old_records = Vec::new();

    for record in &list.records {
        let view = ServiceRecord::new(record);

        match view.age(now) {
            Some(Ok(hours)) if hours > SERVICE_STALE_HOURS => {
                old_records.push(OldRecord {
                    id: view.id().to_string(),
                    name: view.customer_name().to_string(),
                    hours_ago: hours,
                    status: view.status().to_string(),
                });
            }
            Some(Err(e)) => {
                eprintln!("Error parsing date for {}: {e}", view.customer_name());
            }
            _ => {}
        }
    }

    println!("Old records (>{SERVICE_STALE_HOURS}h): {}\n", old_records.len());

    if old_records.is_empty() {
        println!("No old service records found!");
        return Ok(());
    }

    println!("Old service records to delete:");
    for record in &old_records {
        println!("  - ID: {}", record.id);
        println!("    Name: {}", record.name);
        println!("    Age: {:.1}h ago", record.hours_ago);
        println!("    Status: {}", record.status);
        println!();
    }

    let ids: Vec<&str> = old_records.iter().map(|r| r.id.as_str()).collect();
    println!("\nJSON output:");
    println!("{}", serde_json::to_string_pretty(&ids)?);

    Ok(())
}
