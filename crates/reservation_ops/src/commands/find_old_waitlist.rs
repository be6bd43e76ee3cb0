//! Find-old-waitlist command - reports waitlist entries older than 24 hours.

use airtable::AirtableClient;
use anyhow::Result;
use chrono::Utc;
use config::CONFIG;
use reservation_structs::{WaitlistEntry, WAITLIST_STALE_HOURS};

struct OldEntry {
    id: String,
    name: String,
    party_size: String,
    hours_ago: f64,
    status: String,
}

/// Runs the find-old-waitlist command.
///
/// Same shape as the service-record report, with the waitlist's 24-hour
/// staleness threshold and the `Added At` timestamp field.
///
/// # Errors
///
/// Returns an error if the Airtable request fails.
pub fn run() -> Result<()> {
    let client = AirtableClient::new()?;
    let list = client.list_records(&CONFIG.waitlist_table, None)?;
    let now = Utc::now();

    println!("Total waitlist entries: {}", list.records.len());

    let mut old_entries = Vec::new();

    for record in &list.records {
        let view = WaitlistEntry::new(record);

        match view.age(now) {
            Some(Ok(hours)) if hours > WAITLIST_STALE_HOURS => {
                old_entries.push(OldEntry {
                    id: view.id().to_string(),
                    name: view.customer_name().to_string(),
                    party_size: view
                        .party_size()
                        .map_or_else(|| "N/A".to_string(), |p| format!("{p}")),
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

    println!("Old entries (>{WAITLIST_STALE_HOURS}h): {}\n", old_entries.len());

    if old_entries.is_empty() {
        println!("No old waitlist entries found!");
        return Ok(());
    }

    println!("Old waitlist entries to delete:");
    for entry in &old_entries {
        println!("  - ID: {}", entry.id);
        println!("    Name: {}", entry.name);
        println!("    Party: {}", entry.party_size);
        println!("    Age: {:.1}h ago", entry.hours_ago);
        println!("    Status: {}", entry.status);
        println!();
    }

    let ids: Vec<&str> = old_entries.iter().map(|e| e.id.as_str()).collect();
    println!("\nJSON output:");
    println!("{}", serde_json::to_string_pretty(&ids)?);

    Ok(())
}
