//! Cleanup-table command - clears a stale service reference from a
//! restaurant table row.

use airtable::{AirtableClient, Record};
use anyhow::Result;
use config::CONFIG;
use serde_json::json;

/// Runs the cleanup-table command.
///
/// Idempotent: when the table row carries no `current_service_id` the
/// command reports it clean and issues no mutating call.
///
/// # Errors
///
/// Returns an error if the table row cannot be found or listed.
pub fn run(table_number: &str) -> Result<()> {
    let client = AirtableClient::new()?;

    println!("Step 1: Finding Table {table_number}...");
    let formula = format!("{{table_number}} = '{table_number}'");
    let list = client.list_records(&CONFIG.tables_table, Some(&formula))?;

    println!("Found {} record(s)\n", list.records.len());

    let Some(table_record) = list.records.first() else {
        anyhow::bail!("Table {table_number} not found!");
    };

    println!("Table {table_number} (Airtable ID: {})", table_record.id);
    println!("Current fields:");
    println!(
        "{}",
        serde_json::to_string_pretty(&table_record.fields).unwrap_or_default()
    );

    let current_service_id = table_record.string_field("current_service_id").unwrap_or("");
    let status = table_record.string_field("status").unwrap_or("Unknown");

    println!("\nCurrent service_id: {current_service_id}");
    println!("Current status: {status}");

    if !needs_cleanup(table_record) {
        println!("\nSUCCESS: Table {table_number} is already clean! No service_id set.");
        return Ok(());
    }

    println!("\nCleaning up Table {table_number}...");
    println!("   - Removing service_id: {current_service_id}");
    println!("   - Setting status to 'Available'");

    let fields = json!({
        "current_service_id": "",
        "status": "Available",
    });

    match client.update_record(&CONFIG.tables_table, &table_record.id, fields) {
        Ok(updated) => {
            println!("\nSUCCESS! Table {table_number} has been cleaned up.");
            println!("Updated fields:");
            println!(
                "{}",
                serde_json::to_string_pretty(&updated.fields).unwrap_or_default()
            );
        }
        Err(e) => {
            println!("\nFAILED to update Table {table_number}");
            println!("{e}");
        }
    }

    Ok(())
}

/// True when the table row still references a service record.
fn needs_cleanup(record: &Record) -> bool {
    record
        .string_field("current_service_id")
        .is_some_and(|id| !id.is_empty())
}
