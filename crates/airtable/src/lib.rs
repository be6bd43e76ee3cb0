//! Blocking REST client for the Airtable API.
//!
//! All maintenance commands talk to the same hosted base: list records
//! (optionally filtered server-side by a formula), patch a single record,
//! or delete a single record.

mod client;
mod models;

pub use client::AirtableClient;
pub use models::{Record, RecordList};
