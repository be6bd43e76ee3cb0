//! HTTP client for the Airtable REST API.

use core::time::Duration;

use anyhow::{Context, Result};
use config::CONFIG;
use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::models::{Record, RecordList};

/// Base URL for the Airtable API
const API_BASE_URL: &str = "https://api.airtable.com/v0";

/// Blocking client for the Airtable REST API.
///
/// One instance per command invocation; every request carries the bearer
/// token from the environment configuration.
pub struct AirtableClient {
    client: Client,
    base_id: String,
}

impl AirtableClient {
    /// Creates a new client for the configured base.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_id: CONFIG.base_id.clone(),
        })
    }

    fn record_url(&self, table_id: &str, record_id: &str) -> String {
        format!("{API_BASE_URL}/{}/{table_id}/{record_id}", self.base_id)
    }

    fn table_url(&self, table_id: &str) -> String {
        format!("{API_BASE_URL}/{}/{table_id}", self.base_id)
    }

    /// Lists records in a table, optionally filtered server-side.
    ///
    /// # Arguments
    ///
    /// * `table_id` - Airtable table identifier (e.g. `tblEEHaoicXQA7NcL`)
    /// * `filter_formula` - Optional `filterByFormula` expression
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a
    /// record list.
    pub fn list_records(
        &self,
        table_id: &str,
        filter_formula: Option<&str>,
    ) -> Result<RecordList> {
        let url = self.table_url(table_id);

        debug!(table_id, filter = filter_formula, "Listing records");

        let mut request = self.client.get(&url).bearer_auth(&CONFIG.api_key);

        if let Some(formula) = filter_formula {
            request = request.query(&[("filterByFormula", formula)]);
        }

        let response = request
            .send()
            .context("Failed to send request to Airtable API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            anyhow::bail!("Airtable list request failed with status {status}: {body}");
        }

        let data: RecordList = response
            .json()
            .context("Failed to parse record list response")?;

        info!(table_id, count = data.records.len(), "Received records");

        Ok(data)
    }

    /// Updates the given fields on a single record via PATCH.
    ///
    /// # Errors
    ///
    /// Returns an error carrying the HTTP status and response body if the
    /// update is rejected.
    pub fn update_record(
        &self,
        table_id: &str,
        record_id: &str,
        fields: serde_json::Value,
    ) -> Result<Record> {
        let url = self.record_url(table_id, record_id);

        debug!(table_id, record_id, "Updating record");

        let response = self
            .client
            .patch(&url)
            .bearer_auth(&CONFIG.api_key)
            .json(&serde_json::json!({ "fields": fields }))
            .send()
            .context("Failed to send update request to Airtable API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            anyhow::bail!("Airtable update failed with status {status}: {body}");
        }

        let record: Record = response
            .json()
            .context("Failed to parse updated record response")?;

        Ok(record)
    }

    /// Deletes a single record.
    ///
    /// # Errors
    ///
    /// Returns an error carrying the HTTP status and response body if the
    /// deletion is rejected.
    pub fn delete_record(&self, table_id: &str, record_id: &str) -> Result<()> {
        let url = self.record_url(table_id, record_id);

        debug!(table_id, record_id, "Deleting record");

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&CONFIG.api_key)
            .send()
            .context("Failed to send delete request to Airtable API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            anyhow::bail!("Airtable delete failed with status {status}: {body}");
        }

        Ok(())
    }
}
