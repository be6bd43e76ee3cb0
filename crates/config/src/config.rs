use std::sync::LazyLock;

use anyhow::Context;

/// Default Airtable base for the restaurant workspace.
const DEFAULT_BASE_ID: &str = "appm7zo5vOf3c3rqm";

/// Default table identifiers within the base.
const DEFAULT_RESERVATIONS_TABLE: &str = "tbloL2huXFYQluomn";
const DEFAULT_SERVICE_RECORDS_TABLE: &str = "tblEEHaoicXQA7NcL";
const DEFAULT_WAITLIST_TABLE: &str = "tblkpCGy1z2YbJbOa";
const DEFAULT_TABLES_TABLE: &str = "tbl0r7fkhuoasis56";

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::from_env().expect("Failed to create config"));

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Airtable API key (bearer token)
    pub api_key: String,

    /// Airtable base identifier
    pub base_id: String,

    /// Reservations table identifier
    pub reservations_table: String,

    /// Service records table identifier
    pub service_records_table: String,

    /// Waitlist table identifier
    pub waitlist_table: String,

    /// Restaurant tables table identifier
    pub tables_table: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `AIRTABLE_API_KEY`: bearer token for the Airtable REST API
    ///
    /// Optional environment variables (production identifiers by default):
    /// - `AIRTABLE_BASE_ID`
    /// - `AIRTABLE_RESERVATIONS_TABLE`
    /// - `AIRTABLE_SERVICE_RECORDS_TABLE`
    /// - `AIRTABLE_WAITLIST_TABLE`
    /// - `AIRTABLE_TABLES_TABLE`
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing.
    fn from_env() -> anyhow::Result<Self> {
        // Load .env file
        dotenvy::dotenv().ok();

        let api_key = std::env::var("AIRTABLE_API_KEY")
            .context("AIRTABLE_API_KEY environment variable not set")?;

        Ok(Self {
            api_key,
            base_id: env_or("AIRTABLE_BASE_ID", DEFAULT_BASE_ID),
            reservations_table: env_or("AIRTABLE_RESERVATIONS_TABLE", DEFAULT_RESERVATIONS_TABLE),
            service_records_table: env_or(
                "AIRTABLE_SERVICE_RECORDS_TABLE",
                DEFAULT_SERVICE_RECORDS_TABLE,
            ),
            waitlist_table: env_or("AIRTABLE_WAITLIST_TABLE", DEFAULT_WAITLIST_TABLE),
            tables_table: env_or("AIRTABLE_TABLES_TABLE", DEFAULT_TABLES_TABLE),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).map_or_else(|_| default.to_string(), |v| v)
}
