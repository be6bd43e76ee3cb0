//! Response types for the Airtable REST API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response from GET /v0/{base}/{table}.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordList {
    /// Records in the table (or matching the filter formula)
    #[serde(default)]
    pub records: Vec<Record>,

    /// Pagination offset (present when more records are available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
}

/// A single Airtable record: an opaque id plus a field map.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Record {
    /// Record identifier (e.g. `recXXXXXXXXXXXXXX`)
    pub id: String,

    /// Field name to value map; empty fields are omitted by the API
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Returns a string field, or `None` when absent or not a string.
    #[must_use]
    pub fn string_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Returns a string field, substituting `"N/A"` when absent.
    ///
    /// Matches how the reports render missing fields.
    #[must_use]
    pub fn string_field_or_na(&self, name: &str) -> &str {
        self.string_field(name).unwrap_or("N/A")
    }

    /// Returns a numeric field as f64, or `None` when absent or not a number.
    #[must_use]
    pub fn number_field(&self, name: &str) -> Option<f64> {
        self.fields.get(name).and_then(Value::as_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_list_deserialization() {
        let json = r#"{
            "records": [
                {
                    "id": "recAbc123",
                    "fields": {
                        "Customer Name": "Jordan Smith",
                        "Party Size": 4,
                        "Status": "Active"
                    }
                },
                {
                    "id": "recDef456",
                    "fields": {}
                }
            ]
        }"#;

        let list: RecordList = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(list.records.len(), 2);
        assert_eq!(list.records[0].id, "recAbc123");
        assert_eq!(
            list.records[0].string_field("Customer Name"),
            Some("Jordan Smith")
        );
        assert!(list.records[1].fields.is_empty());
    }

    #[test]
    fn test_empty_response() {
        let list: RecordList = serde_json::from_str("{}").expect("should deserialize");
        assert!(list.records.is_empty());
        assert!(list.offset.is_none());
    }

    #[test]
    fn test_field_accessors() {
        let json = r#"{
            "id": "rec1",
            "fields": { "Customer Name": "Alex", "Party Size": 6 }
        }"#;
        let record: Record = serde_json::from_str(json).expect("should deserialize");

        assert_eq!(record.string_field("Customer Name"), Some("Alex"));
        assert_eq!(record.string_field("Status"), None);
        assert_eq!(record.string_field_or_na("Status"), "N/A");
        assert_eq!(record.number_field("Party Size"), Some(6.0));
        assert_eq!(record.number_field("Customer Name"), None);
    }
}
