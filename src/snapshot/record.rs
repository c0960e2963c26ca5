use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response headers keyed by lower-cased name.
pub type Headers = BTreeMap<String, String>;

/// One persisted HTTP response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotRecord {
    pub url: String,
    pub method: String,
    pub status: u16,
    pub headers: Headers,
    /// Parsed JSON body, or the raw payload as a string when it is not JSON.
    pub body: Value,
    /// ISO-8601 capture time.
    pub timestamp: String,
}

impl SnapshotRecord {
    /// Headers as a JSON object, for structural comparison.
    #[must_use]
    pub fn headers_value(&self) -> Value {
        Value::Object(
            self.headers
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        )
    }
}

/// Parse a raw payload as JSON, falling back to the raw text.
#[must_use]
pub fn parse_body(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Lightweight view of a stored snapshot used by `list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub url: String,
    pub method: String,
    pub status: u16,
    pub timestamp: String,
    #[serde(skip_deserializing)]
    pub file: PathBuf,
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
