//! HTTP fetch collaborator.
//!
//! Requests are blocking and bounded by a per-request timeout. Responses are
//! normalized into the snapshot shape: lower-cased header names, repeated
//! headers joined with `", "`, and a best-effort JSON body.

mod client;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::warn;

use crate::Result;
use crate::snapshot::{Headers, SnapshotRecord, parse_body};

pub use client::ReqwestClient;

/// Timeout used when none is configured or the given value is unusable.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// Perform the request and return the normalized response.
    ///
    /// Non-2xx statuses are returned, not treated as errors.
    ///
    /// # Errors
    /// Returns `Network` or `Timeout` when no response could be obtained.
    fn fetch(&self, request: &RequestSpec) -> Result<FetchedResponse>;
}

/// Everything needed to issue one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub url: String,
    pub method: String,
    pub headers: IndexMap<String, String>,
    pub body: Option<String>,
    pub timeout_ms: u64,
}

impl RequestSpec {
    #[must_use]
    pub fn new(url: impl Into<String>, method: &str) -> Self {
        Self {
            url: url.into(),
            method: method.to_ascii_uppercase(),
            headers: IndexMap::new(),
            body: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// A normalized response.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: Value,
    pub timestamp: String,
}

impl FetchedResponse {
    /// Build a response from raw parts, parsing the body and stamping the time.
    #[must_use]
    pub fn from_parts(status: u16, headers: Headers, raw_body: &str) -> Self {
        Self {
            status,
            headers,
            body: parse_body(raw_body),
            timestamp: now_iso8601(),
        }
    }

    #[must_use]
    pub fn into_record(self, request: &RequestSpec) -> SnapshotRecord {
        SnapshotRecord {
            url: request.url.clone(),
            method: request.method.clone(),
            status: self.status,
            headers: self.headers,
            body: self.body,
            timestamp: self.timestamp,
        }
    }
}

/// Current UTC time as ISO-8601 with millisecond precision.
#[must_use]
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Collect `(name, value)` pairs into normalized headers.
///
/// Names are lower-cased; repeated names are joined with `", "` in arrival order.
pub fn normalize_headers<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Headers {
    let mut headers = Headers::new();
    for (name, value) in pairs {
        headers
            .entry(name.to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    headers
}

/// Parse a `Name: value` header argument.
#[must_use]
pub fn parse_header_arg(arg: &str) -> Option<(String, String)> {
    let (name, value) = arg.split_once(':')?;
    let name = name.trim();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}

/// Parse header arguments, skipping malformed entries with a warning.
///
/// Later entries replace earlier ones with the same (case-insensitive) name.
#[must_use]
pub fn parse_header_args(args: &[String]) -> IndexMap<String, String> {
    let mut headers: IndexMap<String, String> = IndexMap::new();
    for arg in args {
        let Some((name, value)) = parse_header_arg(arg) else {
            warn!(header = %arg, "ignoring malformed header, expected 'Name: value'");
            continue;
        };
        headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        headers.insert(name, value);
    }
    headers
}

/// Parse a timeout in milliseconds, falling back to [`DEFAULT_TIMEOUT_MS`].
#[must_use]
pub fn parse_timeout(text: &str) -> u64 {
    match text.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => ms,
        _ => {
            warn!(value = %text, default_ms = DEFAULT_TIMEOUT_MS, "invalid timeout, using default");
            DEFAULT_TIMEOUT_MS
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
