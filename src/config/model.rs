use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::diff::IgnoredFields;
use crate::http::DEFAULT_TIMEOUT_MS;
use crate::snapshot::DEFAULT_STORAGE_DIR;

/// Settings read from `.api-snap.toml`.
///
/// Every field is optional in the file; missing fields take the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding snapshot files.
    pub storage_dir: PathBuf,

    /// Request timeout in milliseconds.
    pub timeout_ms: u64,

    /// Object keys skipped when diffing (headers and body).
    pub ignore_fields: Vec<String>,

    /// Skip header comparison entirely.
    pub ignore_headers: bool,

    /// Headers sent with every request, before any `--header` arguments.
    pub headers: IndexMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            ignore_fields: Vec::new(),
            ignore_headers: false,
            headers: IndexMap::new(),
        }
    }
}

impl Config {
    /// Configured ignore list merged with extra names, deduplicated.
    #[must_use]
    pub fn ignored_fields_with(&self, extra: &[String]) -> IgnoredFields {
        self.ignore_fields
            .iter()
            .chain(extra)
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
