use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiSnapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No snapshot found for {method} {url}")]
    SnapshotNotFound { method: String, url: String },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("Request to {url} timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl ApiSnapError {
    /// Short category name shown as the error headline.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::SnapshotNotFound { .. } => "NotFound",
            Self::InvalidUrl { .. } => "InvalidUrl",
            Self::Network { .. } | Self::Timeout { .. } => "Network",
            Self::FileAccess { .. } | Self::Io(_) => "IO",
            Self::Json(_) => "JSON",
        }
    }

    /// Primary message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::Io(e) => e.to_string(),
            Self::Json(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            _ => self.to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileAccess { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => e
                .span()
                .map(|span| format!("at bytes {}..{}", span.start, span.end)),
            _ => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::SnapshotNotFound { .. } => {
                Some("Run 'api-snap save <url>' first, or check --method and --dir")
            }
            Self::Timeout { .. } => Some("Increase the limit with --timeout <ms>"),
            Self::InvalidUrl { .. } => Some("Use an absolute URL such as https://example.com/api"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiSnapError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
