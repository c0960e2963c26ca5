use std::fmt;

use reqwest::Url;
use sha2::{Digest, Sha256};

use crate::{ApiSnapError, Result};

/// Number of hex characters kept from the digest.
pub const DIGEST_PREFIX_LEN: usize = 12;

/// Storage identifier for one (method, URL) pair.
///
/// Format: `{sanitized_host}_{12 hex chars}`. The digest covers
/// `"{METHOD}:{url}"`, so the key never contains path separators and is
/// stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotKey(String);

impl SnapshotKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name used by the store (`{key}.json`).
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the storage key for a request.
///
/// The method is compared case-insensitively.
///
/// # Errors
/// Returns `InvalidUrl` if `url` is not an absolute URL with a host.
pub fn derive_key(method: &str, url: &str) -> Result<SnapshotKey> {
    let host = host_of(url)?;
    let method = method.to_ascii_uppercase();

    let mut hasher = Sha256::new();
    hasher.update(format!("{method}:{url}").as_bytes());
    let digest = format!("{:x}", hasher.finalize());

    Ok(SnapshotKey(format!(
        "{}_{}",
        sanitize(&host),
        &digest[..DIGEST_PREFIX_LEN]
    )))
}

fn host_of(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| ApiSnapError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    parsed
        .host_str()
        .map(str::to_string)
        .ok_or_else(|| ApiSnapError::InvalidUrl {
            url: url.to_string(),
            reason: "URL has no host".to_string(),
        })
}

fn sanitize(host: &str) -> String {
    host.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
