use std::fs;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::key::derive_key;
use super::record::{SnapshotRecord, SnapshotSummary};
use crate::{ApiSnapError, Result};

/// Default storage directory, relative to the working directory.
pub const DEFAULT_STORAGE_DIR: &str = ".api-snapshots";

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(PathBuf),
    NotFound,
}

/// File-backed snapshot storage: one pretty-printed JSON file per key.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_DIR)
    }
}

impl SnapshotStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the snapshot file for a request, whether or not it exists.
    ///
    /// # Errors
    /// Returns `InvalidUrl` if the URL cannot be keyed.
    pub fn path_for(&self, url: &str, method: &str) -> Result<PathBuf> {
        Ok(self.root.join(derive_key(method, url)?.file_name()))
    }

    /// Persist a record, replacing any previous snapshot for the same request.
    ///
    /// Creates the storage root (and parents) when missing.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the file cannot be written.
    pub fn save(&self, record: &SnapshotRecord) -> Result<PathBuf> {
        fs::create_dir_all(&self.root).map_err(|source| ApiSnapError::FileAccess {
            path: self.root.clone(),
            source,
        })?;

        let path = self.path_for(&record.url, &record.method)?;
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json).map_err(|source| ApiSnapError::FileAccess {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), status = record.status, "snapshot written");
        Ok(path)
    }

    /// Load the snapshot for a request. `Ok(None)` means no snapshot exists.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self, url: &str, method: &str) -> Result<Option<SnapshotRecord>> {
        let path = self.path_for(url, method)?;
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "snapshot not found");
                return Ok(None);
            }
            Err(source) => return Err(ApiSnapError::FileAccess { path, source }),
        };

        let record = serde_json::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), "snapshot loaded");
        Ok(Some(record))
    }

    /// Summaries of every snapshot under the root, sorted by URL then method.
    ///
    /// A missing root yields an empty list. Unparseable files are skipped.
    ///
    /// # Errors
    /// Returns an error if the root exists but cannot be read.
    pub fn list(&self) -> Result<Vec<SnapshotSummary>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(ApiSnapError::FileAccess {
                    path: self.root.clone(),
                    source,
                });
            }
        };

        let mut summaries = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            match read_summary(&path) {
                Ok(summary) => summaries.push(summary),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable snapshot"),
            }
        }

        summaries.sort_by(|a, b| a.url.cmp(&b.url).then_with(|| a.method.cmp(&b.method)));
        Ok(summaries)
    }

    /// Remove the snapshot for a request.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn delete(&self, url: &str, method: &str) -> Result<DeleteOutcome> {
        let path = self.path_for(url, method)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "snapshot deleted");
                Ok(DeleteOutcome::Deleted(path))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(DeleteOutcome::NotFound),
            Err(source) => Err(ApiSnapError::FileAccess { path, source }),
        }
    }
}

fn read_summary(path: &Path) -> Result<SnapshotSummary> {
    let file = fs::File::open(path).map_err(|source| ApiSnapError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let mut summary: SnapshotSummary = serde_json::from_reader(BufReader::new(file))?;
    summary.file = path.to_path_buf();
    Ok(summary)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
