use std::cell::RefCell;

use serde_json::Value;
use tempfile::TempDir;

use crate::config::Config;
use crate::error::{ApiSnapError, Result};
use crate::http::{FetchedResponse, HttpClient, RequestSpec};
use crate::output::ColorMode;
use crate::snapshot::{Headers, SnapshotStore};

use super::CommandContext;

pub const URL: &str = "https://api.example.com/users";

/// Returns canned responses and records the requests it saw.
pub struct FakeClient {
    response: Result<FetchedResponse>,
    pub seen: RefCell<Vec<RequestSpec>>,
}

impl FakeClient {
    pub fn responding(status: u16, headers: &[(&str, &str)], body: Value) -> Self {
        let headers: Headers = headers
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self {
            response: Ok(FetchedResponse {
                status,
                headers,
                body,
                timestamp: "2026-07-01T12:00:00.000Z".to_string(),
            }),
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn timing_out() -> Self {
        Self {
            response: Err(ApiSnapError::Timeout {
                url: URL.to_string(),
                timeout_ms: 5,
            }),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl HttpClient for FakeClient {
    fn fetch(&self, request: &RequestSpec) -> Result<FetchedResponse> {
        self.seen.borrow_mut().push(request.clone());
        match &self.response {
            Ok(response) => Ok(response.clone()),
            Err(ApiSnapError::Timeout { url, timeout_ms }) => Err(ApiSnapError::Timeout {
                url: url.clone(),
                timeout_ms: *timeout_ms,
            }),
            Err(other) => Err(ApiSnapError::Config(other.to_string())),
        }
    }
}

/// Context backed by a temporary storage directory.
pub fn temp_context() -> (TempDir, CommandContext) {
    let dir = TempDir::new().unwrap();
    let config = Config {
        storage_dir: dir.path().join("snaps"),
        ..Config::default()
    };
    let ctx = CommandContext {
        store: SnapshotStore::new(config.storage_dir.clone()),
        config,
        color: ColorMode::Never,
        quiet: false,
    };
    (dir, ctx)
}
