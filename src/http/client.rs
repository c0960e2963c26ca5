use std::time::{Duration, Instant};

use reqwest::Method;
use reqwest::blocking::Client;
use tracing::{debug, info};

use super::{FetchedResponse, HttpClient, RequestSpec, normalize_headers};
use crate::{ApiSnapError, Result};

/// Production HTTP client using blocking reqwest.
#[derive(Debug, Default)]
pub struct ReqwestClient;

impl HttpClient for ReqwestClient {
    fn fetch(&self, request: &RequestSpec) -> Result<FetchedResponse> {
        let method = Method::from_bytes(request.method.as_bytes()).map_err(|_| {
            ApiSnapError::Config(format!("Invalid HTTP method: {}", request.method))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_millis(request.timeout_ms))
            .build()
            .map_err(|e| network_error(request, &e))?;

        let mut builder = client.request(method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        debug!(
            method = %request.method,
            url = %request.url,
            timeout_ms = request.timeout_ms,
            "sending request"
        );
        let started = Instant::now();
        let response = builder.send().map_err(|e| network_error(request, &e))?;

        let status = response.status().as_u16();
        let headers = normalize_headers(
            response
                .headers()
                .iter()
                .filter_map(|(name, value)| Some((name.as_str(), value.to_str().ok()?))),
        );
        let text = response.text().map_err(|e| network_error(request, &e))?;

        info!(
            method = %request.method,
            url = %request.url,
            status,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "response received"
        );
        Ok(FetchedResponse::from_parts(status, headers, &text))
    }
}

fn network_error(request: &RequestSpec, e: &reqwest::Error) -> ApiSnapError {
    if e.is_timeout() {
        ApiSnapError::Timeout {
            url: request.url.clone(),
            timeout_ms: request.timeout_ms,
        }
    } else if e.is_connect() {
        ApiSnapError::Network {
            url: request.url.clone(),
            message: format!("connection failed: {e}"),
        }
    } else {
        ApiSnapError::Network {
            url: request.url.clone(),
            message: e.to_string(),
        }
    }
}
