//! HTTP transport seam for the feed client.
//!
//! The feed client talks to the network through the [`HttpClient`] trait so
//! the whole pipeline can be exercised against canned bytes. The production
//! implementation is a blocking `reqwest` client; there is no retry layer,
//! a timeout or non-success status fails the run.

use std::collections::BTreeMap;
use std::time::Duration;

use thiserror::Error;

/// Transport-level fetch error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HttpError {
    message: String,
    status: Option<u16>,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn status(status: u16, url: &str) -> Self {
        Self {
            message: format!("HTTP {status} from {url}"),
            status: Some(status),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status
    }
}

/// Blocking fetch abstraction.
pub trait HttpClient: Send + Sync {
    /// Fetches `url` and returns the full response body.
    ///
    /// Implementations must fail on non-success HTTP statuses and on
    /// timeout rather than returning a partial or error body.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, HttpError>;
}

/// Production client on `reqwest::blocking`.
pub struct ReqwestHttpClient {
    client: reqwest::blocking::Client,
}

impl ReqwestHttpClient {
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| HttpError::new(format!("failed to build http client: {error}")))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|error| HttpError::new(format!("request to {url} failed: {error}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::status(status.as_u16(), url));
        }

        let body = response.bytes().map_err(|error| {
            HttpError::new(format!("failed to read response from {url}: {error}"))
        })?;

        Ok(body.to_vec())
    }
}

/// Test double serving canned bytes per URL.
#[derive(Debug, Default)]
pub struct StaticHttpClient {
    responses: BTreeMap<String, Vec<u8>>,
}

impl StaticHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.responses.insert(url.into(), body.into());
        self
    }
}

impl HttpClient for StaticHttpClient {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| HttpError::status(404, url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_client_serves_registered_url() {
        let client = StaticHttpClient::new().with_response("http://feed/a.zip", vec![1, 2, 3]);

        let body = client.fetch("http://feed/a.zip").expect("must resolve");
        assert_eq!(body, vec![1, 2, 3]);
    }

    #[test]
    fn static_client_fails_unregistered_url_with_status() {
        let client = StaticHttpClient::new();

        let error = client.fetch("http://feed/missing.zip").expect_err("must fail");
        assert_eq!(error.status_code(), Some(404));
    }
}
