// src/core/net.rs
//
// HTTP GET behind a trait so the fetch layer can run against canned pages.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::error::FetchError;

/// One-shot page retrieval. Implementations return the body of a 200
/// response and an error for anything else; they must not retry.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Real network transport: one shared client carrying the identity header
/// and the per-request timeout.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url).send().map_err(|source| FetchError::Transport {
            url: s!(url),
            source,
        })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status { url: s!(resp.url().as_str()), status: status.as_u16() });
        }

        resp.text().map_err(|source| FetchError::Body { url: s!(url), source })
    }
}
