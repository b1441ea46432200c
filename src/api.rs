//! HTTP fetch-and-decode helper shared by the resolvers
//!
//! Every lookup is one GET, one full body read and one JSON decode. There is
//! no retry, no rate limiting and no request timeout: the first failure is
//! returned to the caller.

use crate::{Result, WhereNowError};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, error, instrument, warn};

const USER_AGENT: &str = concat!("wherenow/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper over a reqwest client that decodes typed JSON bodies
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    /// Create a new client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| WhereNowError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// GET `url` and decode the body as `T`.
    ///
    /// `shape` names the expected response in decode errors and logs.
    #[instrument(skip(self, url), fields(url = %redact_key(url)))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str, shape: &'static str) -> Result<T> {
        let start_time = Instant::now();

        // reqwest errors carry the full URL, key included
        let response = self.client.get(url).send().await.map_err(|source| {
            let source = source.without_url();
            warn!("Network error: {}", source);
            WhereNowError::Network {
                url: redact_key(url),
                source,
            }
        })?;

        let status = response.status();
        debug!(
            "HTTP response received: {} in {:.3}s",
            status,
            start_time.elapsed().as_secs_f64()
        );

        if status != StatusCode::OK {
            warn!(
                "{} request failed with status: {} - {}",
                shape,
                status,
                status.canonical_reason().unwrap_or("Unknown error")
            );
            return Err(WhereNowError::Status {
                url: redact_key(url),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| {
            let source = source.without_url();
            warn!("Failed to read {} response body: {}", shape, source);
            WhereNowError::Body {
                url: redact_key(url),
                source,
            }
        })?;

        if body.is_empty() {
            warn!("Empty {} response body", shape);
        }

        let decoded = serde_json::from_slice(&body).map_err(|source| {
            error!("Failed to parse {} response: {}", shape, source);
            WhereNowError::Decode { shape, source }
        })?;

        debug!(
            "Decoded {} response in {:.3}s",
            shape,
            start_time.elapsed().as_secs_f64()
        );

        Ok(decoded)
    }
}

/// Mask the value of the first `key=` query parameter
#[must_use]
pub fn redact_key(url: &str) -> String {
    let Some((head, tail)) = url.split_once("key=") else {
        return url.to_string();
    };
    let rest = tail.find('&').map_or("", |i| &tail[i..]);
    format!("{head}key=***{rest}")
}
