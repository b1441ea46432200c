//! Location Resolution Module
//!
//! Resolves the caller's approximate location from their public network
//! address using an ip-api compatible service.

use crate::api::ApiClient;
use crate::config::LocationConfig;
use crate::models::Location;
use crate::{Result, WhereNowError};
use serde_json::Value;
use tracing::{debug, instrument};

/// Service for resolving the caller's location
#[derive(Debug, Clone)]
pub struct LocationResolver {
    base_url: String,
}

impl LocationResolver {
    #[must_use]
    pub fn new(config: &LocationConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn request_url(&self) -> String {
        format!("{}/json/", self.base_url)
    }

    /// Look up the location of the caller's public address
    #[instrument(skip_all)]
    pub async fn resolve(&self, api_client: &ApiClient) -> Result<Location> {
        let response: Value = api_client
            .get_json(&self.request_url(), "location")
            .await?;

        // ip-api reports failures in-band with HTTP 200
        if let Some(message) = lookup_failure(&response) {
            return Err(WhereNowError::lookup(message));
        }

        let location: Location = serde_json::from_value(response)
            .map_err(|source| WhereNowError::Decode {
                shape: "location",
                source,
            })?;

        debug!(
            "Resolved location: {} at ({})",
            location.format_place(),
            location.format_coordinates()
        );

        Ok(location)
    }
}

fn lookup_failure(response: &Value) -> Option<String> {
    if response.get("status").and_then(Value::as_str) != Some("fail") {
        return None;
    }
    let message = response
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unknown failure");
    Some(message.to_string())
}
