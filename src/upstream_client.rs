use crate::config::Config;
use crate::errors::{AppError, UpstreamError};
use crate::models::PlayerQuery;
use serde_json::Value;
use std::time::Duration;

/// Client for the upstream player-info service.
///
/// One GET per lookup, bounded by the configured timeout. No retries.
#[derive(Clone)]
pub struct PlayerInfoClient {
    client: reqwest::Client,
    endpoint: String,
}

impl PlayerInfoClient {
    /// Creates a new `PlayerInfoClient`.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Full URL of the info endpoint (query string excluded).
    /// * `timeout` - Upper bound for the whole request, body included.
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::ExternalApiError(format!("Failed to create upstream client: {}", e))
            })?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(config.upstream_url.clone(), config.upstream_timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the raw player document.
    ///
    /// # Arguments
    ///
    /// * `query` - The uid and region to look up.
    ///
    /// # Returns
    ///
    /// * `Result<Value, UpstreamError>` - The parsed, unmodified document.
    pub async fn fetch_player(&self, query: &PlayerQuery) -> Result<Value, UpstreamError> {
        let url = reqwest::Url::parse_with_params(
            &self.endpoint,
            &[("uid", query.uid.as_str()), ("region", query.region.as_str())],
        )
        .map_err(|e| UpstreamError::InvalidEndpoint(e.to_string()))?;

        tracing::info!(
            "Fetching player {} ({}) from upstream",
            query.uid,
            query.region
        );

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!("Upstream request for {} failed: {}", query.uid, e);
            UpstreamError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Upstream returned {} for player {}", status, query.uid);
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            tracing::warn!("Reading upstream body for {} failed: {}", query.uid, e);
            UpstreamError::Network(e.to_string())
        })?;

        let document: Value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Upstream body for {} is not JSON: {}", query.uid, e);
            UpstreamError::Malformed(e.to_string())
        })?;

        tracing::info!("✓ Player {} fetched", query.uid);
        Ok(document)
    }
}
