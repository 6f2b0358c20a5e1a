//! Shared OpenRouteService HTTP client.

use dashmap::DashMap;
use reqwest::Client;
use std::time::{Duration, Instant};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// OpenRouteService request failure. Directions and geocoding callers treat
/// these as fatal; elevation callers degrade instead (the sampler absorbs
/// them).
#[derive(Debug, Error)]
pub enum OrsError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("location not found: {0}")]
    NotFound(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Client configuration. Passed in explicitly; there is no process-wide
/// client or key lookup.
#[derive(Debug, Clone)]
pub struct OrsConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    /// Restrict forward geocoding to one country (ISO code), if set.
    pub boundary_country: Option<String>,
}

impl OrsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            boundary_country: None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CachedElevations {
    pub(crate) fetched_at: Instant,
    pub(crate) elevations: Vec<f64>,
}

/// HTTP client for the OpenRouteService API.
pub struct OrsClient {
    pub(crate) client: Client,
    pub(crate) config: OrsConfig,
    /// Recent elevation responses keyed by the request's coordinate batch,
    /// so re-scoring the same alternatives doesn't re-hit the provider.
    pub(crate) elevation_cache: DashMap<String, CachedElevations>,
}

impl OrsClient {
    pub fn new(config: OrsConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(config.timeout)
                .build()
                .expect("Failed to create HTTP client"),
            config,
            elevation_cache: DashMap::new(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Surface a non-success response as an API error with its body text.
    pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, OrsError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(OrsError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
