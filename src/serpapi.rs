//! SerpApi search provider.
//!
//! Issues Google searches through the SerpApi JSON endpoint and parses the
//! `organic_results` array into [`SearchResult`] rows. Credentials and the
//! endpoint live in [`SerpApiConfig`]; retries and rate limiting are
//! SerpApi's concern, not ours.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ScanError;
use crate::provider::SearchProvider;
use crate::types::{Query, SearchResult};

/// Configuration for the SerpApi provider.
#[derive(Debug, Clone)]
pub struct SerpApiConfig {
    /// SerpApi API key. Never logged and never included in error messages.
    pub api_key: String,
    /// Endpoint base URL. Overridable for tests against a mock server.
    pub base_url: String,
    /// Interface language parameter (`hl`).
    pub hl: String,
    /// Country parameter (`gl`).
    pub gl: String,
    /// Google domain to route the search through.
    pub google_domain: String,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
}

impl SerpApiConfig {
    /// Build a config with production defaults for the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://serpapi.com".to_string(),
            hl: "en".to_string(),
            gl: "us".to_string(),
            google_domain: "google.com".to_string(),
            timeout_seconds: 15,
        }
    }

    /// Override the endpoint base URL (mock servers in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// SerpApi-backed [`SearchProvider`].
pub struct SerpApiProvider {
    config: SerpApiConfig,
    client: reqwest::Client,
}

impl SerpApiProvider {
    /// Construct a provider with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Http`] if the client cannot be built.
    pub fn new(config: SerpApiConfig) -> Result<Self, ScanError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| ScanError::Http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }
}

/// The slice of the SerpApi payload we consume. Everything else (ads,
/// knowledge panels, maps packs) is ignored.
#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<SearchResult>,
    /// SerpApi reports request-level failures in-band.
    #[serde(default)]
    error: Option<String>,
}

impl SearchProvider for SerpApiProvider {
    async fn search(&self, query: &Query) -> Result<Vec<SearchResult>, ScanError> {
        tracing::trace!(query = %query.restaurant_name, "SerpApi search");

        let url = format!("{}/search.json", self.config.base_url);
        let mut params: Vec<(&str, &str)> = vec![
            ("q", query.restaurant_name.as_str()),
            ("hl", self.config.hl.as_str()),
            ("gl", self.config.gl.as_str()),
            ("google_domain", self.config.google_domain.as_str()),
            ("api_key", self.config.api_key.as_str()),
        ];
        if let Some(location) = query.address_or_city.as_deref() {
            params.push(("location", location));
        }

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| ScanError::Http(format!("SerpApi request failed: {e}")))?
            .error_for_status()
            .map_err(|e| ScanError::Http(format!("SerpApi HTTP error: {e}")))?;

        let payload: SerpApiResponse = response
            .json()
            .await
            .map_err(|e| ScanError::Parse(format!("SerpApi response parse failed: {e}")))?;

        if let Some(message) = payload.error {
            return Err(ScanError::Provider(message));
        }

        tracing::debug!(count = payload.organic_results.len(), "SerpApi results parsed");
        Ok(payload.organic_results)
    }
}
