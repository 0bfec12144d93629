//! REST client for the WatClassroom backend.
//!
//! DESIGN
//! ======
//! `BuildingApi` is the seam between the state machine and the network so
//! controller tests can substitute an in-memory fake. `HttpBuildingApi` is a
//! thin `reqwest` wrapper; body parsing lives in free functions so it can be
//! tested without a server.
//!
//! TIMEOUTS
//! ========
//! None are applied unless the caller sets them on [`ApiConfig`]. A request
//! that never resolves leaves the controller in its loading phase.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use reqwest::header::ACCEPT;

use super::types::{ApiError, BuildingAvailability, Directory};

pub const DEFAULT_BACKEND_URL: &str = "https://watclassroom-api.vercel.app";

// =============================================================================
// CONFIG
// =============================================================================

/// Transport settings for [`HttpBuildingApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin, without a trailing slash.
    pub base_url: String,
    /// Whole-request timeout, if any.
    pub request_timeout: Option<Duration>,
    /// Connection-establishment timeout, if any.
    pub connect_timeout: Option<Duration>,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            request_timeout: None,
            connect_timeout: None,
        }
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

// =============================================================================
// TRAIT
// =============================================================================

/// The two backend calls the core depends on. Enables fakes in tests.
#[async_trait::async_trait]
pub trait BuildingApi: Send + Sync {
    /// `GET /all_buildings/`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-success status, or
    /// a body that is not a code -> `{ name }` mapping.
    async fn all_buildings(&self) -> Result<Directory, ApiError>;

    /// `GET /result/{building_code}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-success status, or
    /// a body that is not the nested building -> room -> intervals mapping.
    async fn result(&self, building_code: &str) -> Result<BuildingAvailability, ApiError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct HttpBuildingApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBuildingApi {
    /// Build a client from transport settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_body(&self, url: &str) -> Result<String, ApiError> {
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16() });
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))
    }
}

#[async_trait::async_trait]
impl BuildingApi for HttpBuildingApi {
    async fn all_buildings(&self) -> Result<Directory, ApiError> {
        let body = self.get_body(&directory_endpoint(&self.base_url)).await?;
        parse_directory(&body)
    }

    async fn result(&self, building_code: &str) -> Result<BuildingAvailability, ApiError> {
        let url = result_endpoint(&self.base_url, building_code)?;
        let body = self.get_body(url.as_str()).await?;
        parse_availability(&body)
    }
}

// =============================================================================
// ENDPOINTS + PARSING
// =============================================================================

fn directory_endpoint(base_url: &str) -> String {
    format!("{base_url}/all_buildings/")
}

/// `{base}/result/{code}` with the code percent-encoded as one path segment.
fn result_endpoint(base_url: &str, building_code: &str) -> Result<reqwest::Url, ApiError> {
    let mut url = reqwest::Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| ApiError::InvalidUrl(base_url.to_owned()))?
        .pop_if_empty()
        .push("result")
        .push(building_code);
    Ok(url)
}

fn parse_directory(body: &str) -> Result<Directory, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn parse_availability(body: &str) -> Result<BuildingAvailability, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
