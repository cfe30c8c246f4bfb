// dog.ceo HTTP adapter
// reason: reqwest for pooled async HTTP, url for safe path-segment building
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;
use url::Url;

use dogapi_core::domain::{Breed, BreedCatalog, ImageCount, ImageUrl, SubBreed};
use dogapi_core::error::{AppError, Result as AppResult};
use dogapi_core::port::{DogApi, UpstreamError};

use crate::envelope::{error_hint, Envelope, Payload};

/// Public dog.ceo endpoint
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Adapter configuration
#[derive(Debug, Clone)]
pub struct DogCeoConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for DogCeoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// DogApi implementation backed by HTTP GETs
///
/// A single `reqwest::Client` (and its connection pool) is built once and
/// shared read-only by every call.
#[derive(Debug, Clone)]
pub struct DogCeoClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl DogCeoClient {
    /// Create a new adapter
    ///
    /// # Errors
    /// - AppError::Config if the base URL cannot be parsed or cannot carry a path
    /// - AppError::Config if the timeout is zero or the HTTP client fails to build
    pub fn new(config: DogCeoConfig) -> AppResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| AppError::Config(format!("invalid upstream URL '{}': {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "upstream URL '{}' cannot carry a path",
                config.base_url
            )));
        }
        if config.timeout.is_zero() {
            return Err(AppError::Config("upstream timeout must be positive".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            timeout: config.timeout,
        })
    }

    /// Append path segments to the base URL, percent-encoding each one
    ///
    /// `.` and `..` are refused: URL normalization would drop them and
    /// silently route the request to another endpoint.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(UpstreamError::Transport(format!(
                "invalid path segment: {:?}",
                bad
            )));
        }

        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// GET one endpoint and unwrap its success envelope
    async fn fetch(&self, segments: &[&str]) -> Result<Payload, UpstreamError> {
        let url = self.endpoint(segments)?;
        debug!(url = %url, "GET upstream");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        debug!(status = status.as_u16(), bytes = body.len(), "Upstream responded");

        if status != StatusCode::OK {
            let reason = error_hint(&body)
                .map(|hint| format!(" ({})", hint))
                .unwrap_or_default();
            return Err(UpstreamError::Transport(format!(
                "unexpected status code: {}{}",
                status.as_u16(),
                reason
            )));
        }

        Envelope::decode(&body)?.into_payload()
    }

    fn transport_error(&self, err: reqwest::Error) -> UpstreamError {
        if err.is_timeout() {
            UpstreamError::Transport(format!(
                "request timed out after {}ms",
                self.timeout.as_millis()
            ))
        } else {
            UpstreamError::Transport(format!("failed to make request: {}", err))
        }
    }
}

#[async_trait]
impl DogApi for DogCeoClient {
    async fn list_all_breeds(&self) -> Result<BreedCatalog, UpstreamError> {
        self.fetch(&["breeds", "list", "all"]).await?.into_catalog()
    }

    async fn list_breeds(&self) -> Result<Vec<String>, UpstreamError> {
        self.fetch(&["breeds", "list"]).await?.into_strings()
    }

    async fn random_image(&self) -> Result<ImageUrl, UpstreamError> {
        self.fetch(&["breeds", "image", "random"]).await?.into_text()
    }

    async fn random_images(&self, count: ImageCount) -> Result<Vec<ImageUrl>, UpstreamError> {
        let count = count.to_string();
        self.fetch(&["breeds", "image", "random", &count])
            .await?
            .into_strings()
    }

    async fn breed_images(&self, breed: &Breed) -> Result<Vec<ImageUrl>, UpstreamError> {
        self.fetch(&["breed", breed.as_str(), "images"])
            .await?
            .into_strings()
    }

    async fn random_breed_image(&self, breed: &Breed) -> Result<ImageUrl, UpstreamError> {
        self.fetch(&["breed", breed.as_str(), "images", "random"])
            .await?
            .into_text()
    }

    async fn random_breed_images(
        &self,
        breed: &Breed,
        count: ImageCount,
    ) -> Result<Vec<ImageUrl>, UpstreamError> {
        let count = count.to_string();
        self.fetch(&["breed", breed.as_str(), "images", "random", &count])
            .await?
            .into_strings()
    }

    async fn sub_breed_images(&self, sub_breed: &SubBreed) -> Result<Vec<ImageUrl>, UpstreamError> {
        self.fetch(&["breed", sub_breed.breed(), sub_breed.sub_breed(), "images"])
            .await?
            .into_strings()
    }

    async fn random_sub_breed_image(&self, sub_breed: &SubBreed) -> Result<ImageUrl, UpstreamError> {
        self.fetch(&[
            "breed",
            sub_breed.breed(),
            sub_breed.sub_breed(),
            "images",
            "random",
        ])
        .await?
        .into_text()
    }

    async fn list_sub_breeds(&self, breed: &Breed) -> Result<Vec<String>, UpstreamError> {
        self.fetch(&["breed", breed.as_str(), "list"])
            .await?
            .into_strings()
    }
}
