//! Gateways for calling the review analysis backend.
//!
//! [`ReviewGateway`] abstracts the three backend endpoints so that callers can
//! be tested against mocks, while [`HttpReviewGateway`] performs the real HTTP
//! requests through reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::analysis::ReviewDraft;

use super::error::ApiError;
use super::models::{AnalyzeRequest, ApiEnvelope, HealthStatus, Review};

const REVIEWS_PATH: &str = "api/reviews";
const ANALYZE_PATH: &str = "api/analyze-review";
const HEALTH_PATH: &str = "api/health";

/// Gateway that can read and create analysed reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Fetch every stored review, in server order.
    async fn list_reviews(&self) -> Result<Vec<Review>, ApiError>;

    /// Submit a draft for analysis and return the stored record.
    async fn analyze_review(&self, draft: &ReviewDraft) -> Result<Review, ApiError>;

    /// Fetch the backend readiness report.
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

/// reqwest-backed gateway for the review analysis backend.
#[derive(Debug, Clone)]
pub struct HttpReviewGateway {
    client: Client,
    base_url: Url,
}

impl HttpReviewGateway {
    /// Creates a gateway rooted at `api_url` with the given request timeout.
    ///
    /// A missing trailing slash is added so that endpoint paths are appended
    /// to any path prefix in `api_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when `api_url` is not an absolute URL
    /// or [`ApiError::Configuration`] when the HTTP client cannot be built.
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut base_url =
            Url::parse(api_url).map_err(|error| ApiError::InvalidUrl(error.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!(
                "{api_url} cannot be used as a base URL"
            )));
        }
        if !base_url.path().ends_with('/') {
            let with_slash = format!("{}/", base_url.path());
            base_url.set_path(&with_slash);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| ApiError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self { client, base_url })
    }

    /// Returns the normalised base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|error| ApiError::InvalidUrl(error.to_string()))
    }
}

#[async_trait]
impl ReviewGateway for HttpReviewGateway {
    async fn list_reviews(&self) -> Result<Vec<Review>, ApiError> {
        let url = self.endpoint(REVIEWS_PATH)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| map_transport_error("list reviews", &error))?;
        read_envelope(response).await
    }

    async fn analyze_review(&self, draft: &ReviewDraft) -> Result<Review, ApiError> {
        let url = self.endpoint(ANALYZE_PATH)?;
        let response = self
            .client
            .post(url)
            .json(&AnalyzeRequest::from(draft))
            .send()
            .await
            .map_err(|error| map_transport_error("analyze review", &error))?;
        read_envelope(response).await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = self.endpoint(HEALTH_PATH)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| map_transport_error("health check", &error))?;
        let body = read_success_body(response).await?;
        decode(&body)
    }
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = read_success_body(response).await?;
    decode::<ApiEnvelope<T>>(&body)?.into_data()
}

/// Reads the body, converting non-success statuses into [`ApiError::Server`].
async fn read_success_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|error| map_transport_error("read response body", &error))?;

    if status.is_success() {
        Ok(body)
    } else {
        Err(ApiError::Server {
            status: status.as_u16(),
            message: extract_error_message(&body),
        })
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|error| ApiError::Decode {
        message: error.to_string(),
    })
}

fn map_transport_error(operation: &str, error: &reqwest::Error) -> ApiError {
    ApiError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

/// Pulls the `error` string out of a JSON error body.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
