//! Data models exchanged with the review analysis backend.

use serde::{Deserialize, Deserializer, Serialize};

use crate::analysis::ReviewDraft;

/// A stored review together with its computed analysis.
///
/// Records are produced by the backend and never modified by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Backend identifier.
    pub id: u64,
    /// Reviewed product.
    pub product_name: String,
    /// Review text as stored by the backend.
    pub review_text: String,
    /// Sentiment label, normally `positive`, `negative`, or `neutral`.
    pub sentiment: String,
    /// Confidence for the sentiment label, in `[0, 1]`.
    pub sentiment_score: f64,
    /// Newline-delimited key points extracted from the review.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub key_points: String,
    /// Creation timestamp in ISO 8601 form.
    pub created_at: String,
}

/// Request body for `POST /api/analyze-review`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalyzeRequest<'a> {
    /// Reviewed product.
    pub product_name: &'a str,
    /// Review text to analyse.
    pub review_text: &'a str,
}

impl<'a> From<&'a ReviewDraft> for AnalyzeRequest<'a> {
    fn from(draft: &'a ReviewDraft) -> Self {
        Self {
            product_name: draft.product_name(),
            review_text: draft.review_text(),
        }
    }
}

/// Readiness report returned by `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    /// Overall status string, `healthy` when the service is up.
    pub status: String,
    /// Whether the sentiment model loaded.
    #[serde(default)]
    pub sentiment_analyzer: bool,
    /// Whether the key-point extraction service has credentials.
    #[serde(default)]
    pub gemini_configured: bool,
}

impl HealthStatus {
    /// Returns `true` when the backend reports itself healthy.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Envelope wrapping list and analyze responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope<T> {
    #[serde(default)]
    pub(crate) success: bool,
    pub(crate) data: Option<T>,
    pub(crate) error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Returns the payload when the backend flagged success.
    pub(crate) fn into_data(self) -> Result<T, crate::api::ApiError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(crate::api::ApiError::Unsuccessful {
                message: self.error,
            }),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
