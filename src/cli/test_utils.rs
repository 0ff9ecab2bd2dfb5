//! Shared test utilities for CLI tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use review_analyzer::{ApiError, HealthStatus, Review, ReviewDraft, ReviewGateway};

type Canned<T> = Arc<Mutex<Option<Result<T, ApiError>>>>;

/// A gateway stub that captures submitted drafts and returns preconfigured
/// responses.
#[derive(Clone, Default)]
pub struct StubGateway {
    /// Draft passed to the last `analyze_review` call.
    pub captured: Arc<Mutex<Option<ReviewDraft>>>,
    /// Response to `list_reviews` (consumed on first call).
    pub reviews: Canned<Vec<Review>>,
    /// Response to `analyze_review` (consumed on first call).
    pub analysis: Canned<Review>,
}

impl StubGateway {
    /// Creates a stub answering `list_reviews` with `response`.
    pub fn listing(response: Result<Vec<Review>, ApiError>) -> Self {
        let stub = Self::default();
        stub.reviews
            .lock()
            .expect("reviews mutex should be available")
            .replace(response);
        stub
    }

    /// Creates a stub answering `analyze_review` with `response`.
    pub fn analyzing(response: Result<Review, ApiError>) -> Self {
        let stub = Self::default();
        stub.analysis
            .lock()
            .expect("analysis mutex should be available")
            .replace(response);
        stub
    }

    /// Returns the draft submitted for analysis, if any.
    pub fn submitted(&self) -> Option<ReviewDraft> {
        self.captured
            .lock()
            .expect("captured mutex should be available")
            .clone()
    }
}

#[async_trait]
impl ReviewGateway for StubGateway {
    async fn list_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.reviews
            .lock()
            .expect("reviews mutex should be available")
            .take()
            .expect("list response should only be consumed once")
    }

    async fn analyze_review(&self, draft: &ReviewDraft) -> Result<Review, ApiError> {
        self.captured
            .lock()
            .expect("captured mutex should be available")
            .replace(draft.clone());

        self.analysis
            .lock()
            .expect("analysis mutex should be available")
            .take()
            .expect("analysis response should only be consumed once")
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        Ok(HealthStatus {
            status: "healthy".to_owned(),
            sentiment_analyzer: true,
            gemini_configured: true,
        })
    }
}

/// Builds a positive review with three key points.
pub fn stub_review(id: u64, product_name: &str) -> Review {
    Review {
        id,
        product_name: product_name.to_owned(),
        review_text: format!("{product_name} works exactly as described"),
        sentiment: "positive".to_owned(),
        sentiment_score: 0.95,
        key_points: "Good battery\nPoor screen\nCheap build".to_owned(),
        created_at: "2024-03-05T14:30:00Z".to_owned(),
    }
}
