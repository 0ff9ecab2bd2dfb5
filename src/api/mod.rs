//! HTTP client for the review analysis backend.
//!
//! The backend exposes three endpoints: `GET /api/reviews` returns the stored
//! review history, `POST /api/analyze-review` analyses and stores a new review,
//! and `GET /api/health` reports service readiness. This module wraps them in
//! the [`ReviewGateway`] trait so that the TUI and CLI can be exercised against
//! mocks, and maps transport and server failures into [`ApiError`].

pub mod error;
pub mod gateway;
pub mod models;

pub use error::{ApiError, GENERIC_ANALYSIS_ERROR, analysis_error_message};
pub use gateway::{HttpReviewGateway, ReviewGateway};
pub use models::{AnalyzeRequest, HealthStatus, Review};

#[cfg(test)]
pub use gateway::MockReviewGateway;
