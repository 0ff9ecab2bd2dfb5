//! Review analyzer library crate.
//!
//! The library talks to a review analysis backend over HTTP, validates review
//! drafts before submission, and renders analysis results and review history
//! for the terminal. The interactive client lives in [`tui`]; the binary adds
//! one-shot CLI modes on top of the same gateway and components.

pub mod analysis;
pub mod api;
pub mod config;
pub mod telemetry;
pub mod tui;

pub use analysis::{DraftError, ReviewDraft, SentimentColor, SentimentKind, sentiment_style};
pub use api::{
    ApiError, HealthStatus, HttpReviewGateway, Review, ReviewGateway, analysis_error_message,
};
pub use config::{OperationMode, ReviewAnalyzerConfig};
