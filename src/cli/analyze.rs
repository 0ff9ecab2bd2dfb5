//! One-shot analysis of a review given on the command line.

use std::io;
use std::time::Instant;

use review_analyzer::telemetry::{TelemetryEvent, TelemetrySink, elapsed_millis};
use review_analyzer::{ApiError, Review, ReviewAnalyzerConfig, ReviewDraft, ReviewGateway};

use super::output::write_review_result;

/// Analyses the configured product review and prints the result.
///
/// # Errors
///
/// Returns an error if:
/// - The product name or review text is missing or fails validation
/// - The API URL is invalid
/// - The backend call fails
/// - Writing to stdout fails
pub async fn run(config: &ReviewAnalyzerConfig) -> Result<(), ApiError> {
    let (product_name, review_text) = config.require_review_input()?;
    let draft = validate_draft(product_name, review_text)?;

    let gateway = super::build_gateway(config)?;
    let telemetry = super::telemetry_sink(config);
    let review = analyze(&gateway, telemetry.as_ref(), &draft).await?;

    let mut stdout = io::stdout().lock();
    write_review_result(&mut stdout, &review)
}

/// Applies the submission rules to command-line input.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] describing the violated rule.
pub fn validate_draft(product_name: &str, review_text: &str) -> Result<ReviewDraft, ApiError> {
    ReviewDraft::new(product_name, review_text).map_err(|error| ApiError::Configuration {
        message: error.to_string(),
    })
}

/// Sends `draft` for analysis and records its latency.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn analyze<G>(
    gateway: &G,
    telemetry: &dyn TelemetrySink,
    draft: &ReviewDraft,
) -> Result<Review, ApiError>
where
    G: ReviewGateway + ?Sized,
{
    let started = Instant::now();
    let review = gateway.analyze_review(draft).await?;
    telemetry.record(TelemetryEvent::AnalysisCompleted {
        sentiment: review.sentiment.clone(),
        latency_ms: elapsed_millis(started.elapsed()),
    });
    Ok(review)
}
