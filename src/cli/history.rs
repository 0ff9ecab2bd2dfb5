//! Prints the stored review history.

use std::io;
use std::time::Instant;

use review_analyzer::telemetry::{TelemetryEvent, TelemetrySink, elapsed_millis};
use review_analyzer::{ApiError, Review, ReviewAnalyzerConfig, ReviewGateway};

use super::output::write_history;

/// Fetches every stored review and prints them as cards.
///
/// # Errors
///
/// Returns an error if the API URL is invalid, the backend call fails, or
/// writing to stdout fails.
pub async fn run(config: &ReviewAnalyzerConfig) -> Result<(), ApiError> {
    let gateway = super::build_gateway(config)?;
    let telemetry = super::telemetry_sink(config);
    let reviews = fetch(&gateway, telemetry.as_ref()).await?;

    let mut stdout = io::stdout().lock();
    write_history(&mut stdout, &reviews)
}

/// Fetches the history and records its latency.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn fetch<G>(gateway: &G, telemetry: &dyn TelemetrySink) -> Result<Vec<Review>, ApiError>
where
    G: ReviewGateway + ?Sized,
{
    let started = Instant::now();
    let reviews = gateway.list_reviews().await?;
    telemetry.record(TelemetryEvent::ReviewsFetched {
        review_count: reviews.len(),
        latency_ms: elapsed_millis(started.elapsed()),
    });
    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use review_analyzer::telemetry::test_support::RecordingTelemetrySink;

    use super::*;
    use crate::cli::test_utils::{StubGateway, stub_review};

    #[tokio::test]
    async fn fetch_returns_reviews_in_server_order() {
        let gateway = StubGateway::listing(Ok(vec![
            stub_review(2, "Toaster"),
            stub_review(1, "Kettle"),
        ]));
        let telemetry = RecordingTelemetrySink::default();

        let reviews = fetch(&gateway, &telemetry).await.expect("fetch should succeed");

        let ids: Vec<u64> = reviews.iter().map(|review| review.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(matches!(
            telemetry.take().as_slice(),
            [TelemetryEvent::ReviewsFetched { review_count: 2, .. }]
        ));
    }

    #[tokio::test]
    async fn fetch_propagates_gateway_errors() {
        let gateway = StubGateway::listing(Err(ApiError::Network {
            message: "connection refused".to_owned(),
        }));

        let result = fetch(&gateway, &RecordingTelemetrySink::default()).await;

        assert!(matches!(result, Err(ApiError::Network { .. })));
    }
}
