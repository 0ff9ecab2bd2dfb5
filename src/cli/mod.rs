//! CLI operation mode handlers.
//!
//! This module contains the implementations for different operation modes:
//! - [`analyze`]: Analyse one review given on the command line
//! - [`health`]: Print the backend health report
//! - [`history`]: Print the stored review history
//! - [`review_tui`]: Interactive TUI for analysing reviews
//!
//! Output formatting utilities are in [`output`]; log setup is in
//! [`logging`].

use std::sync::Arc;

use review_analyzer::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use review_analyzer::{ApiError, HttpReviewGateway, ReviewAnalyzerConfig};

pub mod analyze;
pub mod health;
pub mod history;
pub mod logging;
pub mod output;
pub mod review_tui;

#[cfg(test)]
pub mod test_utils;

/// Builds the HTTP gateway from the configured URL and timeout.
///
/// # Errors
///
/// Returns [`ApiError::InvalidUrl`] when the URL cannot be used, or
/// [`ApiError::Configuration`] when the HTTP client cannot be built.
pub fn build_gateway(config: &ReviewAnalyzerConfig) -> Result<HttpReviewGateway, ApiError> {
    let gateway = HttpReviewGateway::new(config.api_url(), config.timeout())?;
    tracing::debug!(base_url = %gateway.base_url(), "review API gateway ready");
    Ok(gateway)
}

/// Returns the telemetry sink selected by `--telemetry`.
pub fn telemetry_sink(config: &ReviewAnalyzerConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}
