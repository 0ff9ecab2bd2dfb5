//! Prints the backend health report.

use std::io;

use review_analyzer::{ApiError, HealthStatus, ReviewAnalyzerConfig, ReviewGateway};

use super::output::write_health;

/// Fetches and prints the backend health report.
///
/// # Errors
///
/// Returns an error if the backend cannot be reached, reports itself
/// unhealthy, or writing to stdout fails.
pub async fn run(config: &ReviewAnalyzerConfig) -> Result<(), ApiError> {
    let gateway = super::build_gateway(config)?;
    let status = gateway.health().await?;

    let mut stdout = io::stdout().lock();
    write_health(&mut stdout, &status)?;
    require_healthy(&status)
}

/// Turns an unhealthy report into an error so the process exits non-zero.
///
/// # Errors
///
/// Returns [`ApiError::Unsuccessful`] when the status is not `healthy`.
pub fn require_healthy(status: &HealthStatus) -> Result<(), ApiError> {
    if status.is_healthy() {
        Ok(())
    } else {
        Err(ApiError::Unsuccessful {
            message: Some(format!("backend status is {}", status.status)),
        })
    }
}
