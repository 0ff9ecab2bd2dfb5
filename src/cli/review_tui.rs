//! Interactive TUI mode.
//!
//! The TUI analyses reviews typed into a form and browses the stored review
//! history. Backend calls run as async commands inside the program.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use review_analyzer::tui::{AnalyzerApp, set_gateway, set_telemetry_sink};
use review_analyzer::{ApiError, ReviewAnalyzerConfig};

/// Runs the interactive TUI against the configured backend.
///
/// # Errors
///
/// Returns an error if:
/// - The API URL is invalid
/// - The HTTP client cannot be built
/// - The TUI fails to initialise or run
pub async fn run(config: &ReviewAnalyzerConfig) -> Result<(), ApiError> {
    let gateway = super::build_gateway(config)?;

    // `AnalyzerApp::init()` reads both from module-level storage. When they
    // are already set the existing values are kept.
    if !set_gateway(Arc::new(gateway)) {
        tracing::debug!("review gateway already configured");
    }
    if !set_telemetry_sink(super::telemetry_sink(config)) {
        tracing::debug!("telemetry sink already configured");
    }

    run_tui().await.map_err(|error| ApiError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `AnalyzerApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<AnalyzerApp>::builder().alt_screen(true).build()?;
    program.run().await?;

    io::stdout().flush().ok();
    Ok(())
}
