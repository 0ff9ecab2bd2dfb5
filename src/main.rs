//! Review analyzer CLI entrypoint.
//!
//! Without a mode flag the interactive TUI starts. `--product-name` with
//! `--review-text` analyses one review; `--history` and `--health` print the
//! stored reviews or the backend status. Each one-shot mode makes a single
//! request and prints the result.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use review_analyzer::{ApiError, OperationMode, ReviewAnalyzerConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ApiError> {
    let config = load_config()?;
    config.validate()?;

    let mode = config.operation_mode();
    cli::logging::init(mode);
    tracing::debug!(?mode, api_url = config.api_url(), "starting review analyzer");

    match mode {
        OperationMode::Health => cli::health::run(&config).await,
        OperationMode::History => cli::history::run(&config).await,
        OperationMode::Analyze => cli::analyze::run(&config).await,
        OperationMode::Interactive => cli::review_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReviewAnalyzerConfig, ApiError> {
    ReviewAnalyzerConfig::load().map_err(|error| ApiError::Configuration {
        message: error.to_string(),
    })
}
