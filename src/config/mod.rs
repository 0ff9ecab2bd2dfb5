//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.review-analyzer.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `REVIEW_ANALYZER_API_URL`,
//!    `REVIEW_ANALYZER_TIMEOUT_SECONDS`, and friends
//! 4. **Command-line arguments** – `--api-url`/`-u` and the mode flags
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "http://localhost:5000"
//! timeout_seconds = 60
//! telemetry = true
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Backend URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print the backend health report.
    Health,
    /// Print the stored review history.
    History,
    /// Analyse one review given on the command line.
    Analyze,
    /// Interactive TUI for analysing reviews and browsing history.
    Interactive,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use review_analyzer::ReviewAnalyzerConfig;
///
/// let config = ReviewAnalyzerConfig::load().expect("failed to load configuration");
/// println!("talking to {}", config.api_url());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEW_ANALYZER",
    discovery(
        dotfile_name = ".review-analyzer.toml",
        config_file_name = "review-analyzer.toml",
        app_name = "review-analyzer"
    )
)]
pub struct ReviewAnalyzerConfig {
    /// Base URL of the review analysis backend.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-u <URL>`
    /// - Environment: `REVIEW_ANALYZER_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub api_url: Option<String>,

    /// Request timeout in seconds for every backend call.
    ///
    /// Analysis involves model inference on the backend, so the default is
    /// generous (60 seconds).
    #[ortho_config(cli_short = 'w')]
    pub timeout_seconds: u64,

    /// Product name for a one-shot analysis.
    ///
    /// Can be provided via:
    /// - CLI: `--product-name <NAME>` or `-p <NAME>`
    /// - Environment: `REVIEW_ANALYZER_PRODUCT_NAME`
    #[ortho_config(cli_short = 'p')]
    pub product_name: Option<String>,

    /// Review text for a one-shot analysis.
    ///
    /// Can be provided via:
    /// - CLI: `--review-text <TEXT>` or `-r <TEXT>`
    /// - Environment: `REVIEW_ANALYZER_REVIEW_TEXT`
    #[ortho_config(cli_short = 'r')]
    pub review_text: Option<String>,

    /// Prints the stored review history and exits.
    ///
    /// Note: boolean values are not loaded from the environment by
    /// `ortho_config`; use `--history` / `-l` or the configuration file.
    #[ortho_config(cli_short = 'l')]
    pub history: bool,

    /// Prints the backend health report and exits.
    #[ortho_config(cli_short = 'c')]
    pub health: bool,

    /// Writes telemetry events to stderr as JSON lines.
    #[ortho_config(cli_short = 'j')]
    pub telemetry: bool,
}

impl Default for ReviewAnalyzerConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            product_name: None,
            review_text: None,
            history: false,
            health: false,
            telemetry: false,
        }
    }
}

impl ReviewAnalyzerConfig {
    /// Returns the configured backend URL, or [`DEFAULT_API_URL`].
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Returns the request timeout.
    ///
    /// A zero timeout is treated as one second so requests cannot fail
    /// instantly.
    #[must_use]
    pub const fn timeout(&self) -> std::time::Duration {
        let seconds = if self.timeout_seconds == 0 {
            1
        } else {
            self.timeout_seconds
        };
        std::time::Duration::from_secs(seconds)
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// `--health` wins over `--history`, which wins over a one-shot analysis.
    /// A one-shot analysis needs both a product name and review text.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.health {
            OperationMode::Health
        } else if self.history {
            OperationMode::History
        } else if self.product_name.is_some() && self.review_text.is_some() {
            OperationMode::Analyze
        } else {
            OperationMode::Interactive
        }
    }

    /// Checks that the selected flags form a coherent request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when both `--history` and
    /// `--health` are set, or when only one of the one-shot analysis fields is
    /// provided.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.history && self.health {
            return Err(ApiError::Configuration {
                message: "choose only one of --history or --health".to_owned(),
            });
        }

        match (&self.product_name, &self.review_text) {
            (Some(_), None) => Err(ApiError::Configuration {
                message: "review text is required with --product-name (use --review-text or -r)"
                    .to_owned(),
            }),
            (None, Some(_)) => Err(ApiError::Configuration {
                message: "product name is required with --review-text (use --product-name or -p)"
                    .to_owned(),
            }),
            _ => Ok(()),
        }
    }

    /// Returns the one-shot analysis fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when either field is missing.
    pub fn require_review_input(&self) -> Result<(&str, &str), ApiError> {
        match (&self.product_name, &self.review_text) {
            (Some(product), Some(review)) => Ok((product.as_str(), review.as_str())),
            (None, _) => Err(ApiError::Configuration {
                message: "product name is required (use --product-name or -p)".to_owned(),
            }),
            (_, None) => Err(ApiError::Configuration {
                message: "review text is required (use --review-text or -r)".to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests;
