//! Error types exposed by the review API layer.

use thiserror::Error;

/// Message shown when an analysis fails without a server-provided reason.
pub const GENERIC_ANALYSIS_ERROR: &str = "An error occurred while analyzing the review";

/// Errors surfaced while configuring the client or calling the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The configured API URL could not be parsed.
    #[error("review API URL is invalid: {0}")]
    InvalidUrl(String),

    /// Networking failed while calling the backend.
    #[error("network error talking to the review API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The backend answered with a non-success HTTP status.
    #[error("review API returned status {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Server {
        /// HTTP status code.
        status: u16,
        /// The `error` field of the response body, when present.
        message: Option<String>,
    },

    /// The backend answered successfully but flagged the request as failed.
    #[error("review API reported failure: {}", .message.as_deref().unwrap_or("no error message"))]
    Unsuccessful {
        /// The `error` field of the response body, when present.
        message: Option<String>,
    },

    /// The response body did not match the expected shape.
    #[error("review API response could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or was inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl ApiError {
    /// Returns the human-readable reason supplied by the server, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } | Self::Unsuccessful { message } => message.as_deref(),
            _ => None,
        }
    }
}

/// Returns the message to show when an analysis request fails.
///
/// Prefers the server's `error` field and falls back to
/// [`GENERIC_ANALYSIS_ERROR`].
#[must_use]
pub fn analysis_error_message(error: &ApiError) -> String {
    error
        .server_message()
        .unwrap_or(GENERIC_ANALYSIS_ERROR)
        .to_owned()
}
