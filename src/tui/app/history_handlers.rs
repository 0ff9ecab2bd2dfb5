//! Review history loading handlers.
//!
//! History is fetched on startup, after every successful analysis, and on
//! demand. A listing is applied unless one from a newer fetch is already
//! shown. Fetch failures are logged and leave the current list in place.

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::AnalyzerApp;
use crate::api::{Review, ReviewGateway};
use crate::telemetry::{TelemetryEvent, elapsed_millis};
use crate::tui::messages::AppMsg;
use crate::tui::state::RequestToken;

impl AnalyzerApp {
    /// Dispatches history loading and scrolling messages to their handlers.
    pub(super) fn handle_history_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RefreshRequested => self.start_history_fetch(),
            AppMsg::ReviewsLoaded {
                token,
                reviews,
                latency_ms,
            } => {
                self.handle_reviews_loaded(*token, reviews, *latency_ms);
                None
            }
            AppMsg::ReviewsFailed { token, message } => {
                Self::handle_reviews_failed(*token, message);
                None
            }
            _ => {
                // Unreachable: caller filters to history messages.
                None
            }
        }
    }

    /// Issues a new history fetch.
    pub(super) fn start_history_fetch(&mut self) -> Option<Cmd> {
        let Some(gateway) = self.gateway.clone() else {
            tracing::warn!("cannot fetch review history: no review gateway configured");
            return None;
        };

        let token = self.requests.begin_history_fetch();
        tracing::debug!(%token, "fetching review history");
        Some(fetch_reviews_cmd(gateway, token))
    }

    fn handle_reviews_loaded(&mut self, token: RequestToken, reviews: &[Review], latency_ms: u64) {
        if !self.requests.accept_history(token) {
            tracing::debug!(%token, "discarding superseded review history");
            return;
        }

        self.reviews = reviews.to_vec();
        self.clamp_history_scroll();
        self.telemetry.record(TelemetryEvent::ReviewsFetched {
            review_count: self.reviews.len(),
            latency_ms,
        });
    }

    fn handle_reviews_failed(token: RequestToken, message: &str) {
        tracing::warn!(%token, "failed to fetch review history: {message}");
    }

    pub(super) fn clamp_history_scroll(&mut self) {
        let last_card = self.reviews.len().saturating_sub(1);
        self.history_scroll = self.history_scroll.min(last_card);
    }
}

/// Creates a command that fetches the review history.
fn fetch_reviews_cmd(gateway: Arc<dyn ReviewGateway>, token: RequestToken) -> Cmd {
    Box::pin(async move {
        let started = Instant::now();
        let msg = match gateway.list_reviews().await {
            Ok(reviews) => AppMsg::ReviewsLoaded {
                token,
                reviews,
                latency_ms: elapsed_millis(started.elapsed()),
            },
            Err(error) => AppMsg::ReviewsFailed {
                token,
                message: error.to_string(),
            },
        };
        Some(Box::new(msg) as Box<dyn Any + Send>)
    })
}
