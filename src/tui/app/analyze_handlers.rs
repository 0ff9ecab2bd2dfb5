//! Review form and analysis handlers.
//!
//! Submitting the form produces an [`AppMsg::AnalyzeRequested`] draft. The
//! analysis runs as an async command tagged with a request token; its result
//! is applied only while that token is still tracked, so a cancelled analysis
//! can never overwrite state when its response arrives late.

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::AnalyzerApp;
use crate::analysis::ReviewDraft;
use crate::api::{
    ApiError, GENERIC_ANALYSIS_ERROR, Review, ReviewGateway, analysis_error_message,
};
use crate::telemetry::{TelemetryEvent, elapsed_millis};
use crate::tui::messages::AppMsg;
use crate::tui::state::RequestToken;

impl AnalyzerApp {
    /// Dispatches form editing messages to their handlers.
    ///
    /// Editing is ignored while an analysis is loading.
    pub(super) fn handle_form_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if self.loading {
            return None;
        }

        match msg {
            AppMsg::FormInsertChar(character) => self.form.insert_char(*character),
            AppMsg::FormNewline => self.form.newline(),
            AppMsg::FormBackspace => self.form.backspace(),
            AppMsg::FormToggleField => self.form.toggle_focus(),
            AppMsg::FormSubmit => return self.handle_form_submit(),
            _ => {
                // Unreachable: caller filters to form messages.
            }
        }
        None
    }

    /// Dispatches analysis messages to their handlers.
    pub(super) fn handle_analysis_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::AnalyzeRequested(draft) => self.handle_analyze_requested(draft),
            AppMsg::AnalyzeComplete {
                token,
                review,
                latency_ms,
            } => self.handle_analyze_complete(*token, review, *latency_ms),
            AppMsg::AnalyzeFailed { token, message } => {
                self.handle_analyze_failed(*token, message);
                None
            }
            AppMsg::CancelAnalysis => {
                self.handle_cancel_analysis();
                None
            }
            _ => {
                // Unreachable: caller filters to analysis messages.
                None
            }
        }
    }

    /// Submits the form when it holds a valid draft.
    ///
    /// The form clears as soon as the draft is taken.
    fn handle_form_submit(&mut self) -> Option<Cmd> {
        let draft = self.form.submit(self.loading)?;
        self.handle_analyze_requested(&draft)
    }

    /// Starts analysing `draft`.
    ///
    /// Clears the previous result and error, marks the app as loading, and
    /// returns the command performing the request. Requests made while
    /// another analysis is loading are ignored.
    fn handle_analyze_requested(&mut self, draft: &ReviewDraft) -> Option<Cmd> {
        if self.loading {
            tracing::debug!("ignoring analysis request while another is in flight");
            return None;
        }

        self.loading = true;
        self.error = None;
        self.current_result = None;
        self.analyze_scroll = 0;
        let token = self.requests.begin_analysis();

        let Some(gateway) = self.gateway.clone() else {
            tracing::warn!("cannot analyse review: no review gateway configured");
            self.handle_analyze_failed(token, GENERIC_ANALYSIS_ERROR);
            return None;
        };

        tracing::debug!(%token, product = draft.product_name(), "starting analysis");
        Some(analyze_cmd(gateway, draft.clone(), token))
    }

    /// Applies a successful analysis and refreshes the history.
    fn handle_analyze_complete(
        &mut self,
        token: RequestToken,
        review: &Review,
        latency_ms: u64,
    ) -> Option<Cmd> {
        if !self.requests.finish_analysis(token) {
            tracing::debug!(%token, "discarding result of abandoned analysis");
            return None;
        }

        self.loading = false;
        self.error = None;
        self.current_result = Some(review.clone());
        self.telemetry.record(TelemetryEvent::AnalysisCompleted {
            sentiment: review.sentiment.clone(),
            latency_ms,
        });

        self.start_history_fetch()
    }

    /// Records a failed analysis.
    ///
    /// The previous result stays cleared; the error is shown on the analysis
    /// tab.
    fn handle_analyze_failed(&mut self, token: RequestToken, message: &str) {
        if !self.requests.finish_analysis(token) {
            tracing::debug!(%token, "discarding failure of abandoned analysis");
            return;
        }

        self.loading = false;
        self.error = Some(message.to_owned());
    }

    /// Abandons the in-flight analysis, if any.
    fn handle_cancel_analysis(&mut self) {
        if let Some(token) = self.requests.cancel_analysis() {
            tracing::info!(%token, "analysis cancelled");
            self.loading = false;
        }
    }
}

/// Creates a command that analyses `draft` and reports the outcome.
fn analyze_cmd(gateway: Arc<dyn ReviewGateway>, draft: ReviewDraft, token: RequestToken) -> Cmd {
    Box::pin(async move {
        let started = Instant::now();
        let msg = match gateway.analyze_review(&draft).await {
            Ok(review) => AppMsg::AnalyzeComplete {
                token,
                review,
                latency_ms: elapsed_millis(started.elapsed()),
            },
            Err(error) => analyze_failed_msg(token, &error),
        };
        Some(Box::new(msg) as Box<dyn Any + Send>)
    })
}

fn analyze_failed_msg(token: RequestToken, error: &ApiError) -> AppMsg {
    tracing::warn!(%token, "review analysis failed: {error}");
    AppMsg::AnalyzeFailed {
        token,
        message: analysis_error_message(error),
    }
}
