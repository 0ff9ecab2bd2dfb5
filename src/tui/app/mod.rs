//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! review analyzer TUI. It coordinates the form, result, and history
//! components, owns all shared state, and runs backend calls as async
//! commands.
//!
//! # Module Structure
//!
//! - `analyze_handlers`: Form editing, submission, and analysis results
//! - `history_handlers`: History fetching
//! - `lifecycle_handlers`: Tabs, scrolling, help, quit, and resize handling
//! - `model_impl`: The `bubbletea_rs::Model` implementation
//! - `rendering`: View rendering methods for terminal output
//! - `viewport`: Frame normalisation to the terminal size

use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::api::{Review, ReviewGateway};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::components::{ReviewFormComponent, ReviewResultComponent, ReviewsListComponent};
use super::input::InputContext;
use super::messages::AppMsg;
use super::state::{ActiveTab, RequestTracker, ReviewFormState};

mod analyze_handlers;
mod history_handlers;
mod lifecycle_handlers;
mod model_impl;
mod rendering;
mod viewport;

const DEFAULT_WIDTH: u16 = 80;
const DEFAULT_HEIGHT: u16 = 24;

/// Main application model for the review analyzer TUI.
pub struct AnalyzerApp {
    /// Stored reviews, in server order.
    pub(crate) reviews: Vec<Review>,
    /// Most recent successful analysis.
    pub(crate) current_result: Option<Review>,
    /// Whether an analysis is in flight.
    pub(crate) loading: bool,
    /// Message from the last failed analysis.
    pub(crate) error: Option<String>,
    /// Visible tab.
    pub(crate) active_tab: ActiveTab,
    /// Review form contents.
    pub(crate) form: ReviewFormState,
    /// Tokens of requests whose responses are still wanted.
    requests: RequestTracker,
    gateway: Option<Arc<dyn ReviewGateway>>,
    telemetry: Arc<dyn TelemetrySink>,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Index of the first history card shown.
    pub(crate) history_scroll: usize,
    /// Index of the first analysis tab line shown.
    pub(crate) analyze_scroll: usize,
    review_form: ReviewFormComponent,
    review_result: ReviewResultComponent,
    reviews_list: ReviewsListComponent,
}

impl fmt::Debug for AnalyzerApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzerApp")
            .field("reviews", &self.reviews.len())
            .field("current_result", &self.current_result)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .field("active_tab", &self.active_tab)
            .field("form", &self.form)
            .field("requests", &self.requests)
            .field("has_gateway", &self.gateway.is_some())
            .field("show_help", &self.show_help)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("history_scroll", &self.history_scroll)
            .field("analyze_scroll", &self.analyze_scroll)
            .finish_non_exhaustive()
    }
}

impl Default for AnalyzerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyzerApp {
    /// Creates an application with no history, no gateway, and telemetry
    /// disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reviews: Vec::new(),
            current_result: None,
            loading: false,
            error: None,
            active_tab: ActiveTab::default(),
            form: ReviewFormState::new(),
            requests: RequestTracker::new(),
            gateway: None,
            telemetry: Arc::new(NoopTelemetrySink),
            show_help: false,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            history_scroll: 0,
            analyze_scroll: 0,
            review_form: ReviewFormComponent::new(),
            review_result: ReviewResultComponent::new(),
            reviews_list: ReviewsListComponent::new(),
        }
    }

    /// Sets the gateway used for backend calls.
    #[must_use]
    pub fn with_gateway(mut self, gateway: Arc<dyn ReviewGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Sets the sink that receives telemetry events.
    #[must_use]
    pub fn with_telemetry_sink(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Sets explicit terminal dimensions.
    #[must_use]
    pub const fn with_dimensions(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns the stored reviews in server order.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Returns the latest successful analysis, if any.
    #[must_use]
    pub const fn current_result(&self) -> Option<&Review> {
        self.current_result.as_ref()
    }

    /// Returns `true` while an analysis is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the message of the last failed analysis, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the visible tab.
    #[must_use]
    pub const fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    /// Returns the review form state.
    #[must_use]
    pub const fn form(&self) -> &ReviewFormState {
        &self.form
    }

    /// Starts the initial history fetch.
    ///
    /// Returns `None` when no gateway is configured.
    pub fn start(&mut self) -> Option<Cmd> {
        self.start_history_fetch()
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. It delegates to specialised
    /// handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_form() {
            return self.handle_form_msg(msg);
        }
        if msg.is_analysis() {
            return self.handle_analysis_msg(msg);
        }
        if msg.is_history() {
            return self.handle_history_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Returns the current input context for context-aware key mapping.
    pub(crate) const fn input_context(&self) -> InputContext {
        match (self.active_tab, self.loading) {
            (ActiveTab::History, _) => InputContext::History,
            (ActiveTab::Analyze, true) => InputContext::AnalyzeLoading,
            (ActiveTab::Analyze, false) => InputContext::AnalyzeForm,
        }
    }
}
