//! Terminal User Interface for analysing reviews and browsing history.
//!
//! This module provides an interactive TUI built on the bubbletea-rs
//! framework. It has two tabs: an analysis tab holding the review form and
//! the latest result, and a history tab listing previously analysed reviews.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::AnalyzerApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Form, tab, and request-token state
//! - [`components`]: Form, result, and history renderers
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Gateway wiring
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the review gateway is stored at module level. Call
//! [`set_gateway`] before starting the program, and `AnalyzerApp::init()`
//! will pick it up and fetch the review history.

use std::sync::{Arc, OnceLock};

use crate::api::ReviewGateway;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::AnalyzerApp;

/// Global storage for the gateway used by `AnalyzerApp::init()`.
static GATEWAY: OnceLock<Arc<dyn ReviewGateway>> = OnceLock::new();

/// Global storage for the telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Sets the gateway the TUI uses to talk to the backend.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the gateway was set, `false` if one was already set.
pub fn set_gateway(gateway: Arc<dyn ReviewGateway>) -> bool {
    GATEWAY.set(gateway).is_ok()
}

/// Sets the telemetry sink used by the TUI.
///
/// # Returns
///
/// `true` if the sink was set, `false` if one was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Returns the configured gateway, if any.
pub(crate) fn configured_gateway() -> Option<Arc<dyn ReviewGateway>> {
    GATEWAY.get().cloned()
}

/// Returns the configured telemetry sink, or a no-op sink.
pub(crate) fn configured_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(NoopTelemetrySink))
}
