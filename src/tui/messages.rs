//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::analysis::ReviewDraft;
use crate::api::Review;

use super::state::{ActiveTab, RequestToken};

/// Messages for the review analyzer TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Tabs
    /// Show the given tab.
    ShowTab(ActiveTab),
    /// Switch to the other tab.
    ToggleTab,

    // Form editing
    /// Type a character into the focused form field.
    FormInsertChar(char),
    /// Enter pressed inside the form.
    FormNewline,
    /// Delete the last character of the focused form field.
    FormBackspace,
    /// Move focus to the other form field.
    FormToggleField,
    /// Submit the form.
    FormSubmit,

    // Analysis
    /// Analyse a validated draft.
    AnalyzeRequested(ReviewDraft),
    /// The backend analysed and stored the review.
    AnalyzeComplete {
        /// Token of the request that produced this result.
        token: RequestToken,
        /// Stored review with its analysis.
        review: Review,
        /// Round-trip latency in milliseconds.
        latency_ms: u64,
    },
    /// The analysis request failed.
    AnalyzeFailed {
        /// Token of the failed request.
        token: RequestToken,
        /// Message to show to the user.
        message: String,
    },
    /// Abandon the in-flight analysis.
    CancelAnalysis,

    // History
    /// Request a refresh of the review history.
    RefreshRequested,
    /// The review history was fetched.
    ReviewsLoaded {
        /// Token of the fetch that produced this list.
        token: RequestToken,
        /// Reviews in server order.
        reviews: Vec<Review>,
        /// Round-trip latency in milliseconds.
        latency_ms: u64,
    },
    /// Fetching the review history failed.
    ReviewsFailed {
        /// Token of the failed fetch.
        token: RequestToken,
        /// Error detail for the log.
        message: String,
    },
    // Scrolling
    /// Scroll the active tab up.
    ScrollUp,
    /// Scroll the active tab down.
    ScrollDown,

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns `true` for form editing messages.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(
            self,
            Self::FormInsertChar(_)
                | Self::FormNewline
                | Self::FormBackspace
                | Self::FormToggleField
                | Self::FormSubmit
        )
    }

    /// Returns `true` for analysis request and response messages.
    #[must_use]
    pub const fn is_analysis(&self) -> bool {
        matches!(
            self,
            Self::AnalyzeRequested(_)
                | Self::AnalyzeComplete { .. }
                | Self::AnalyzeFailed { .. }
                | Self::CancelAnalysis
        )
    }

    /// Returns `true` for history loading messages.
    #[must_use]
    pub const fn is_history(&self) -> bool {
        matches!(
            self,
            Self::RefreshRequested | Self::ReviewsLoaded { .. } | Self::ReviewsFailed { .. }
        )
    }
}
