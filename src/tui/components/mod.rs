//! UI components for the review analyzer TUI.
//!
//! Components are stateless renderers: each takes a borrowed view context
//! from the application model and returns the lines to draw.

mod review_form;
mod review_result;
mod reviews_list;
pub(crate) mod text_truncate;
mod text_wrap;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

use crate::analysis::SentimentColor;

pub use review_form::{ReviewFormComponent, ReviewFormViewContext};
pub use review_result::{ReviewResultComponent, ReviewResultViewContext, key_point_items};
pub use reviews_list::{
    EMPTY_HISTORY_PLACEHOLDER, KEY_POINT_PREVIEW_COUNT, ReviewsListComponent,
    ReviewsListViewContext, key_point_preview,
};
pub use text_wrap::wrap_text;

const ANSI_RESET: &str = "\x1b[0m";

/// Wraps `text` in the colour's foreground escape sequence.
pub(crate) fn paint(color: SentimentColor, text: &str) -> String {
    format!("{}{text}{ANSI_RESET}", color.ansi_foreground())
}
