//! Rendering logic for the review analyzer TUI.
//!
//! This module contains the view rendering methods that produce the lines
//! drawn in the terminal. These are pure query methods that read state
//! without modification.

use super::AnalyzerApp;
use crate::analysis::SentimentColor;
use crate::tui::components::text_truncate::{truncate_lines, truncate_to_display_width};
use crate::tui::components::{
    ReviewFormViewContext, ReviewResultViewContext, ReviewsListViewContext, paint,
};
use crate::tui::input::InputContext;
use crate::tui::state::ActiveTab;

const TITLE: &str = "🔍 Product Review Analyzer";
const LOADING_MESSAGE: &str = "Analyzing review... This may take a few seconds.";
const REVERSE_VIDEO: &str = "\x1b[7m";
const ANSI_RESET: &str = "\x1b[0m";

/// Rows used by the title, tab bar, two separators, and status bar.
const CHROME_HEIGHT: usize = 5;

/// Widest column count used for wrapped text.
const MAX_TEXT_WIDTH: usize = 100;

impl AnalyzerApp {
    /// Renders the full frame for the active tab.
    pub(super) fn render_frame(&self) -> Vec<String> {
        let separator = self.render_separator();

        let mut body = match self.active_tab {
            ActiveTab::Analyze => self
                .analyze_lines()
                .into_iter()
                .skip(self.analyze_scroll)
                .collect(),
            ActiveTab::History => self.history_body(),
        };
        truncate_lines(&mut body, self.body_height());

        let mut lines = vec![self.render_header(), self.render_tab_bar(), separator.clone()];
        lines.append(&mut body);
        let filler = self.body_height().saturating_sub(lines.len().saturating_sub(3));
        lines.extend(std::iter::repeat_with(String::new).take(filler));
        lines.push(separator);
        lines.push(self.render_status_bar());
        lines
    }

    /// Returns the number of rows available to the tab body.
    pub(super) fn body_height(&self) -> usize {
        usize::from(self.height)
            .saturating_sub(CHROME_HEIGHT)
            .max(1)
    }

    fn text_width(&self) -> usize {
        usize::from(self.width)
            .saturating_sub(2)
            .clamp(1, MAX_TEXT_WIDTH)
    }

    /// Renders the title line.
    pub(super) fn render_header(&self) -> String {
        let loading_indicator = if self.loading { " [Analyzing...]" } else { "" };
        format!("{TITLE}{loading_indicator}")
    }

    /// Renders the tab bar, highlighting the active tab.
    ///
    /// The history tab shows how many reviews are stored.
    pub(super) fn render_tab_bar(&self) -> String {
        [ActiveTab::Analyze, ActiveTab::History]
            .into_iter()
            .map(|tab| {
                let label = match tab {
                    ActiveTab::Analyze => format!("{} {}", tab.shortcut(), tab.title()),
                    ActiveTab::History => format!(
                        "{} {} ({})",
                        tab.shortcut(),
                        tab.title(),
                        self.reviews.len()
                    ),
                };
                if tab == self.active_tab {
                    format!("{REVERSE_VIDEO} {label} {ANSI_RESET}")
                } else {
                    format!(" {label} ")
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn render_separator(&self) -> String {
        "\u{2500}".repeat(usize::from(self.width).saturating_sub(1).max(1))
    }

    /// Renders the whole analysis tab: form, error, loading notice, and
    /// result.
    pub(super) fn analyze_lines(&self) -> Vec<String> {
        let max_width = self.text_width();
        let form_ctx = ReviewFormViewContext {
            form: &self.form,
            loading: self.loading,
            max_width,
        };
        let mut lines = self.review_form.view(&form_ctx);

        if let Some(error) = &self.error {
            lines.push(String::new());
            lines.push(paint(SentimentColor::Red, &format!("Error: {error}")));
        }

        if self.loading {
            lines.push(String::new());
            lines.push(LOADING_MESSAGE.to_owned());
        } else if let Some(review) = &self.current_result {
            lines.push(String::new());
            let result_ctx = ReviewResultViewContext { review, max_width };
            lines.extend(self.review_result.view(&result_ctx));
        }

        lines
    }

    /// Renders the history tab from the scrolled-to card.
    pub(super) fn history_body(&self) -> Vec<String> {
        let ctx = ReviewsListViewContext {
            reviews: &self.reviews,
            scroll_offset: self.history_scroll,
            max_width: self.text_width(),
        };
        self.reviews_list.view(&ctx)
    }

    /// Renders the status bar with key hints for the current context.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = match self.input_context() {
            InputContext::AnalyzeForm => {
                "Tab:field  Enter:newline  Ctrl+S:analyze  PgUp/PgDn:scroll  F2:history  Ctrl+C:quit"
            }
            InputContext::AnalyzeLoading => "Esc:cancel analysis  F2:history  ?:help  Ctrl+C:quit",
            InputContext::History => "j/k:scroll  r:refresh  F1:analyze  ?:help  q:quit",
        };
        truncate_to_display_width(hints, usize::from(self.width).saturating_sub(1)).into_owned()
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> Vec<String> {
        let help_text = r"
=== Keyboard Shortcuts ===

Tabs:
  F1         Analyze Review
  F2         Review History
  Ctrl+T     Switch tab

Analyze Review:
  Tab        Switch between product name and review text
  Enter      Next field / new line in the review
  Backspace  Delete one character
  Ctrl+S     Analyze the review
  PgUp/PgDn  Scroll the form and result
  Esc        Cancel a running analysis

Review History:
  j, Down    Scroll down
  k, Up      Scroll up
  r          Refresh
  q          Quit

Anywhere:
  Ctrl+C     Quit

Press any key to close this help.
";
        help_text.lines().map(ToOwned::to_owned).collect()
    }
}
