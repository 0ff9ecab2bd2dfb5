//! Tab, scrolling, lifecycle, and window handlers for the review analyzer
//! TUI.
//!
//! Switching tabs only changes which view is drawn: reviews, the current
//! result, the error, and any in-flight request are left untouched. Each tab
//! keeps its own scroll position.

use bubbletea_rs::Cmd;

use super::AnalyzerApp;
use crate::tui::messages::AppMsg;
use crate::tui::state::ActiveTab;

impl AnalyzerApp {
    /// Dispatches tab, lifecycle, and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ShowTab(tab) => {
                self.active_tab = *tab;
                None
            }
            AppMsg::ToggleTab => {
                self.active_tab = self.active_tab.toggled();
                None
            }
            AppMsg::ScrollUp => {
                self.scroll(ScrollDirection::Up);
                None
            }
            AppMsg::ScrollDown => {
                self.scroll(ScrollDirection::Down);
                None
            }
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScrollDirection {
    Up,
    Down,
}

impl AnalyzerApp {
    /// Scrolls the active tab by one step.
    ///
    /// The history tab moves by whole cards; the analysis tab moves by line.
    fn scroll(&mut self, direction: ScrollDirection) {
        match self.active_tab {
            ActiveTab::History => {
                self.history_scroll = step(self.history_scroll, direction);
                self.clamp_history_scroll();
            }
            ActiveTab::Analyze => {
                let last_line = self.analyze_lines().len().saturating_sub(1);
                self.analyze_scroll = step(self.analyze_scroll, direction).min(last_line);
            }
        }
    }
}

const fn step(offset: usize, direction: ScrollDirection) -> usize {
    match direction {
        ScrollDirection::Up => offset.saturating_sub(1),
        ScrollDirection::Down => offset.saturating_add(1),
    }
}
