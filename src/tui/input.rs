//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The same key can mean different things
//! depending on the active tab: on the analysis tab most keys type into the
//! form, while on the history tab they navigate.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;
use super::state::ActiveTab;

/// Which part of the interface receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Review form accepting text.
    AnalyzeForm,
    /// Analysis tab while a request is in flight; the form is disabled.
    AnalyzeLoading,
    /// Review history list.
    History,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if let Some(global) = map_global_key(key) {
        return Some(global);
    }

    match context {
        InputContext::AnalyzeForm => map_form_key(key),
        InputContext::AnalyzeLoading => map_loading_key(key.key),
        InputContext::History => map_history_key(key.key),
    }
}

fn map_global_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.key {
        KeyCode::Char('c') if control => Some(AppMsg::Quit),
        KeyCode::Char('t') if control => Some(AppMsg::ToggleTab),
        KeyCode::F(1) => Some(AppMsg::ShowTab(ActiveTab::Analyze)),
        KeyCode::F(2) => Some(AppMsg::ShowTab(ActiveTab::History)),
        _ => None,
    }
}

fn map_form_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.key {
        KeyCode::Char('s') if control => Some(AppMsg::FormSubmit),
        KeyCode::Char(character) if !control && !alt => Some(AppMsg::FormInsertChar(character)),
        KeyCode::Enter => Some(AppMsg::FormNewline),
        KeyCode::Backspace => Some(AppMsg::FormBackspace),
        KeyCode::Tab | KeyCode::BackTab => Some(AppMsg::FormToggleField),
        KeyCode::PageUp => Some(AppMsg::ScrollUp),
        KeyCode::PageDown => Some(AppMsg::ScrollDown),
        _ => None,
    }
}

const fn map_loading_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Esc => Some(AppMsg::CancelAnalysis),
        KeyCode::PageUp => Some(AppMsg::ScrollUp),
        KeyCode::PageDown => Some(AppMsg::ScrollDown),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

const fn map_history_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppMsg::Quit),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        KeyCode::Char('j') | KeyCode::Down | KeyCode::PageDown => Some(AppMsg::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::PageUp => Some(AppMsg::ScrollUp),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Tab => Some(AppMsg::ToggleTab),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> bubbletea_rs::event::KeyMsg {
        bubbletea_rs::event::KeyMsg {
            key: code,
            modifiers,
        }
    }

    fn plain(code: KeyCode) -> bubbletea_rs::event::KeyMsg {
        key(code, KeyModifiers::empty())
    }

    #[rstest]
    #[case::form(InputContext::AnalyzeForm)]
    #[case::loading(InputContext::AnalyzeLoading)]
    #[case::history(InputContext::History)]
    fn ctrl_c_quits_everywhere(#[case] context: InputContext) {
        let msg = map_key_to_message(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), context);
        assert!(matches!(msg, Some(AppMsg::Quit)));
    }

    #[rstest]
    #[case::form(InputContext::AnalyzeForm)]
    #[case::history(InputContext::History)]
    fn function_keys_select_tabs(#[case] context: InputContext) {
        assert!(matches!(
            map_key_to_message(&plain(KeyCode::F(2)), context),
            Some(AppMsg::ShowTab(ActiveTab::History))
        ));
        assert!(matches!(
            map_key_to_message(&plain(KeyCode::F(1)), context),
            Some(AppMsg::ShowTab(ActiveTab::Analyze))
        ));
    }

    #[test]
    fn letters_type_into_the_form() {
        let msg = map_key_to_message(&plain(KeyCode::Char('q')), InputContext::AnalyzeForm);
        assert!(matches!(msg, Some(AppMsg::FormInsertChar('q'))));

        let shifted = map_key_to_message(
            &key(KeyCode::Char('Q'), KeyModifiers::SHIFT),
            InputContext::AnalyzeForm,
        );
        assert!(matches!(shifted, Some(AppMsg::FormInsertChar('Q'))));
    }

    #[test]
    fn ctrl_s_submits_the_form() {
        let msg = map_key_to_message(
            &key(KeyCode::Char('s'), KeyModifiers::CONTROL),
            InputContext::AnalyzeForm,
        );
        assert!(matches!(msg, Some(AppMsg::FormSubmit)));
    }

    #[test]
    fn typing_is_ignored_while_loading() {
        let msg = map_key_to_message(&plain(KeyCode::Char('a')), InputContext::AnalyzeLoading);
        assert!(msg.is_none());
    }

    #[test]
    fn escape_leaves_an_idle_form_untouched() {
        let msg = map_key_to_message(&plain(KeyCode::Esc), InputContext::AnalyzeForm);
        assert!(msg.is_none());
    }

    #[test]
    fn escape_cancels_while_loading() {
        let msg = map_key_to_message(&plain(KeyCode::Esc), InputContext::AnalyzeLoading);
        assert!(matches!(msg, Some(AppMsg::CancelAnalysis)));
    }

    #[rstest]
    #[case(KeyCode::Char('r'), "refresh")]
    #[case(KeyCode::Char('j'), "down")]
    #[case(KeyCode::Up, "up")]
    #[case(KeyCode::Char('q'), "quit")]
    fn history_keys_navigate(#[case] code: KeyCode, #[case] expected: &str) {
        let msg = map_key_to_message(&plain(code), InputContext::History);
        let matched = match expected {
            "refresh" => matches!(msg, Some(AppMsg::RefreshRequested)),
            "down" => matches!(msg, Some(AppMsg::ScrollDown)),
            "up" => matches!(msg, Some(AppMsg::ScrollUp)),
            "quit" => matches!(msg, Some(AppMsg::Quit)),
            _ => false,
        };
        assert!(matched, "unexpected mapping for {code:?}: {msg:?}");
    }
}
