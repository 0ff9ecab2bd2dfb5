//! Truncation helpers for fixed-size terminal views.
//!
//! Rendered views are built as lists of lines. These helpers cut such lists
//! to a maximum height and single lines to a maximum display width, leaving a
//! visible `...` marker wherever content was dropped.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";
const ANSI_RESET: &str = "\x1b[0m";

/// Cuts `lines` down to at most `max_height` entries.
///
/// When lines are dropped, the last kept entry is replaced by `...` so the
/// cut is visible. A zero height leaves the lines untouched.
pub(crate) fn truncate_lines(lines: &mut Vec<String>, max_height: usize) {
    if max_height == 0 || lines.len() <= max_height {
        return;
    }

    lines.truncate(max_height.saturating_sub(1));
    let reset_needed = lines.last().is_some_and(|line| line.contains("\x1b["));
    let marker = if reset_needed {
        format!("{ANSI_RESET}{ELLIPSIS}")
    } else {
        ELLIPSIS.to_owned()
    };
    lines.push(marker);
}

/// Truncates `text` to `max_width` terminal columns, ending with `...` when
/// anything was removed.
///
/// Widths of three columns or fewer cannot fit any text before the marker,
/// so they render as dots only.
pub(crate) fn truncate_to_display_width(text: &str, max_width: usize) -> Cow<'_, str> {
    if text.width() <= max_width {
        return Cow::Borrowed(text);
    }

    if max_width <= ELLIPSIS.len() {
        return Cow::Owned(".".repeat(max_width));
    }

    let budget = max_width - ELLIPSIS.len();
    let mut kept = String::with_capacity(max_width);
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        kept.push(ch);
        used += ch_width;
    }
    kept.push_str(ELLIPSIS);
    Cow::Owned(kept)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{truncate_lines, truncate_to_display_width};

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_owned()).collect()
    }

    #[test]
    fn short_views_are_left_alone() {
        let mut view = lines(&["one", "two"]);
        truncate_lines(&mut view, 3);
        assert_eq!(view, lines(&["one", "two"]));
    }

    #[test]
    fn tall_views_end_with_a_marker() {
        let mut view = lines(&["one", "two", "three", "four"]);
        truncate_lines(&mut view, 3);
        assert_eq!(view, lines(&["one", "two", "..."]));
    }

    #[test]
    fn zero_height_means_unlimited() {
        let mut view = lines(&["one", "two"]);
        truncate_lines(&mut view, 0);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn coloured_cut_resets_styling() {
        let mut view = lines(&["\x1b[31mred", "plain", "more"]);
        truncate_lines(&mut view, 2);
        assert_eq!(view, lines(&["\x1b[31mred", "\x1b[0m..."]));
    }

    #[rstest]
    #[case("hello", 10, "hello")]
    #[case("hello world", 8, "hello...")]
    #[case("abcdef", 0, "")]
    #[case("abcdef", 2, "..")]
    #[case("abcdef", 3, "...")]
    #[case("你好世界", 5, "你...")]
    fn display_width_truncation(#[case] text: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(truncate_to_display_width(text, width), expected);
    }
}
