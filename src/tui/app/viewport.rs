//! Frame normalisation to the terminal size.
//!
//! Rows shorter than a previous frame would leave stale cells behind, so
//! every row is padded to the terminal width and the frame is padded to the
//! terminal height. Rows are clamped one column short of the width to avoid
//! terminal autowrap. Colour sequences pass through without counting towards
//! the width.

use unicode_width::UnicodeWidthChar;

use super::AnalyzerApp;

const ESCAPE: char = '\x1b';
const ANSI_RESET: &str = "\x1b[0m";

impl AnalyzerApp {
    /// Pads or clips `lines` to exactly the terminal height and width.
    pub(super) fn normalise_viewport(&self, lines: &[String]) -> String {
        let width = usize::from(self.width.max(1));
        let safe_width = width.saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut rows: Vec<String> = lines
            .iter()
            .flat_map(|line| line.split('\n'))
            .take(height)
            .map(|line| fit_row(line, safe_width))
            .collect();

        let blank = " ".repeat(safe_width);
        rows.resize(height, blank);

        let mut frame = rows.join("\n");
        frame.push('\n');
        frame
    }
}

/// Clips `line` to `width` visible columns and pads it with spaces.
///
/// Escape sequences are copied verbatim; a reset is appended when the row
/// is left styled.
fn fit_row(line: &str, width: usize) -> String {
    let mut row = String::with_capacity(line.len() + width);
    let mut used = 0_usize;
    let mut in_escape = false;
    let mut styled = false;

    for ch in line.chars() {
        if in_escape {
            row.push(ch);
            if ch.is_ascii_alphabetic() {
                in_escape = false;
                styled = !row.ends_with(ANSI_RESET);
            }
            continue;
        }
        if ch == ESCAPE {
            in_escape = true;
            row.push(ch);
            continue;
        }

        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(ch_width) > width {
            break;
        }
        row.push(ch);
        used = used.saturating_add(ch_width);
    }

    if styled || in_escape {
        row.push_str(ANSI_RESET);
    }
    row.push_str(&" ".repeat(width.saturating_sub(used)));
    row
}
