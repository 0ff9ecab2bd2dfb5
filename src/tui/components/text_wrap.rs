//! Word wrapping for prose shown in the terminal.
//!
//! Widths are measured in terminal columns so emoji and CJK text wrap at the
//! same visual edge as ASCII. Existing line breaks are kept; words longer
//! than a full line are split across lines.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps `text` to `max_width` columns, prefixing every output line with
/// `indent`.
///
/// The indent does not count towards `max_width`. A zero width disables
/// wrapping but still applies the indent. Blank input lines are preserved
/// as bare indents so paragraph breaks survive.
#[must_use]
pub fn wrap_text(text: &str, max_width: usize, indent: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .flat_map(|line| wrap_line(line, max_width))
        .map(|line| format!("{indent}{line}"))
        .collect()
}

fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || line.width() <= max_width {
        return vec![line.trim_end().to_owned()];
    }

    let mut builder = LineBuilder::new(max_width);
    for word in line.split_whitespace() {
        builder.push_word(word);
    }
    builder.finish()
}

/// Accumulates words into lines no wider than `max_width`.
struct LineBuilder {
    max_width: usize,
    lines: Vec<String>,
    current: String,
    current_width: usize,
}

impl LineBuilder {
    const fn new(max_width: usize) -> Self {
        Self {
            max_width,
            lines: Vec::new(),
            current: String::new(),
            current_width: 0,
        }
    }

    fn push_word(&mut self, word: &str) {
        let word_width = word.width();

        if self.current_width > 0 && self.current_width + 1 + word_width > self.max_width {
            self.break_line();
        }

        if word_width > self.max_width {
            self.push_long_word(word);
            return;
        }

        if self.current_width > 0 {
            self.current.push(' ');
            self.current_width += 1;
        }
        self.current.push_str(word);
        self.current_width += word_width;
    }

    fn push_long_word(&mut self, word: &str) {
        for ch in word.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if self.current_width + ch_width > self.max_width {
                self.break_line();
            }
            self.current.push(ch);
            self.current_width += ch_width;
        }
    }

    fn break_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.current_width = 0;
    }

    fn finish(mut self) -> Vec<String> {
        if self.current_width > 0 || self.lines.is_empty() {
            self.lines.push(self.current);
        }
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use unicode_width::UnicodeWidthStr;

    use super::wrap_text;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(wrap_text("Great kettle", 40, ""), vec!["Great kettle"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("The battery lasts two full days of heavy use", 16, "");
        assert_eq!(
            lines,
            vec!["The battery", "lasts two full", "days of heavy", "use"]
        );
    }

    #[test]
    fn applies_indent_to_every_line() {
        let lines = wrap_text("one two three", 7, "  ");
        assert_eq!(lines, vec!["  one two", "  three"]);
    }

    #[test]
    fn keeps_explicit_line_breaks_and_blank_lines() {
        let lines = wrap_text("first\n\nsecond", 40, "> ");
        assert_eq!(lines, vec!["> first", "> ", "> second"]);
    }

    #[test]
    fn splits_words_longer_than_the_width() {
        let lines = wrap_text("abcdefghij", 4, "");
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[rstest]
    #[case("这个水壶烧水很快但是盖子很薄", 6)]
    #[case("🎉🎉🎉🎉🎉🎉🎉🎉", 5)]
    fn wide_characters_respect_column_width(#[case] text: &str, #[case] width: usize) {
        for line in wrap_text(text, width, "") {
            assert!(line.width() <= width, "line '{line}' exceeds {width} columns");
        }
    }

    #[test]
    fn zero_width_disables_wrapping() {
        let text = "a fairly long line of review text";
        assert_eq!(wrap_text(text, 0, ""), vec![text]);
    }
}
