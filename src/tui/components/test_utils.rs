//! Test utilities for TUI component tests.
//!
//! Provides helpers shared by the component and application test modules.

use crate::api::Review;

/// Strips ANSI CSI escape sequences such as colour codes from a string.
///
/// # Example
///
/// ```
/// use review_analyzer::tui::components::test_utils::strip_ansi_codes;
///
/// let colored = "\x1b[38;2;76;175;80mpositive\x1b[0m";
/// assert_eq!(strip_ansi_codes(colored), "positive");
/// ```
#[must_use]
pub fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\x1b' {
            result.push(ch);
            continue;
        }

        if chars.peek() == Some(&'[') {
            let _bracket = chars.next();
        }
        // Parameters and intermediates run until the final alphabetic byte.
        for terminator in chars.by_ref() {
            if terminator.is_ascii_alphabetic() {
                break;
            }
        }
    }

    result
}

/// Builds a stored review with the given text fields and fixed metadata.
///
/// The score is `0.873` and the timestamp is `2024-03-05T14:30:00Z`.
#[must_use]
pub fn sample_review(id: u64, product_name: &str, review_text: &str, sentiment: &str) -> Review {
    Review {
        id,
        product_name: product_name.to_owned(),
        review_text: review_text.to_owned(),
        sentiment: sentiment.to_owned(),
        sentiment_score: 0.873,
        key_points: "Good battery\nPoor screen\nCheap build".to_owned(),
        created_at: "2024-03-05T14:30:00Z".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_truecolor_codes() {
        let input = "\x1b[38;2;244;67;54mnegative\x1b[0m";
        assert_eq!(strip_ansi_codes(input), "negative");
    }

    #[test]
    fn strips_multiple_codes() {
        let input = "\x1b[1m\x1b[31mbold red\x1b[0m";
        assert_eq!(strip_ansi_codes(input), "bold red");
    }

    #[test]
    fn preserves_plain_text_and_emoji() {
        let input = "😊 plain text";
        assert_eq!(strip_ansi_codes(input), input);
    }

    #[test]
    fn handles_codes_at_boundaries() {
        assert_eq!(strip_ansi_codes("\x1b[31m\x1b[0m"), "");
    }

    #[test]
    fn sample_review_has_three_key_points() {
        let review = sample_review(7, "Phone", "Great phone overall", "positive");
        assert_eq!(review.key_points.lines().count(), 3);
        assert_eq!(review.id, 7);
    }
}
