//! History list rendering stored reviews as cards.
//!
//! Each card shows the sentiment with its date, the product name, an excerpt
//! of the review, a preview of the key points, and the confidence score.
//! Cards are rendered whole; scrolling moves by card.

use crate::analysis::{
    EXCERPT_MAX_CHARS, format_confidence, format_date, key_point_lines, sentiment_style,
    truncate_excerpt,
};
use crate::api::Review;

use super::paint;
use super::text_wrap::wrap_text;

/// Message shown when there is no history yet.
pub const EMPTY_HISTORY_PLACEHOLDER: &str = "No reviews yet. Start by analyzing your first review!";

/// Number of key points previewed on each card.
pub const KEY_POINT_PREVIEW_COUNT: usize = 2;

const CARD_INDENT: &str = "  ";

/// Context for rendering the history list.
#[derive(Debug, Clone)]
pub struct ReviewsListViewContext<'a> {
    /// Reviews in server order.
    pub reviews: &'a [Review],
    /// Index of the first card to show.
    pub scroll_offset: usize,
    /// Maximum width for wrapped text.
    pub max_width: usize,
}

/// Component for displaying the review history.
#[derive(Debug, Clone, Default)]
pub struct ReviewsListComponent;

impl ReviewsListComponent {
    /// Creates a new history list component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the list as lines, starting at the scrolled-to card.
    #[must_use]
    pub fn view(&self, ctx: &ReviewsListViewContext<'_>) -> Vec<String> {
        let mut lines = vec![format!("Review History ({})", ctx.reviews.len())];
        lines.push(String::new());

        if ctx.reviews.is_empty() {
            lines.push(format!("{CARD_INDENT}{EMPTY_HISTORY_PLACEHOLDER}"));
            return lines;
        }

        let text_width = ctx.max_width.saturating_sub(CARD_INDENT.len());
        for review in ctx.reviews.iter().skip(ctx.scroll_offset) {
            lines.extend(render_card(review, text_width));
            lines.push(String::new());
        }
        lines
    }
}

/// Returns the key points previewed on a card and whether more exist.
#[must_use]
pub fn key_point_preview(key_points: &str) -> (Vec<&str>, bool) {
    let mut points = key_point_lines(key_points);
    let has_more = points.len() > KEY_POINT_PREVIEW_COUNT;
    points.truncate(KEY_POINT_PREVIEW_COUNT);
    (points, has_more)
}

fn render_card(review: &Review, text_width: usize) -> Vec<String> {
    let style = sentiment_style(&review.sentiment);
    let indicator = paint(style.color, &format!("{} {}", style.emoji, review.sentiment));

    let mut lines = vec![
        format!("{indicator}  {}", format_date(&review.created_at)),
        format!("{CARD_INDENT}{}", review.product_name),
    ];

    let excerpt = truncate_excerpt(&review.review_text, EXCERPT_MAX_CHARS);
    lines.extend(wrap_text(&excerpt, text_width, CARD_INDENT));

    lines.push(format!("{CARD_INDENT}Key Points:"));
    let (points, has_more) = key_point_preview(&review.key_points);
    for point in points {
        lines.push(format!("{CARD_INDENT}{CARD_INDENT}{point}"));
    }
    if has_more {
        lines.push(format!("{CARD_INDENT}{CARD_INDENT}+ more..."));
    }

    lines.push(format!(
        "{CARD_INDENT}Confidence: {}",
        format_confidence(review.sentiment_score)
    ));
    lines
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::tui::components::test_utils::{sample_review, strip_ansi_codes};

    #[fixture]
    fn reviews() -> Vec<Review> {
        vec![
            sample_review(1, "Kettle", "Boils water quickly", "positive"),
            sample_review(2, "Toaster", "Burns every slice", "negative"),
        ]
    }

    fn render(reviews: &[Review], scroll_offset: usize) -> String {
        let component = ReviewsListComponent::new();
        let ctx = ReviewsListViewContext {
            reviews,
            scroll_offset,
            max_width: 0,
        };
        strip_ansi_codes(&component.view(&ctx).join("\n"))
    }

    #[test]
    fn empty_history_shows_placeholder() {
        let output = render(&[], 0);
        assert!(output.contains(EMPTY_HISTORY_PLACEHOLDER));
        assert!(output.contains("Review History (0)"));
    }

    #[rstest]
    fn renders_a_card_per_review(reviews: Vec<Review>) {
        let output = render(&reviews, 0);
        assert!(output.contains("Review History (2)"));
        assert!(output.contains("😊 positive"));
        assert!(output.contains("😞 negative"));
        assert!(output.contains("  Kettle"));
        assert!(output.contains("  Toaster"));
        assert!(!output.contains(EMPTY_HISTORY_PLACEHOLDER));
    }

    #[rstest]
    #[case::exactly_150(150, false)]
    #[case::over_150(151, true)]
    fn excerpt_truncates_after_150_characters(#[case] length: usize, #[case] truncated: bool) {
        let text = "x".repeat(length);
        let review = sample_review(1, "Blender", &text, "neutral");
        let output = render(&[review], 0);

        let expected = if truncated {
            format!("  {}...", "x".repeat(150))
        } else {
            format!("  {text}")
        };
        assert!(
            output.lines().any(|line| line == expected),
            "excerpt line not found in:\n{output}"
        );
    }

    #[test]
    fn preview_keeps_two_key_points_and_flags_more() {
        let (points, has_more) = key_point_preview("Good battery\nPoor screen\nCheap build");
        assert_eq!(points, vec!["Good battery", "Poor screen"]);
        assert!(has_more);
    }

    #[test]
    fn preview_without_extra_points_has_no_indicator() {
        let (points, has_more) = key_point_preview("Good battery\n\nPoor screen\n");
        assert_eq!(points.len(), 2);
        assert!(!has_more);
    }

    #[rstest]
    fn card_shows_two_key_points_and_more_indicator(reviews: Vec<Review>) {
        let output = render(reviews.get(..1).unwrap_or_default(), 0);
        assert!(output.contains("Good battery"));
        assert!(output.contains("Poor screen"));
        assert!(!output.contains("Cheap build"));
        assert!(output.contains("+ more..."));
    }

    #[rstest]
    fn card_shows_confidence(reviews: Vec<Review>) {
        let output = render(reviews.get(..1).unwrap_or_default(), 0);
        assert!(output.contains("Confidence: 87.3%"));
    }

    #[rstest]
    fn card_shows_unknown_sentiment_with_fallback_glyph() {
        let review = sample_review(3, "Lamp", "It is a lamp, I suppose", "mixed");
        let output = render(&[review], 0);
        assert!(output.contains("🤔 mixed"));
    }

    #[rstest]
    fn scroll_offset_skips_leading_cards(reviews: Vec<Review>) {
        let output = render(&reviews, 1);
        assert!(!output.contains("  Kettle"));
        assert!(output.contains("  Toaster"));
        assert!(output.contains("Review History (2)"), "count covers all reviews");
    }
}
