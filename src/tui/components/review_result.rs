//! Result card for the most recent analysis.
//!
//! Shows the analysed product, the original review text, a coloured
//! sentiment badge with its confidence, the extracted key points (one item
//! per non-blank line), and the local time the analysis was stored.

use crate::analysis::{format_confidence, format_timestamp, key_point_lines, sentiment_style};
use crate::api::Review;

use super::paint;
use super::text_wrap::wrap_text;

const SECTION_INDENT: &str = "  ";

/// Context for rendering an analysis result.
#[derive(Debug, Clone)]
pub struct ReviewResultViewContext<'a> {
    /// The stored review returned by the backend.
    pub review: &'a Review,
    /// Maximum width for wrapped text.
    pub max_width: usize,
}

/// Component for displaying one analysed review.
#[derive(Debug, Clone, Default)]
pub struct ReviewResultComponent;

impl ReviewResultComponent {
    /// Creates a new result component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the result as a list of lines.
    #[must_use]
    pub fn view(&self, ctx: &ReviewResultViewContext<'_>) -> Vec<String> {
        let review = ctx.review;
        let text_width = ctx.max_width.saturating_sub(SECTION_INDENT.len());

        let mut lines = vec![
            "Analysis Results".to_owned(),
            format!("Product: {}", review.product_name),
            String::new(),
            "Original Review".to_owned(),
        ];
        lines.extend(wrap_text(&review.review_text, text_width, SECTION_INDENT));

        lines.push(String::new());
        lines.push("Sentiment Analysis".to_owned());
        lines.push(format!("{SECTION_INDENT}{}", sentiment_badge(review)));

        lines.push(String::new());
        lines.push("Key Points".to_owned());
        for point in key_point_items(&review.key_points) {
            lines.extend(wrap_text(point, text_width, SECTION_INDENT));
        }

        lines.push(String::new());
        lines.push(format!(
            "Analyzed on {}",
            format_timestamp(&review.created_at)
        ));
        lines
    }
}

/// Returns the key points rendered as separate items.
#[must_use]
pub fn key_point_items(key_points: &str) -> Vec<&str> {
    key_point_lines(key_points)
}

fn sentiment_badge(review: &Review) -> String {
    let style = sentiment_style(&review.sentiment);
    let badge = format!(
        "{} {} {} confidence",
        style.emoji,
        review.sentiment.to_uppercase(),
        format_confidence(review.sentiment_score)
    );
    paint(style.color, &badge)
}
