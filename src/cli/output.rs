//! Output formatting utilities for CLI operations.
//!
//! The one-shot modes print plain text without colour so their output can be
//! piped and grepped. Sentiment glyphs, excerpt truncation, and key point
//! previews match the TUI.

use std::io::{self, Write};

use review_analyzer::analysis::{
    EXCERPT_MAX_CHARS, format_confidence, format_date, format_timestamp, key_point_lines,
    sentiment_style, truncate_excerpt,
};
use review_analyzer::tui::components::{EMPTY_HISTORY_PLACEHOLDER, key_point_preview};
use review_analyzer::{ApiError, HealthStatus, Review};

/// Writes one analysed review to the given writer.
///
/// # Errors
///
/// Returns [`ApiError::Io`] when writing fails.
pub fn write_review_result<W: Write>(writer: &mut W, review: &Review) -> Result<(), ApiError> {
    let style = sentiment_style(&review.sentiment);

    writeln!(writer, "Product: {}", review.product_name).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Sentiment: {} {} ({} confidence)",
        style.emoji,
        review.sentiment.to_uppercase(),
        format_confidence(review.sentiment_score)
    )
    .map_err(|e| io_error(&e))?;

    writeln!(writer, "Key points:").map_err(|e| io_error(&e))?;
    for point in key_point_lines(&review.key_points) {
        writeln!(writer, "  {point}").map_err(|e| io_error(&e))?;
    }

    writeln!(
        writer,
        "Analyzed on {}",
        format_timestamp(&review.created_at)
    )
    .map_err(|e| io_error(&e))
}

/// Writes the review history as cards to the given writer.
///
/// # Errors
///
/// Returns [`ApiError::Io`] when writing fails.
pub fn write_history<W: Write>(writer: &mut W, reviews: &[Review]) -> Result<(), ApiError> {
    if reviews.is_empty() {
        return writeln!(writer, "{EMPTY_HISTORY_PLACEHOLDER}").map_err(|e| io_error(&e));
    }

    writeln!(writer, "Review history ({} reviews):", reviews.len()).map_err(|e| io_error(&e))?;
    for review in reviews {
        writeln!(writer).map_err(|e| io_error(&e))?;
        write_history_card(writer, review)?;
    }
    Ok(())
}

fn write_history_card<W: Write>(writer: &mut W, review: &Review) -> Result<(), ApiError> {
    let style = sentiment_style(&review.sentiment);
    writeln!(
        writer,
        "#{} {} [{} {}] {}",
        review.id,
        review.product_name,
        style.emoji,
        review.sentiment,
        format_date(&review.created_at)
    )
    .map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "  {}",
        truncate_excerpt(&review.review_text, EXCERPT_MAX_CHARS)
    )
    .map_err(|e| io_error(&e))?;

    let (points, has_more) = key_point_preview(&review.key_points);
    for point in points {
        writeln!(writer, "    {point}").map_err(|e| io_error(&e))?;
    }
    if has_more {
        writeln!(writer, "    + more...").map_err(|e| io_error(&e))?;
    }

    writeln!(
        writer,
        "  Confidence: {}",
        format_confidence(review.sentiment_score)
    )
    .map_err(|e| io_error(&e))
}

/// Writes the backend health report to the given writer.
///
/// # Errors
///
/// Returns [`ApiError::Io`] when writing fails.
pub fn write_health<W: Write>(writer: &mut W, status: &HealthStatus) -> Result<(), ApiError> {
    writeln!(writer, "Status: {}", status.status).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Sentiment analyzer: {}",
        if status.sentiment_analyzer { "ready" } else { "not loaded" }
    )
    .map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Gemini configured: {}",
        if status.gemini_configured { "yes" } else { "no" }
    )
    .map_err(|e| io_error(&e))
}

/// Converts an I/O error to an [`ApiError::Io`].
pub(crate) fn io_error(error: &io::Error) -> ApiError {
    ApiError::Io {
        message: error.to_string(),
    }
}
