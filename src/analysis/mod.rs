//! Client-side review rules and presentation helpers.
//!
//! Everything in this module is pure: draft validation before a review is
//! sent for analysis, the sentiment label to emoji/colour mapping shared by
//! every view, and the text formatting applied to server records.

pub mod draft;
pub mod format;
pub mod sentiment;

pub use draft::{DraftError, MIN_REVIEW_CHARS, ReviewDraft};
pub use format::{
    EXCERPT_MAX_CHARS, format_confidence, format_date, format_timestamp, key_point_lines,
    truncate_excerpt,
};
pub use sentiment::{SentimentColor, SentimentKind, SentimentStyle, sentiment_style};
