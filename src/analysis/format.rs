//! Text formatting applied to review records before display.

use std::borrow::Cow;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Maximum number of characters shown in a history card excerpt.
pub const EXCERPT_MAX_CHARS: usize = 150;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Truncates `text` to `max_chars` characters and appends `...` when cut.
///
/// The cut is made at a character boundary, not at a word boundary. Text of
/// exactly `max_chars` characters is returned unchanged.
///
/// # Examples
///
/// ```
/// use review_analyzer::analysis::truncate_excerpt;
///
/// assert_eq!(truncate_excerpt("abcdef", 3), "abc...");
/// assert_eq!(truncate_excerpt("abc", 3), "abc");
/// ```
#[must_use]
pub fn truncate_excerpt(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => {
            let kept = text.get(..byte_index).unwrap_or(text);
            Cow::Owned(format!("{kept}..."))
        }
        None => Cow::Borrowed(text),
    }
}

/// Splits newline-delimited key points, discarding blank lines.
///
/// Lines are returned as written (apart from a trailing carriage return);
/// bullet markers supplied by the server are kept.
#[must_use]
pub fn key_point_lines(key_points: &str) -> Vec<&str> {
    key_points
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Formats a `[0, 1]` score as a percentage with one decimal place.
///
/// # Examples
///
/// ```
/// use review_analyzer::analysis::format_confidence;
///
/// assert_eq!(format_confidence(0.9534), "95.3%");
/// assert_eq!(format_confidence(1.0), "100.0%");
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "scores are fractions that must be scaled for display"
)]
pub fn format_confidence(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Formats a server timestamp as a local date and time.
///
/// Unparseable timestamps are returned verbatim.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// Formats a server timestamp as a local calendar date.
///
/// Unparseable timestamps are returned verbatim.
#[must_use]
pub fn format_date(raw: &str) -> String {
    format_date_in(raw, &Local)
}

pub(crate) fn format_timestamp_in<Tz>(raw: &str, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    parse_timestamp(raw).map_or_else(
        || raw.to_owned(),
        |instant| {
            instant
                .with_timezone(zone)
                .format(TIMESTAMP_FORMAT)
                .to_string()
        },
    )
}

pub(crate) fn format_date_in<Tz>(raw: &str, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    parse_timestamp(raw).map_or_else(
        || raw.to_owned(),
        |instant| instant.with_timezone(zone).format(DATE_FORMAT).to_string(),
    )
}

/// Parses RFC 3339 timestamps and offset-less ISO 8601 timestamps.
///
/// The backend records creation times in UTC without an offset, so naive
/// values are read as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(trimmed, NAIVE_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
