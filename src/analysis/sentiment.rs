//! Sentiment label presentation shared by the result card and history list.

/// Display colour assigned to a sentiment bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentColor {
    /// Positive sentiment (`#4caf50`).
    Green,
    /// Negative sentiment (`#f44336`).
    Red,
    /// Neutral sentiment (`#ff9800`).
    Orange,
    /// Unrecognised labels (`#9e9e9e`).
    Gray,
}

impl SentimentColor {
    /// Returns the colour as a CSS-style hex string.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#4caf50",
            Self::Red => "#f44336",
            Self::Orange => "#ff9800",
            Self::Gray => "#9e9e9e",
        }
    }

    /// Returns the red, green, and blue channels.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Green => (0x4c, 0xaf, 0x50),
            Self::Red => (0xf4, 0x43, 0x36),
            Self::Orange => (0xff, 0x98, 0x00),
            Self::Gray => (0x9e, 0x9e, 0x9e),
        }
    }

    /// Returns a 24-bit ANSI foreground escape sequence for this colour.
    #[must_use]
    pub fn ansi_foreground(self) -> String {
        let (red, green, blue) = self.rgb();
        format!("\x1b[38;2;{red};{green};{blue}m")
    }
}

/// Sentiment bucket derived from a server-provided label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentKind {
    /// `positive`, in any letter case.
    Positive,
    /// `negative`, in any letter case.
    Negative,
    /// `neutral`, in any letter case.
    Neutral,
    /// Any other label.
    Unknown,
}

impl SentimentKind {
    /// Classifies a label with a case-insensitive match.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            "neutral" => Self::Neutral,
            _ => Self::Unknown,
        }
    }

    /// Emoji shown next to the label.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Negative => "😞",
            Self::Neutral => "😐",
            Self::Unknown => "🤔",
        }
    }

    /// Colour used for the sentiment badge.
    #[must_use]
    pub const fn color(self) -> SentimentColor {
        match self {
            Self::Positive => SentimentColor::Green,
            Self::Negative => SentimentColor::Red,
            Self::Neutral => SentimentColor::Orange,
            Self::Unknown => SentimentColor::Gray,
        }
    }
}

/// Emoji and colour pair for one sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentStyle {
    /// Glyph displayed beside the label.
    pub emoji: &'static str,
    /// Badge colour.
    pub color: SentimentColor,
}

/// Maps a sentiment label to its display emoji and colour.
///
/// # Examples
///
/// ```
/// use review_analyzer::{SentimentColor, sentiment_style};
///
/// let style = sentiment_style("POSITIVE");
/// assert_eq!(style.emoji, "😊");
/// assert_eq!(style.color, SentimentColor::Green);
///
/// assert_eq!(sentiment_style("mixed").color, SentimentColor::Gray);
/// ```
#[must_use]
pub fn sentiment_style(label: &str) -> SentimentStyle {
    let kind = SentimentKind::from_label(label);
    SentimentStyle {
        emoji: kind.emoji(),
        color: kind.color(),
    }
}
