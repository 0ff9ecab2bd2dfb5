//! Tab selection for the two top-level views.

/// The view currently shown in the main area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveTab {
    /// Review form and latest analysis result.
    #[default]
    Analyze,
    /// Previously analysed reviews.
    History,
}

impl ActiveTab {
    /// Returns the other tab.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Analyze => Self::History,
            Self::History => Self::Analyze,
        }
    }

    /// Returns the tab title shown in the tab bar.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Analyze => "Analyze Review",
            Self::History => "Review History",
        }
    }

    /// Returns the function key that selects this tab.
    #[must_use]
    pub const fn shortcut(self) -> &'static str {
        match self {
            Self::Analyze => "F1",
            Self::History => "F2",
        }
    }
}
