//! Editable review form state.
//!
//! The form holds the product name and review text while the user types.
//! Submission is only possible when the contents form a valid
//! [`ReviewDraft`] and no analysis is running; a successful submission clears
//! both fields straight away without waiting for the analysis result.

use crate::analysis::ReviewDraft;

/// Input field that currently receives typed characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    /// Single-line product name.
    #[default]
    ProductName,
    /// Multi-line review text.
    ReviewText,
}

impl FormField {
    const fn other(self) -> Self {
        match self {
            Self::ProductName => Self::ReviewText,
            Self::ReviewText => Self::ProductName,
        }
    }
}

/// Local state of the review form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFormState {
    product_name: String,
    review_text: String,
    focus: FormField,
}

impl ReviewFormState {
    /// Creates an empty form focused on the product name.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            product_name: String::new(),
            review_text: String::new(),
            focus: FormField::ProductName,
        }
    }

    /// Returns the product name as typed.
    #[must_use]
    pub const fn product_name(&self) -> &str {
        self.product_name.as_str()
    }

    /// Returns the review text as typed.
    #[must_use]
    pub const fn review_text(&self) -> &str {
        self.review_text.as_str()
    }

    /// Returns the focused field.
    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    /// Returns the live character count of the review text.
    ///
    /// Counts Unicode scalar values of the untrimmed text.
    #[must_use]
    pub fn review_char_count(&self) -> usize {
        self.review_text.chars().count()
    }

    /// Appends a character to the focused field.
    ///
    /// Newlines are only accepted by the review text.
    pub fn insert_char(&mut self, character: char) {
        match self.focus {
            FormField::ProductName if character == '\n' => self.focus = FormField::ReviewText,
            FormField::ProductName => self.product_name.push(character),
            FormField::ReviewText => self.review_text.push(character),
        }
    }

    /// Handles Enter: moves from the product name to the review text, or
    /// starts a new line inside the review text.
    pub fn newline(&mut self) {
        self.insert_char('\n');
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        let field = match self.focus {
            FormField::ProductName => &mut self.product_name,
            FormField::ReviewText => &mut self.review_text,
        };
        let _removed = field.pop();
    }

    /// Moves focus to the other field.
    pub const fn toggle_focus(&mut self) {
        self.focus = self.focus.other();
    }

    /// Returns `true` when submission is currently allowed.
    #[must_use]
    pub fn can_submit(&self, loading: bool) -> bool {
        !loading && ReviewDraft::new(&self.product_name, &self.review_text).is_ok()
    }

    /// Validates the form and, when valid, clears it and returns the draft.
    ///
    /// Returns `None` without touching the fields when an analysis is
    /// running or the contents are invalid.
    pub fn submit(&mut self, loading: bool) -> Option<ReviewDraft> {
        if loading {
            return None;
        }

        let draft = ReviewDraft::new(&self.product_name, &self.review_text).ok()?;
        self.clear();
        Some(draft)
    }

    /// Empties both fields and returns focus to the product name.
    pub fn clear(&mut self) {
        self.product_name.clear();
        self.review_text.clear();
        self.focus = FormField::ProductName;
    }
}
