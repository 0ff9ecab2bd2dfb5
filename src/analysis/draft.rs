//! Validated review drafts ready to be sent for analysis.

use thiserror::Error;

/// Minimum number of characters a review must contain after trimming.
pub const MIN_REVIEW_CHARS: usize = 10;

/// A product review that satisfies the client-side submission rules.
///
/// Both fields are stored trimmed. Construct through [`ReviewDraft::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    product_name: String,
    review_text: String,
}

impl ReviewDraft {
    /// Validates and trims a product name and review text.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::EmptyProductName`] when the product name is blank,
    /// or [`DraftError::ReviewTooShort`] when the trimmed review has fewer than
    /// [`MIN_REVIEW_CHARS`] characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use review_analyzer::{DraftError, ReviewDraft};
    ///
    /// let draft = ReviewDraft::new(" Kettle ", "Boils fast, stays quiet.").expect("valid");
    /// assert_eq!(draft.product_name(), "Kettle");
    ///
    /// assert_eq!(
    ///     ReviewDraft::new("Kettle", "too short"),
    ///     Err(DraftError::ReviewTooShort { length: 9, minimum: 10 })
    /// );
    /// ```
    pub fn new(product_name: &str, review_text: &str) -> Result<Self, DraftError> {
        let product = product_name.trim();
        if product.is_empty() {
            return Err(DraftError::EmptyProductName);
        }

        let review = review_text.trim();
        let length = review.chars().count();
        if length < MIN_REVIEW_CHARS {
            return Err(DraftError::ReviewTooShort {
                length,
                minimum: MIN_REVIEW_CHARS,
            });
        }

        Ok(Self {
            product_name: product.to_owned(),
            review_text: review.to_owned(),
        })
    }

    /// Returns the trimmed product name.
    #[must_use]
    pub const fn product_name(&self) -> &str {
        self.product_name.as_str()
    }

    /// Returns the trimmed review text.
    #[must_use]
    pub const fn review_text(&self) -> &str {
        self.review_text.as_str()
    }
}

/// Reasons a draft cannot be submitted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    /// The product name was empty or whitespace-only.
    #[error("product name cannot be empty")]
    EmptyProductName,
    /// The review text was shorter than the minimum length.
    #[error("review text is too short ({length} characters, minimum {minimum})")]
    ReviewTooShort {
        /// Character count after trimming.
        length: usize,
        /// Required minimum character count.
        minimum: usize,
    },
}
