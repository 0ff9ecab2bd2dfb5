//! Review form rendering.
//!
//! Draws the product name and review text fields with a focus marker, the
//! live character counter, and the submit hint. The hint is dimmed when the
//! form cannot be submitted and replaced by `Analyzing...` while a request
//! is running.

use crate::analysis::MIN_REVIEW_CHARS;
use crate::tui::state::{FormField, ReviewFormState};

use super::text_wrap::wrap_text;

const PRODUCT_PLACEHOLDER: &str = "Enter product name...";
const REVIEW_PLACEHOLDER: &str = "Enter your product review here... (minimum 10 characters)";
const FIELD_INDENT: &str = "    ";
const CURSOR: char = '_';
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Context for rendering the review form.
#[derive(Debug, Clone)]
pub struct ReviewFormViewContext<'a> {
    /// Current field contents and focus.
    pub form: &'a ReviewFormState,
    /// Whether an analysis is in flight.
    pub loading: bool,
    /// Maximum width for wrapped text.
    pub max_width: usize,
}

/// Component for displaying the review form.
#[derive(Debug, Clone, Default)]
pub struct ReviewFormComponent;

impl ReviewFormComponent {
    /// Creates a new form component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the form as a list of lines.
    #[must_use]
    pub fn view(&self, ctx: &ReviewFormViewContext<'_>) -> Vec<String> {
        let form = ctx.form;
        let text_width = ctx.max_width.saturating_sub(FIELD_INDENT.len());

        let mut lines = vec!["Submit Your Product Review".to_owned(), String::new()];

        lines.push(field_label(
            "Product Name",
            form.focus() == FormField::ProductName,
            ctx.loading,
        ));
        lines.push(format!(
            "{FIELD_INDENT}{}",
            field_value(
                form.product_name(),
                PRODUCT_PLACEHOLDER,
                is_editing(ctx, FormField::ProductName)
            )
        ));
        lines.push(String::new());

        lines.push(field_label("Review Text", form.focus() == FormField::ReviewText, ctx.loading));
        let review = field_value(
            form.review_text(),
            REVIEW_PLACEHOLDER,
            is_editing(ctx, FormField::ReviewText),
        );
        lines.extend(wrap_text(&review, text_width, FIELD_INDENT));
        lines.push(format!(
            "{FIELD_INDENT}{} characters",
            form.review_char_count()
        ));
        lines.push(String::new());

        lines.push(submit_hint(form, ctx.loading));
        lines
    }
}

fn is_editing(ctx: &ReviewFormViewContext<'_>, field: FormField) -> bool {
    !ctx.loading && ctx.form.focus() == field
}

fn field_label(label: &str, focused: bool, loading: bool) -> String {
    let marker = if focused && !loading { ">" } else { " " };
    format!("{marker} {label}:")
}

fn field_value(value: &str, placeholder: &str, editing: bool) -> String {
    if value.is_empty() {
        let cursor = if editing { CURSOR.to_string() } else { String::new() };
        return format!("{cursor}{DIM}{placeholder}{RESET}");
    }

    if editing {
        format!("{value}{CURSOR}")
    } else {
        value.to_owned()
    }
}

fn submit_hint(form: &ReviewFormState, loading: bool) -> String {
    if loading {
        return "  Analyzing...".to_owned();
    }

    if form.can_submit(false) {
        "  [Ctrl+S] Analyze Review".to_owned()
    } else {
        format!(
            "  {DIM}[Ctrl+S] Analyze Review (needs a product name and {MIN_REVIEW_CHARS}+ characters){RESET}"
        )
    }
}
