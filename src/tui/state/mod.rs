//! State management for the review analyzer TUI.
//!
//! This module holds the state types owned by the application model: the
//! editable review form, the active tab, and the request tokens that tie
//! asynchronous responses back to the request that produced them.

mod requests;
mod review_form;
mod tabs;

pub use requests::{RequestToken, RequestTracker};
pub use review_form::{FormField, ReviewFormState};
pub use tabs::ActiveTab;
