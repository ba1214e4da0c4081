//! Human-readable output formatting for session results.

mod terminal;

pub use terminal::{format_history, format_session};
