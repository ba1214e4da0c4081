//! Terminal output formatting for session results and history.

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::history::SessionHistory;
use crate::types::SessionResult;

/// Format one completed session for human-readable terminal output.
///
/// The threshold is shown as a percentage of the shorter screen dimension,
/// which is the unit the staircase operates in. Wording stays
/// informational; this is not a diagnostic readout.
pub fn format_session(result: &SessionResult) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}\n",
        "Session".bold(),
        format_timestamp(result.timestamp)
    ));
    output.push_str(&format!("  Trials:    {}\n", result.trials));

    let pct_of_short_side = result.threshold_norm * 100.0;
    output.push_str(&format!(
        "  Threshold: {} of the short screen side\n",
        format!("{:.2}%", pct_of_short_side).bold()
    ));
    output.push_str(&format!(
        "  {}\n",
        "3-down/1-up staircase estimate - informational use only.".dimmed()
    ));

    output
}

/// Format the whole session history, most recent first.
pub fn format_history(history: &SessionHistory) -> String {
    if history.is_empty() {
        return format!("{}\n", "No sessions recorded yet.".dimmed());
    }

    let mut output = String::new();
    for session in history.sessions() {
        output.push_str(&format_session(session));
    }
    output
}

/// Render epoch milliseconds as a UTC date-time, `YYYY-MM-DD HH:MM`.
fn format_timestamp(epoch_millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(epoch_millis) {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M").to_string(),
        None => format!("@{epoch_millis}ms"),
    }
}
