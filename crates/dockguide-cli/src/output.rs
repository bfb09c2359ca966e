//! Formatted output helpers for CLI commands.
//!
//! Provides the text/JSON output switch and the topic listing table.

use clap::ValueEnum;
use dockguide_content::registry::TopicSummary;
use serde::Serialize;

/// Output format for commands that print data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Serializes `value` as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Formats topic rows as an aligned table with a header.
#[must_use]
pub fn format_listing(rows: &[TopicSummary]) -> String {
    let key_width = rows
        .iter()
        .map(|row| row.key.as_str().len())
        .max()
        .unwrap_or(0)
        .max("TOPIC".len());
    let mut out = format!(
        "{:<key_width$}  {:<12}  {:<11}  {:<4}  {}\n",
        "TOPIC", "DIFFICULTY", "DURATION", "CODE", "TITLE"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<key_width$}  {:<12}  {:<11}  {:<4}  {}\n",
            row.key.as_str(),
            row.difficulty.label(),
            row.duration,
            if row.has_code { "yes" } else { "no" },
            row.title
        ));
    }
    out
}
