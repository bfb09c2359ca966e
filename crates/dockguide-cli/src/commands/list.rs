//! `dguide list` — List tutorial topics.

use clap::Args;
use dockguide_common::types::Difficulty;
use dockguide_content::registry::{Registry, TopicSummary, summarize};

use crate::output::{self, OutputFormat};

/// Arguments for the `list` command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show topics at this difficulty.
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Only show topics whose key, title, or description contains this text.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Selects the listing rows matching `args`.
#[must_use]
pub fn select(registry: &Registry, args: &ListArgs) -> Vec<TopicSummary> {
    registry
        .search(args.search.as_deref().unwrap_or_default())
        .filter(|(_, record)| args.difficulty.is_none_or(|level| record.difficulty == level))
        .map(|(key, record)| summarize(key, record))
        .collect()
}

/// Executes the `list` command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(args: &ListArgs) -> anyhow::Result<()> {
    let rows = select(Registry::builtin(), args);
    tracing::info!(topics = rows.len(), "listing topics");

    match args.format {
        OutputFormat::Json => println!("{}", output::to_json(&rows)?),
        OutputFormat::Text if rows.is_empty() => println!("No topics found."),
        OutputFormat::Text => print!("{}", output::format_listing(&rows)),
    }
    Ok(())
}
