//! `dguide show` — Print a topic page.

use clap::Args;
use dockguide_common::config::ViewerConfig;
use dockguide_common::constants::MIN_WIDTH;
use dockguide_viewer::format;
use dockguide_viewer::viewer::Viewer;

use crate::output::{self, OutputFormat};

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Topic key, e.g. `install-mac`. Unknown keys show a placeholder page.
    pub topic: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Wrap width for text output; overrides the configured width.
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(i64::from(MIN_WIDTH)..))]
    pub width: Option<u16>,
}

/// Executes the `show` command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(args: &ShowArgs, config: &ViewerConfig) -> anyhow::Result<()> {
    let page = Viewer::builtin().render(&args.topic);
    if page.is_coming_soon() {
        tracing::info!(topic = %args.topic, "no content for topic");
    }

    match args.format {
        OutputFormat::Json => println!("{}", output::to_json(&page)?),
        OutputFormat::Text => {
            let width = args.width.unwrap_or(config.width);
            print!("{}", format::plain_text(&page, width));
        }
    }
    Ok(())
}
