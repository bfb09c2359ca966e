//! `dguide tui` — Open the interactive reader.

use clap::Args;
use dockguide_common::config::ViewerConfig;
use dockguide_tui::app::App;
use dockguide_viewer::clipboard::HostClipboard;
use dockguide_viewer::viewer::Viewer;

/// Arguments for the `tui` command.
#[derive(Args, Debug)]
pub struct TuiArgs {
    /// Topic to open immediately; defaults to the configured start topic.
    pub topic: Option<String>,
}

/// Executes the `tui` command.
///
/// # Errors
///
/// Returns an error if terminal setup or drawing fails.
pub fn execute(args: TuiArgs, config: &ViewerConfig) -> anyhow::Result<()> {
    let mut clipboard = HostClipboard::from_config(config);
    let mut app = App::new(Viewer::builtin());
    if let Some(topic) = args.topic.or_else(|| config.start_topic.clone()) {
        app.open_topic(&topic);
    }
    dockguide_tui::run(&mut app, &mut clipboard)?;
    Ok(())
}
