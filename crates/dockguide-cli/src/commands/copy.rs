//! `dguide copy` — Copy a topic's code sample to the clipboard.

use std::io::Write;

use clap::Args;
use dockguide_common::config::ViewerConfig;
use dockguide_common::error::{GuideError, Result};
use dockguide_viewer::clipboard::{Clipboard, CommandClipboard};
use dockguide_viewer::viewer::Viewer;

/// Arguments for the `copy` command.
#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Topic key whose code sample is copied.
    pub topic: String,

    /// Write the code to stdout instead of the system clipboard.
    #[arg(long)]
    pub stdout: bool,
}

/// Writes copied text to standard output unchanged.
struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|source| GuideError::Io {
                path: "<stdout>".into(),
                source,
            })
    }
}

/// Executes the `copy` command.
///
/// # Errors
///
/// Returns an error if the topic is unknown, has no code sample, no
/// clipboard helper is available, or the clipboard rejects the text.
pub fn execute(args: &CopyArgs, config: &ViewerConfig) -> anyhow::Result<()> {
    let viewer = Viewer::builtin();
    let Some(record) = viewer.registry().lookup(&args.topic) else {
        return Err(GuideError::NotFound {
            kind: "topic",
            id: args.topic.clone(),
        }
        .into());
    };
    if record.code_example.is_none() {
        anyhow::bail!("topic '{}' has no code sample", args.topic);
    }

    let mut clipboard: Box<dyn Clipboard> = if args.stdout {
        Box::new(StdoutClipboard)
    } else {
        Box::new(CommandClipboard::from_config(config)?)
    };
    if viewer.copy_code(&args.topic, clipboard.as_mut()) != Some(true) {
        anyhow::bail!("clipboard rejected the code sample for '{}'", args.topic);
    }
    if !args.stdout {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Copied code sample for '{}'.", args.topic);
        }
    }
    Ok(())
}
