//! # dockguide-tui
//!
//! Interactive terminal reader for dockguide tutorials.
//!
//! Built with `ratatui` and `crossterm`, providing:
//! - A topic list with difficulty, reading time, and completion marks.
//! - A scrollable reader for the selected topic's page.
//! - Copying the topic's code sample with a single key.

pub mod app;
pub mod event;
pub mod ui;

use std::time::Duration;

use dockguide_viewer::clipboard::Clipboard;
use ratatui::DefaultTerminal;
use thiserror::Error;

use crate::app::App;
use crate::event::{EventSource, TerminalEvent};

/// How often the reader redraws without input.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Errors raised while driving the terminal.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Terminal I/O failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs the reader until the user quits.
///
/// The terminal is restored before returning, even on error.
///
/// # Errors
///
/// Returns an error if drawing or reading terminal events fails.
pub fn run(app: &mut App<'_>, clipboard: &mut dyn Clipboard) -> Result<(), TuiError> {
    tracing::info!("starting interactive reader");
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, app, clipboard);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App<'_>,
    clipboard: &mut dyn Clipboard,
) -> Result<(), TuiError> {
    let events = EventSource::new(TICK_RATE);
    while app.running {
        app.resize(terminal.size()?);
        let _ = terminal.draw(|frame| ui::render(frame, app))?;
        match events.next()? {
            TerminalEvent::Key(key) => app.handle_key(key, clipboard),
            TerminalEvent::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
            }
            TerminalEvent::Tick => {}
        }
    }
    Ok(())
}
