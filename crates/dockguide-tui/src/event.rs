//! Terminal event handling.
//!
//! Captures keyboard and resize events from the terminal and hands them
//! to the application state machine.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

/// Terminal input events.
#[derive(Debug, Clone)]
pub enum TerminalEvent {
    /// A key was pressed.
    Key(crossterm::event::KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// No input arrived within the tick interval.
    Tick,
}

/// Blocking source of terminal events.
#[derive(Debug, Clone, Copy)]
pub struct EventSource {
    tick_rate: Duration,
}

impl EventSource {
    /// Creates a source that yields [`TerminalEvent::Tick`] after `tick_rate`
    /// without input.
    #[must_use]
    pub const fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event.
    ///
    /// Key releases and repeats are folded into ticks so each press is
    /// handled once.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be polled or read.
    pub fn next(&self) -> io::Result<TerminalEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(TerminalEvent::Tick);
        }
        Ok(match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => TerminalEvent::Key(key),
            Event::Resize(width, height) => TerminalEvent::Resize(width, height),
            _ => TerminalEvent::Tick,
        })
    }
}
