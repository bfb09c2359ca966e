//! Reader application state machine.
//!
//! Tracks the current view, the topic selection, the open page, and
//! session-only completion marks. Key handling lives here so it can be
//! tested without a terminal.

use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dockguide_viewer::clipboard::Clipboard;
use dockguide_viewer::page::Page;
use dockguide_viewer::viewer::Viewer;
use ratatui::layout::Size;

use crate::ui;
use crate::ui::reader::{page_lines, wrapped_height};

/// Lines moved by Page Up / Page Down.
const PAGE_STEP: u16 = 10;

/// Which view the reader is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// List of all topics.
    TopicList,
    /// A single topic page.
    Reader,
}

/// Root application state for the reader.
#[derive(Debug)]
pub struct App<'r> {
    /// Whether the app should continue running.
    pub running: bool,
    /// Current active view.
    pub current_view: View,
    /// Index of the highlighted topic in the list.
    pub selected_index: usize,
    /// First visible line of the open page.
    pub scroll: u16,
    viewer: Viewer<'r>,
    keys: Vec<&'static str>,
    open: Option<(String, Page)>,
    frame_size: Size,
    max_scroll: u16,
    completed: BTreeSet<&'static str>,
    status: Option<String>,
}

impl<'r> App<'r> {
    /// Creates the reader state showing the topic list.
    #[must_use]
    pub fn new(viewer: Viewer<'r>) -> Self {
        let keys = viewer.registry().keys().collect();
        Self {
            running: true,
            current_view: View::TopicList,
            selected_index: 0,
            scroll: 0,
            viewer,
            keys,
            open: None,
            frame_size: Size::default(),
            max_scroll: 0,
            completed: BTreeSet::new(),
            status: None,
        }
    }

    /// Signals the app to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Topic keys in list order.
    #[must_use]
    pub fn keys(&self) -> &[&'static str] {
        &self.keys
    }

    /// The viewer used to render pages.
    #[must_use]
    pub const fn viewer(&self) -> &Viewer<'r> {
        &self.viewer
    }

    /// Key of the highlighted topic.
    #[must_use]
    pub fn selected_key(&self) -> Option<&'static str> {
        self.keys.get(self.selected_index).copied()
    }

    /// The open page and the key it was rendered from.
    #[must_use]
    pub fn open_page(&self) -> Option<(&str, &Page)> {
        self.open.as_ref().map(|(key, page)| (key.as_str(), page))
    }

    /// Whether `key` was marked complete this session.
    #[must_use]
    pub fn is_complete(&self, key: &str) -> bool {
        self.completed.contains(key)
    }

    /// Number of topics marked complete.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Last status message, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Opens `key` in the reader. Unknown keys show the placeholder page.
    pub fn open_topic(&mut self, key: &str) {
        let page = self.viewer.render(key);
        if let Some(index) = self.keys.iter().position(|k| *k == key) {
            self.selected_index = index;
        }
        tracing::debug!(key, "opening topic");
        self.open = Some((key.to_owned(), page));
        self.scroll = 0;
        self.refresh_scroll_limit();
        self.status = None;
        self.current_view = View::Reader;
    }

    /// Returns to the topic list.
    pub fn back(&mut self) {
        self.current_view = View::TopicList;
        self.status = None;
    }

    /// Highlights the next topic, stopping at the end.
    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.keys.len() {
            self.selected_index += 1;
        }
    }

    /// Highlights the previous topic, stopping at the start.
    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Opens the topic after the open one in catalog order.
    pub fn next_topic(&mut self) {
        let next = self
            .open_key()
            .and_then(|key| self.viewer.registry().neighbors(key).next);
        match next {
            Some(key) => self.open_topic(key),
            None => self.status = Some("Last topic".into()),
        }
    }

    /// Opens the topic before the open one in catalog order.
    pub fn previous_topic(&mut self) {
        let previous = self
            .open_key()
            .and_then(|key| self.viewer.registry().neighbors(key).previous);
        match previous {
            Some(key) => self.open_topic(key),
            None => self.status = Some("First topic".into()),
        }
    }

    /// Records the terminal size so scrolling matches the wrapped page.
    pub fn resize(&mut self, frame_size: Size) {
        if self.frame_size != frame_size {
            self.frame_size = frame_size;
            self.refresh_scroll_limit();
        }
    }

    /// Scrolls the page down by `lines`, stopping once the last row is
    /// on screen.
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll);
    }

    /// Scrolls the page up by `lines`.
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Copies the open topic's code sample.
    pub fn copy_code(&mut self, clipboard: &mut dyn Clipboard) {
        let Some((_, page)) = &self.open else {
            return;
        };
        self.status = Some(match page.code_panel() {
            None => "This topic has no code sample".into(),
            Some(panel) if panel.copy_action().invoke(clipboard) => {
                format!("Copied \"{}\" to the clipboard", panel.title)
            }
            Some(_) => "Clipboard unavailable; code not copied".into(),
        });
    }

    /// Toggles the completion mark of the open topic.
    pub fn toggle_complete(&mut self) {
        let Some(key) = self.open_key().and_then(|key| self.registered_key(key)) else {
            return;
        };
        if self.completed.remove(key) {
            self.status = Some("Marked as incomplete".into());
        } else {
            let _ = self.completed.insert(key);
            self.status = Some(format!(
                "Marked as complete ({}/{})",
                self.completed.len(),
                self.keys.len()
            ));
        }
    }

    /// Applies a key press to the state.
    pub fn handle_key(&mut self, key: KeyEvent, clipboard: &mut dyn Clipboard) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }
        match (self.current_view, key.code) {
            (_, KeyCode::Char('q')) => self.quit(),
            (View::TopicList, KeyCode::Down | KeyCode::Char('j')) => self.select_next(),
            (View::TopicList, KeyCode::Up | KeyCode::Char('k')) => self.select_previous(),
            (View::TopicList, KeyCode::Enter) => {
                if let Some(key) = self.selected_key() {
                    self.open_topic(key);
                }
            }
            (View::Reader, KeyCode::Down | KeyCode::Char('j')) => self.scroll_down(1),
            (View::Reader, KeyCode::Up | KeyCode::Char('k')) => self.scroll_up(1),
            (View::Reader, KeyCode::PageDown | KeyCode::Char(' ')) => self.scroll_down(PAGE_STEP),
            (View::Reader, KeyCode::PageUp) => self.scroll_up(PAGE_STEP),
            (View::Reader, KeyCode::Home | KeyCode::Char('g')) => self.scroll = 0,
            (View::Reader, KeyCode::Char('n') | KeyCode::Right) => self.next_topic(),
            (View::Reader, KeyCode::Char('p') | KeyCode::Left) => self.previous_topic(),
            (View::Reader, KeyCode::Char('c')) => self.copy_code(clipboard),
            (View::Reader, KeyCode::Char('m')) => self.toggle_complete(),
            (View::Reader, KeyCode::Esc | KeyCode::Backspace) => self.back(),
            _ => {}
        }
    }

    /// Before the first draw the frame size is unknown; unwrapped lines are
    /// used then.
    fn refresh_scroll_limit(&mut self) {
        let Some((_, page)) = &self.open else {
            self.max_scroll = 0;
            return;
        };
        let viewport = ui::reader_viewport(self.frame_size);
        let rows = if viewport.width == 0 {
            page_lines(page).len().saturating_sub(1)
        } else {
            wrapped_height(page, viewport.width).saturating_sub(usize::from(viewport.height))
        };
        self.max_scroll = u16::try_from(rows).unwrap_or(u16::MAX);
        self.scroll = self.scroll.min(self.max_scroll);
    }

    fn open_key(&self) -> Option<&str> {
        self.open.as_ref().map(|(key, _)| key.as_str())
    }

    fn registered_key(&self, key: &str) -> Option<&'static str> {
        self.keys.iter().copied().find(|k| *k == key)
    }
}
