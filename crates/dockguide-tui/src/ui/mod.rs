//! Frame layout.
//!
//! The active view fills the screen above a one-line status bar.

pub mod reader;
pub mod status;
pub mod topics;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::widgets::Block;

use crate::app::{App, View};

/// Splits the frame into the view area and the status bar.
fn areas(area: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area)
}

/// Size of the reader's text area inside its border for a frame of
/// `frame_size`.
#[must_use]
pub fn reader_viewport(frame_size: Size) -> Size {
    let [main, _] = areas(Rect::new(0, 0, frame_size.width, frame_size.height));
    let inner = Block::bordered().inner(main);
    Size::new(inner.width, inner.height)
}

/// Draws the whole frame for the current state.
pub fn render(frame: &mut Frame, app: &App<'_>) {
    let [main, status_bar] = areas(frame.area());
    match app.current_view {
        View::TopicList => topics::render_topic_list(frame, main, app),
        View::Reader => reader::render_reader(frame, main, app),
    }
    status::render_status(frame, status_bar, app);
}

#[cfg(test)]
mod tests {
    use dockguide_viewer::viewer::Viewer;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn draw_rows(app: &App<'_>, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        let _ = terminal.draw(|frame| render(frame, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(usize::from(width))
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
            .collect()
    }

    fn draw(app: &App<'_>) -> String {
        draw_rows(app, 100, 40).concat()
    }

    #[test]
    fn topic_list_shows_titles() {
        let app = App::new(Viewer::builtin());
        let screen = draw(&app);
        assert!(screen.contains("What is Docker Desktop?"));
        assert!(screen.contains("Docker MCP Toolkit"));
    }

    #[test]
    fn reader_shows_topic_header() {
        let mut app = App::new(Viewer::builtin());
        app.open_topic("install-mac");
        let screen = draw(&app);
        assert!(screen.contains("Docker Desktop for macOS"));
        assert!(screen.contains("Beginner"));
    }

    #[test]
    fn reader_shows_placeholder_for_unknown_topic() {
        let mut app = App::new(Viewer::builtin());
        app.open_topic("unknown-topic-xyz");
        let screen = draw(&app);
        assert!(screen.contains("Content Coming Soon"));
    }

    #[test]
    fn reader_viewport_excludes_border_and_status_bar() {
        assert_eq!(reader_viewport(Size::new(30, 12)), Size::new(28, 9));
        assert_eq!(reader_viewport(Size::default()), Size::new(0, 0));
    }

    #[test]
    fn narrow_reader_scrolls_to_end_of_code_panel() {
        let (width, height) = (30, 12);
        let mut app = App::new(Viewer::builtin());
        app.resize(Size::new(width, height));
        app.open_topic("docker-model-runner");
        app.scroll_down(u16::MAX);

        let rows = draw_rows(&app, width, height);
        let last_text_row = &rows[usize::from(height) - 3];
        assert!(last_text_row.starts_with("│└─"), "got {last_text_row:?}");

        let max = app.scroll;
        app.scroll_down(1);
        assert_eq!(app.scroll, max);
    }

    #[test]
    fn resize_keeps_scroll_within_new_limit() {
        let mut app = App::new(Viewer::builtin());
        app.resize(Size::new(30, 12));
        app.open_topic("docker-model-runner");
        app.scroll_down(u16::MAX);
        let narrow_max = app.scroll;

        app.resize(Size::new(200, 60));
        assert!(app.scroll < narrow_max);
        let rows = draw_rows(&app, 200, 60);
        assert!(rows[57].starts_with("│└─"), "got {:?}", rows[57]);
    }
}
