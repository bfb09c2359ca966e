//! Status bar with key hints and the last action's result.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, View};

/// Draws the one-line status bar.
pub fn render_status(frame: &mut Frame, area: Rect, app: &App<'_>) {
    let hints = match app.current_view {
        View::TopicList => "↑/↓ select  enter open  q quit",
        View::Reader => "↑/↓ scroll  n/p next/prev  c copy  m complete  esc back  q quit",
    };
    let mut spans = vec![Span::styled(hints, Style::new().fg(Color::DarkGray))];
    if let Some(status) = app.status() {
        spans.push(Span::raw("  │  "));
        spans.push(Span::styled(status.to_owned(), Style::new().fg(Color::Yellow)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
