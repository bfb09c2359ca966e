//! Topic list view.
//!
//! One row per topic in catalog order: completion mark, title,
//! difficulty, and reading time.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::app::App;

/// Draws the topic list with the current selection highlighted.
pub fn render_topic_list(frame: &mut Frame, area: Rect, app: &App<'_>) {
    let items: Vec<ListItem<'_>> = app
        .viewer()
        .registry()
        .iter()
        .map(|(key, record)| {
            let mark = if app.is_complete(key) { "✓ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::new().fg(Color::Green)),
                Span::styled(record.title, Style::new().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  [{}] {}", record.difficulty, record.duration),
                    Style::new().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let title = format!(
        " Docker Desktop tutorials ({}/{} complete) ",
        app.completed_count(),
        app.keys().len()
    );
    let list = List::new(items)
        .block(Block::bordered().title(title))
        .highlight_style(Style::new().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use dockguide_viewer::viewer::Viewer;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn rows(app: &App<'_>) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(90, 14)).expect("terminal");
        let _ = terminal
            .draw(|frame| render_topic_list(frame, frame.area(), app))
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(90)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
            .collect()
    }

    #[test]
    fn rows_follow_catalog_order() {
        let app = App::new(Viewer::builtin());
        let rows = rows(&app);
        let titles: Vec<_> = app
            .viewer()
            .registry()
            .iter()
            .map(|(_, record)| record.title)
            .collect();
        let positions: Vec<_> = titles
            .iter()
            .map(|title| rows.iter().position(|row| row.contains(title)).expect("listed"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn completed_topics_are_marked() {
        let mut app = App::new(Viewer::builtin());
        app.open_topic("docker-compose");
        app.toggle_complete();
        let rows = rows(&app);
        assert!(rows.iter().any(|row| row.contains("✓ Docker Compose with Docker Desktop")));
        assert!(rows[0].contains("(1/9 complete)"));
    }
}
