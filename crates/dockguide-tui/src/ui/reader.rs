//! Topic page view.
//!
//! Turns a [`Page`] into styled terminal lines and draws them in a
//! scrollable, wrapped paragraph.

use dockguide_markup::block::{Block as MarkupBlock, Span as MarkupSpan, SpanStyle};
use dockguide_viewer::page::{CodePanel, Page, Placeholder, Section, TopicPage};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::app::App;

/// Draws the open page.
pub fn render_reader(frame: &mut Frame, area: Rect, app: &App<'_>) {
    let Some((key, page)) = app.open_page() else {
        return;
    };
    let mark = if app.is_complete(key) { " ✓" } else { "" };
    let paragraph = page_paragraph(page)
        .block(Block::bordered().title(format!(" {key}{mark} ")))
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Rows the page occupies once wrapped to `width` columns.
#[must_use]
pub fn wrapped_height(page: &Page, width: u16) -> usize {
    page_paragraph(page).line_count(width)
}

fn page_paragraph(page: &Page) -> Paragraph<'static> {
    Paragraph::new(page_lines(page)).wrap(Wrap { trim: false })
}

/// Styled lines for a page, before wrapping.
#[must_use]
pub fn page_lines(page: &Page) -> Vec<Line<'static>> {
    match page {
        Page::ComingSoon(placeholder) => placeholder_lines(placeholder),
        Page::Topic(topic) => topic_lines(topic),
    }
}

fn placeholder_lines(placeholder: &Placeholder) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::styled(placeholder.heading, Style::new().add_modifier(Modifier::BOLD)).centered(),
        Line::default(),
        Line::styled(placeholder.message, Style::new().fg(Color::Gray)).centered(),
    ]
}

fn topic_lines(topic: &TopicPage) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut badge: Vec<Span<'static>> = Vec::new();
    for section in topic.sections() {
        match section {
            Section::Difficulty { level } => badge.push(Span::styled(
                format!(" {level} "),
                Style::new().fg(Color::Blue).add_modifier(Modifier::REVERSED),
            )),
            Section::Duration { label } => {
                badge.push(Span::raw("  "));
                badge.push(Span::styled(*label, Style::new().fg(Color::DarkGray)));
            }
            Section::Title { text } => {
                lines.push(Line::from(std::mem::take(&mut badge)));
                lines.push(Line::default());
                lines.push(Line::styled(
                    *text,
                    Style::new().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ));
            }
            Section::Description { text } => {
                lines.push(Line::styled(*text, Style::new().fg(Color::Gray)));
                lines.push(Line::default());
            }
            Section::Body { blocks } => push_blocks(&mut lines, blocks),
            Section::Code(panel) => push_code_panel(&mut lines, panel),
        }
    }
    lines
}

fn push_blocks(lines: &mut Vec<Line<'static>>, blocks: &[MarkupBlock]) {
    for block in blocks {
        match block {
            MarkupBlock::Heading { level, spans } => {
                let color = if *level <= 2 { Color::Cyan } else { Color::LightBlue };
                let style = Style::new().fg(color).add_modifier(Modifier::BOLD);
                lines.push(Line::from(styled_spans(spans, style)));
            }
            MarkupBlock::Paragraph { spans } => {
                lines.push(Line::from(styled_spans(spans, Style::new())));
            }
            MarkupBlock::List { start, items } => {
                for (offset, item) in (0_u64..).zip(items) {
                    let marker = start.map_or_else(
                        || "  • ".to_owned(),
                        |first| format!("  {}. ", first + offset),
                    );
                    let mut spans = vec![Span::styled(marker, Style::new().fg(Color::DarkGray))];
                    spans.extend(styled_spans(item, Style::new()));
                    lines.push(Line::from(spans));
                }
            }
            MarkupBlock::CodeBlock { code, .. } => {
                for line in code.lines() {
                    lines.push(Line::styled(
                        format!("    {line}"),
                        Style::new().fg(Color::Green),
                    ));
                }
            }
            MarkupBlock::Rule => lines.push(Line::raw("────────────────────")),
        }
        lines.push(Line::default());
    }
}

fn push_code_panel(lines: &mut Vec<Line<'static>>, panel: &CodePanel) {
    let frame_style = Style::new().fg(Color::DarkGray);
    lines.push(Line::styled("┌─ Code ─────────────────", frame_style));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {}", panel.title),
            Style::new().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ({})", panel.language), frame_style),
        Span::styled(
            format!("   [c] {}", panel.copy_label),
            Style::new().fg(Color::Yellow),
        ),
    ]));
    lines.push(Line::styled(
        format!("  {}", panel.description),
        Style::new().fg(Color::Gray),
    ));
    lines.push(Line::styled("├────────────────────────", frame_style));
    let code_style = Style::new().fg(Color::White).bg(Color::Black);
    for line in panel.code.lines() {
        lines.push(Line::styled(line.to_owned(), code_style));
    }
    lines.push(Line::styled("└────────────────────────", frame_style));
}

fn styled_spans(spans: &[MarkupSpan], base: Style) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|span| Span::styled(span.text.clone(), apply(base, span.style)))
        .collect()
}

fn apply(base: Style, style: SpanStyle) -> Style {
    let mut out = base;
    if style.strong {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.emphasis {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.code {
        out = out.fg(Color::Yellow);
    }
    out
}

#[cfg(test)]
mod tests {
    use dockguide_viewer::viewer::Viewer;

    use super::*;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn topic_lines_start_with_badge_and_title() {
        let lines = page_lines(&Viewer::builtin().render("docker-desktop-intro"));
        assert_eq!(text_of(&lines[0]), " Beginner   10 min read");
        assert_eq!(text_of(&lines[2]), "What is Docker Desktop?");
        assert_eq!(
            text_of(&lines[3]),
            "Learn about Docker Desktop and its benefits for modern development"
        );
    }

    #[test]
    fn code_lines_are_verbatim() {
        let page = Viewer::builtin().render("docker-compose");
        let code = page.code_panel().expect("sample").code;
        let texts: Vec<_> = page_lines(&page).iter().map(text_of).collect();
        for code_line in code.lines() {
            assert!(texts.iter().any(|t| t == code_line), "missing {code_line:?}");
        }
    }

    #[test]
    fn strong_spans_are_bold() {
        let lines = page_lines(&Viewer::builtin().render("docker-desktop-intro"));
        let bold = lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .find(|span| span.content == "Visual Interface")
            .expect("bold label");
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn wrapping_adds_rows_on_narrow_widths() {
        let page = Viewer::builtin().render("docker-model-runner");
        assert!(wrapped_height(&page, 28) > wrapped_height(&page, 200));
    }

    #[test]
    fn placeholder_lines_carry_fixed_text() {
        let lines = page_lines(&Viewer::builtin().render("nope"));
        let texts: Vec<_> = lines.iter().map(text_of).collect();
        assert!(texts.contains(&"Content Coming Soon".to_string()));
        assert!(texts.contains(&"This tutorial section is being prepared.".to_string()));
    }
}
