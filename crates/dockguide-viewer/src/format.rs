//! Plain-text page rendering.
//!
//! Produces the same text for the same page and width. Prose is word
//! wrapped; code is never wrapped or re-indented so it can be pasted as is.

use std::fmt::Write;

use dockguide_common::constants::MIN_WIDTH;
use dockguide_markup::block::{Block, plain_text as spans_text};

use crate::page::{CodePanel, Page, Placeholder, Section, TopicPage};

/// Renders `page` as plain text wrapped to `width` columns.
#[must_use]
pub fn plain_text(page: &Page, width: u16) -> String {
    let width = usize::from(width.max(MIN_WIDTH));
    let mut out = String::new();
    match page {
        Page::ComingSoon(placeholder) => write_placeholder(&mut out, placeholder, width),
        Page::Topic(topic) => write_topic(&mut out, topic, width),
    }
    out
}

fn write_placeholder(out: &mut String, placeholder: &Placeholder, width: usize) {
    underline(out, placeholder.heading, '=');
    out.push('\n');
    push_wrapped(out, placeholder.message, width, "", "");
}

fn write_topic(out: &mut String, topic: &TopicPage, width: usize) {
    let mut badge = Vec::new();
    for section in topic.sections() {
        match section {
            Section::Difficulty { level } => badge.push(format!("[{level}]")),
            Section::Duration { label } => badge.push((*label).to_owned()),
            Section::Title { text } => {
                flush_badge(out, &mut badge);
                underline(out, text, '=');
            }
            Section::Description { text } => {
                push_wrapped(out, text, width, "", "");
                out.push('\n');
            }
            Section::Body { blocks } => write_blocks(out, blocks, width),
            Section::Code(panel) => write_code_panel(out, panel, width),
        }
    }
    flush_badge(out, &mut badge);
}

fn flush_badge(out: &mut String, badge: &mut Vec<String>) {
    if !badge.is_empty() {
        out.push_str(&badge.join("  "));
        out.push_str("\n\n");
        badge.clear();
    }
}

fn write_blocks(out: &mut String, blocks: &[Block], width: usize) {
    for block in blocks {
        match block {
            Block::Heading { level, spans } => {
                let text = spans_text(spans);
                match *level {
                    1 => underline(out, &text, '='),
                    2 => underline(out, &text, '-'),
                    _ => {
                        out.push_str(&text);
                        out.push('\n');
                    }
                }
            }
            Block::Paragraph { spans } => push_wrapped(out, &spans_text(spans), width, "", ""),
            Block::List { start, items } => {
                for (offset, item) in (0_u64..).zip(items) {
                    let marker = start.map_or_else(
                        || "- ".to_owned(),
                        |first| format!("{}. ", first + offset),
                    );
                    let hang = " ".repeat(marker.chars().count());
                    push_wrapped(out, &spans_text(item), width, &marker, &hang);
                }
            }
            Block::CodeBlock { code, .. } => {
                for line in code.lines() {
                    let _ = writeln!(out, "    {line}");
                }
            }
            Block::Rule => {
                out.push_str(&"-".repeat(width));
                out.push('\n');
            }
        }
        out.push('\n');
    }
}

fn write_code_panel(out: &mut String, panel: &CodePanel, width: usize) {
    let header = format!("{} ({})", panel.title, panel.language);
    out.push_str(&"─".repeat(width));
    out.push('\n');
    let _ = writeln!(out, "{header}  [{}]", panel.copy_label);
    push_wrapped(out, panel.description, width, "", "");
    out.push_str(&"─".repeat(width));
    out.push('\n');
    out.push_str(panel.code);
    if !panel.code.ends_with('\n') {
        out.push('\n');
    }
}

fn underline(out: &mut String, text: &str, mark: char) {
    let _ = writeln!(out, "{text}");
    let _ = writeln!(out, "{}", mark.to_string().repeat(text.chars().count()));
}

/// Greedy word wrap. `first` prefixes the first line, `rest` the others.
fn push_wrapped(out: &mut String, text: &str, width: usize, first: &str, rest: &str) {
    let mut line = String::from(first);
    let mut line_len = first.chars().count();
    let mut at_line_start = true;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if !at_line_start && line_len + 1 + word_len > width {
            out.push_str(&line);
            out.push('\n');
            line = String::from(rest);
            line_len = rest.chars().count();
            at_line_start = true;
        }
        if !at_line_start {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
        at_line_start = false;
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
