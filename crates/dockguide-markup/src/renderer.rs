//! Markup renderers.
//!
//! The viewer depends on [`MarkupRenderer`] only; [`CommonMarkRenderer`]
//! is the implementation shipped with dockguide.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::block::{Block, Span, SpanStyle};

/// Converts a lightweight-markup body into structured blocks.
///
/// Implementations must be pure: the same input always yields the same
/// blocks.
pub trait MarkupRenderer {
    /// Converts `source` into blocks.
    fn render(&self, source: &str) -> Vec<Block>;
}

/// CommonMark renderer backed by `pulldown-cmark`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMarkRenderer;

impl CommonMarkRenderer {
    /// Creates a renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MarkupRenderer for CommonMarkRenderer {
    fn render(&self, source: &str) -> Vec<Block> {
        let mut builder = BlockBuilder::default();
        for event in Parser::new(source.trim()) {
            builder.handle(event);
        }
        let blocks = builder.finish();
        tracing::trace!(blocks = blocks.len(), "converted markup");
        blocks
    }
}

/// A list being assembled.
#[derive(Debug)]
struct ListFrame {
    start: Option<u64>,
    items: Vec<Vec<Span>>,
}

/// Event-driven block assembly state.
#[derive(Debug, Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    spans: Vec<Span>,
    heading: Option<u8>,
    lists: Vec<ListFrame>,
    code: Option<(Option<String>, String)>,
    strong: usize,
    emphasis: usize,
}

impl BlockBuilder {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if let Some((_, code)) = self.code.as_mut() {
                    code.push_str(&text);
                } else {
                    self.push_text(&text, self.style());
                }
            }
            Event::Code(text) => {
                let style = SpanStyle {
                    code: true,
                    ..self.style()
                };
                self.push_text(&text, style);
            }
            Event::Html(text) | Event::InlineHtml(text) => self.push_text(&text, self.style()),
            Event::SoftBreak => self.push_text(" ", self.style()),
            Event::HardBreak => self.push_text("\n", self.style()),
            Event::Rule => {
                self.flush_paragraph();
                self.blocks.push(Block::Rule);
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush_paragraph();
                self.heading = Some(heading_depth(level));
            }
            Tag::List(start) => {
                // Text before a nested list belongs to the enclosing item.
                self.flush_item();
                self.lists.push(ListFrame {
                    start,
                    items: Vec::new(),
                });
            }
            Tag::CodeBlock(kind) => {
                self.flush_paragraph();
                let language = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_owned),
                    CodeBlockKind::Indented => None,
                };
                self.code = Some((language, String::new()));
            }
            Tag::Strong => self.strong += 1,
            Tag::Emphasis => self.emphasis += 1,
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                let level = self.heading.take().unwrap_or(1);
                let spans = std::mem::take(&mut self.spans);
                self.blocks.push(Block::Heading { level, spans });
            }
            TagEnd::Paragraph => {
                if self.lists.is_empty() {
                    self.flush_paragraph();
                } else if !self.spans.is_empty() {
                    // Loose list items keep their paragraphs on one line.
                    self.push_text(" ", SpanStyle::PLAIN);
                }
            }
            TagEnd::Item => self.flush_item(),
            TagEnd::List(_) => {
                if let Some(frame) = self.lists.pop() {
                    if let Some(parent) = self.lists.last_mut() {
                        parent.items.extend(frame.items);
                    } else {
                        self.blocks.push(Block::List {
                            start: frame.start,
                            items: frame.items,
                        });
                    }
                }
            }
            TagEnd::CodeBlock => {
                if let Some((language, code)) = self.code.take() {
                    self.blocks.push(Block::CodeBlock { language, code });
                }
            }
            TagEnd::Strong => self.strong = self.strong.saturating_sub(1),
            TagEnd::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
            _ => {}
        }
    }

    const fn style(&self) -> SpanStyle {
        SpanStyle {
            strong: self.strong > 0,
            emphasis: self.emphasis > 0,
            code: false,
        }
    }

    /// Appends text, merging it into the previous span when styles match.
    fn push_text(&mut self, text: &str, style: SpanStyle) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.spans.push(Span {
                text: text.to_owned(),
                style,
            }),
        }
    }

    fn flush_paragraph(&mut self) {
        let spans = trim_spans(std::mem::take(&mut self.spans));
        if !spans.is_empty() {
            self.blocks.push(Block::Paragraph { spans });
        }
    }

    fn flush_item(&mut self) {
        let spans = trim_spans(std::mem::take(&mut self.spans));
        if spans.is_empty() {
            return;
        }
        if let Some(frame) = self.lists.last_mut() {
            frame.items.push(spans);
        } else {
            self.blocks.push(Block::Paragraph { spans });
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_paragraph();
        while let Some(frame) = self.lists.pop() {
            self.blocks.push(Block::List {
                start: frame.start,
                items: frame.items,
            });
        }
        self.blocks
    }
}

const fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Strips leading and trailing whitespace from a span run.
fn trim_spans(mut spans: Vec<Span>) -> Vec<Span> {
    if let Some(first) = spans.first_mut() {
        first.text = first.text.trim_start().to_owned();
    }
    if let Some(last) = spans.last_mut() {
        last.text = last.text.trim_end().to_owned();
    }
    spans.retain(|span| !span.text.is_empty());
    spans
}
