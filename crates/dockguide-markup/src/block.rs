//! Structured output of markup conversion.

use serde::Serialize;

/// Inline styling flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SpanStyle {
    /// Rendered bold.
    pub strong: bool,
    /// Rendered italic.
    pub emphasis: bool,
    /// Inline code.
    pub code: bool,
}

impl SpanStyle {
    /// Unstyled text.
    pub const PLAIN: Self = Self {
        strong: false,
        emphasis: false,
        code: false,
    };

    /// Whether no flag is set.
    #[must_use]
    pub const fn is_plain(self) -> bool {
        !self.strong && !self.emphasis && !self.code
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Text content.
    pub text: String,
    /// Styling applied to the whole run.
    pub style: SpanStyle,
}

impl Span {
    /// Creates an unstyled span.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::PLAIN,
        }
    }

    /// Creates a bold span.
    #[must_use]
    pub fn strong(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle {
                strong: true,
                ..SpanStyle::PLAIN
            },
        }
    }
}

/// One block of converted markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Section heading, `level` 1 through 6.
    Heading {
        /// Heading depth.
        level: u8,
        /// Heading text.
        spans: Vec<Span>,
    },
    /// Paragraph of inline text.
    Paragraph {
        /// Paragraph text.
        spans: Vec<Span>,
    },
    /// Bulleted or numbered list. Nested lists are flattened into their parent.
    List {
        /// First number for ordered lists, `None` for bullets.
        start: Option<u64>,
        /// Item texts in order.
        items: Vec<Vec<Span>>,
    },
    /// Fenced or indented code, kept verbatim.
    CodeBlock {
        /// Info-string language, if any.
        language: Option<String>,
        /// Code text.
        code: String,
    },
    /// Thematic break.
    Rule,
}

/// Concatenates span texts, dropping styling.
#[must_use]
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_joins_spans() {
        let spans = vec![Span::strong("GPU Acceleration"), Span::plain(": on by default")];
        assert_eq!(plain_text(&spans), "GPU Acceleration: on by default");
    }

    #[test]
    fn block_serializes_with_kind_tag() {
        let json = serde_json::to_value(Block::Rule).expect("serialize");
        assert_eq!(json["kind"], "rule");

        let heading = Block::Heading {
            level: 2,
            spans: vec![Span::plain("Key Features")],
        };
        let json = serde_json::to_value(heading).expect("serialize");
        assert_eq!(json["kind"], "heading");
        assert_eq!(json["level"], 2);
    }
}
