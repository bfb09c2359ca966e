//! Page render tree.
//!
//! A [`Page`] is what every surface draws: the CLI formats it as text or
//! JSON and the interactive reader turns it into terminal lines.

use dockguide_common::constants::{COMING_SOON_HEADING, COMING_SOON_TEXT, COPY_LABEL};
use dockguide_common::types::{CodeExample, Difficulty, TopicKey};
use dockguide_markup::block::Block;
use serde::Serialize;

use crate::clipboard::CopyAction;

/// Result of rendering one topic key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    /// The key has no content yet.
    ComingSoon(Placeholder),
    /// The key resolved to a topic.
    Topic(TopicPage),
}

impl Page {
    /// Whether this is the fallback placeholder.
    #[must_use]
    pub const fn is_coming_soon(&self) -> bool {
        matches!(self, Self::ComingSoon(_))
    }

    /// The code panel, if the page has one.
    #[must_use]
    pub fn code_panel(&self) -> Option<&CodePanel> {
        match self {
            Self::ComingSoon(_) => None,
            Self::Topic(topic) => topic.code_panel(),
        }
    }
}

/// Fixed fallback shown for unknown topic keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    /// Key that was requested.
    pub key: TopicKey,
    /// Heading text.
    pub heading: &'static str,
    /// Explanatory text.
    pub message: &'static str,
}

impl Placeholder {
    /// Builds the placeholder for `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: TopicKey::new(key),
            heading: COMING_SOON_HEADING,
            message: COMING_SOON_TEXT,
        }
    }
}

/// A resolved topic laid out as an ordered list of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicPage {
    /// Key the page was rendered from.
    pub key: TopicKey,
    sections: Vec<Section>,
}

impl TopicPage {
    pub(crate) const fn new(key: TopicKey, sections: Vec<Section>) -> Self {
        Self { key, sections }
    }

    /// Sections in display order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Topic title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.sections
            .iter()
            .find_map(|section| match section {
                Section::Title { text } => Some(*text),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// The code panel, if the topic carries a code sample.
    #[must_use]
    pub fn code_panel(&self) -> Option<&CodePanel> {
        self.sections.iter().find_map(|section| match section {
            Section::Code(panel) => Some(panel),
            _ => None,
        })
    }
}

/// One visual section of a topic page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    /// Difficulty badge.
    Difficulty {
        /// Difficulty level.
        level: Difficulty,
    },
    /// Reading time label.
    Duration {
        /// Label text.
        label: &'static str,
    },
    /// Page title.
    Title {
        /// Title text.
        text: &'static str,
    },
    /// One-line summary.
    Description {
        /// Summary text.
        text: &'static str,
    },
    /// Converted markup body.
    Body {
        /// Body blocks.
        blocks: Vec<Block>,
    },
    /// Code sample panel.
    Code(CodePanel),
}

/// The code sample panel with its copy control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodePanel {
    /// Panel title.
    pub title: &'static str,
    /// Panel description.
    pub description: &'static str,
    /// Display-only language label.
    pub language: &'static str,
    /// Label of the copy control.
    pub copy_label: &'static str,
    /// Verbatim code text.
    pub code: &'static str,
}

impl CodePanel {
    /// Lays out a code example as a panel.
    #[must_use]
    pub const fn from_example(example: &CodeExample) -> Self {
        Self {
            title: example.title,
            description: example.description,
            language: example.language,
            copy_label: COPY_LABEL,
            code: example.code,
        }
    }

    /// The panel's copy action.
    #[must_use]
    pub const fn copy_action(&self) -> CopyAction<'static> {
        CopyAction::new(self.code)
    }
}
