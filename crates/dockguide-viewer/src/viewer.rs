//! Topic viewer.
//!
//! Looks a key up in the registry and lays the record out in a fixed
//! order: difficulty, duration, title, description, body, code panel.
//! Unknown keys render the "coming soon" placeholder.

use dockguide_common::types::{ContentRecord, TopicKey};
use dockguide_content::registry::Registry;
use dockguide_markup::renderer::{CommonMarkRenderer, MarkupRenderer};

use crate::clipboard::Clipboard;
use crate::page::{CodePanel, Page, Placeholder, Section, TopicPage};

/// Renders topics from a registry.
#[derive(Debug, Clone)]
pub struct Viewer<'r, R = CommonMarkRenderer> {
    registry: &'r Registry,
    renderer: R,
}

impl Viewer<'static> {
    /// Viewer over the built-in catalog with the CommonMark renderer.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Registry::builtin(), CommonMarkRenderer::new())
    }
}

impl<'r, R: MarkupRenderer> Viewer<'r, R> {
    /// Creates a viewer over `registry` using `renderer` for bodies.
    #[must_use]
    pub const fn new(registry: &'r Registry, renderer: R) -> Self {
        Self { registry, renderer }
    }

    /// The registry this viewer reads from.
    #[must_use]
    pub const fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Renders the page for `key`.
    ///
    /// Never fails: an unknown key yields [`Page::ComingSoon`].
    #[must_use]
    pub fn render(&self, key: &str) -> Page {
        match self.registry.lookup(key) {
            Some(record) => Page::Topic(self.layout(key, record)),
            None => {
                tracing::debug!(key, "no content for topic, showing placeholder");
                Page::ComingSoon(Placeholder::new(key))
            }
        }
    }

    fn layout(&self, key: &str, record: &ContentRecord) -> TopicPage {
        let mut sections = vec![
            Section::Difficulty {
                level: record.difficulty,
            },
            Section::Duration {
                label: record.duration,
            },
            Section::Title { text: record.title },
            Section::Description {
                text: record.description,
            },
            Section::Body {
                blocks: self.renderer.render(record.content),
            },
        ];
        if let Some(example) = &record.code_example {
            sections.push(Section::Code(CodePanel::from_example(example)));
        }
        TopicPage::new(TopicKey::new(key), sections)
    }

    /// Runs the copy action of `key`'s code panel against `clipboard`.
    ///
    /// Returns `None` when the topic is unknown or has no code sample,
    /// otherwise whether the clipboard accepted the text.
    pub fn copy_code(&self, key: &str, clipboard: &mut dyn Clipboard) -> Option<bool> {
        let example = self.registry.lookup(key)?.code_example?;
        Some(CodePanel::from_example(&example).copy_action().invoke(clipboard))
    }
}

#[cfg(test)]
mod tests {
    use dockguide_common::constants::COMING_SOON_HEADING;
    use dockguide_common::types::Difficulty;
    use dockguide_markup::block::Block;

    use super::*;
    use crate::clipboard::MemoryClipboard;

    /// Emits one rule per body line.
    struct CountingRenderer;

    impl MarkupRenderer for CountingRenderer {
        fn render(&self, source: &str) -> Vec<Block> {
            source.lines().map(|_| Block::Rule).collect()
        }
    }

    fn small_registry() -> Registry {
        Registry::from_entries([(
            "plain",
            ContentRecord {
                title: "Plain",
                description: "No sample",
                duration: "1 min",
                difficulty: Difficulty::Advanced,
                content: "one\ntwo",
                code_example: None,
            },
        )])
        .expect("valid registry")
    }

    #[test]
    fn unknown_key_renders_placeholder() {
        let page = Viewer::builtin().render("unknown-topic-xyz");
        let Page::ComingSoon(placeholder) = page else {
            panic!("expected placeholder");
        };
        assert_eq!(placeholder.heading, COMING_SOON_HEADING);
        assert_eq!(placeholder.key.as_str(), "unknown-topic-xyz");
    }

    #[test]
    fn empty_key_renders_placeholder() {
        assert!(Viewer::builtin().render("").is_coming_soon());
    }

    #[test]
    fn sections_follow_fixed_order() {
        let page = Viewer::builtin().render("docker-desktop-intro");
        let Page::Topic(topic) = page else {
            panic!("expected topic");
        };
        let kinds: Vec<_> = topic
            .sections()
            .iter()
            .map(|section| match section {
                Section::Difficulty { .. } => "difficulty",
                Section::Duration { .. } => "duration",
                Section::Title { .. } => "title",
                Section::Description { .. } => "description",
                Section::Body { .. } => "body",
                Section::Code(_) => "code",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["difficulty", "duration", "title", "description", "body", "code"]
        );
        assert_eq!(topic.title(), "What is Docker Desktop?");
    }

    #[test]
    fn record_without_sample_has_no_code_section() {
        let registry = small_registry();
        let viewer = Viewer::new(&registry, CommonMarkRenderer::new());
        let page = viewer.render("plain");
        assert!(page.code_panel().is_none());
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(viewer.copy_code("plain", &mut clipboard), None);
        assert!(clipboard.history().is_empty());
    }

    #[test]
    fn body_goes_through_injected_renderer() {
        let registry = small_registry();
        let viewer = Viewer::new(&registry, CountingRenderer);
        let Page::Topic(topic) = viewer.render("plain") else {
            panic!("expected topic");
        };
        assert!(topic
            .sections()
            .contains(&Section::Body {
                blocks: vec![Block::Rule, Block::Rule]
            }));
    }

    #[test]
    fn copy_code_places_literal_sample_on_clipboard() {
        let viewer = Viewer::builtin();
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(viewer.copy_code("docker-compose", &mut clipboard), Some(true));
        let expected = Registry::builtin()
            .lookup("docker-compose")
            .and_then(|record| record.code_example)
            .map(|example| example.code);
        assert_eq!(clipboard.contents(), expected);
    }

    #[test]
    fn copy_code_on_unknown_key_is_none() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(Viewer::builtin().copy_code("nope", &mut clipboard), None);
    }

    #[test]
    fn rendering_twice_yields_equal_pages() {
        let viewer = Viewer::builtin();
        for key in viewer.registry().keys() {
            assert_eq!(viewer.render(key), viewer.render(key));
        }
    }
}
