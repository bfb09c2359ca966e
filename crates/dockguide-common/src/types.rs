//! Domain primitive types used across the dockguide workspace.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GuideError;

/// Identifier selecting one tutorial topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TopicKey(String);

impl TopicKey {
    /// Creates a topic key from a string value.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TopicKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Difficulty label shown on a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Difficulty {
    /// No prior Docker knowledge assumed.
    Beginner,
    /// Assumes working knowledge of containers.
    Intermediate,
    /// Assumes familiarity with the wider Docker tooling.
    Advanced,
}

impl Difficulty {
    /// All difficulty levels, easiest first.
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GuideError::Config {
                message: format!(
                    "unknown difficulty '{s}' (expected Beginner, Intermediate, or Advanced)"
                ),
            })
    }
}

/// A literal code sample attached to a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeExample {
    /// Panel title.
    pub title: &'static str,
    /// One-line summary of what the sample does.
    pub description: &'static str,
    /// Verbatim code text. Never trimmed, escaped, or executed.
    pub code: &'static str,
    /// Display-only language label such as `bash` or `yaml`.
    pub language: &'static str,
}

/// One tutorial topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentRecord {
    /// Short display title.
    pub title: &'static str,
    /// One-line summary.
    pub description: &'static str,
    /// Free-form reading time label, e.g. "15 min".
    pub duration: &'static str,
    /// Difficulty label.
    pub difficulty: Difficulty,
    /// Markdown body.
    pub content: &'static str,
    /// Optional code sample shown below the body.
    pub code_example: Option<CodeExample>,
}

impl ContentRecord {
    /// Returns the names of required fields that are empty or whitespace.
    ///
    /// A record is fully populated when this is empty. The code sample is
    /// optional, but when present its title and code must be populated.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let required = [
            ("title", self.title),
            ("description", self.description),
            ("duration", self.duration),
            ("content", self.content),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }
        if let Some(example) = &self.code_example {
            if example.title.trim().is_empty() {
                missing.push("code_example.title");
            }
            if example.code.is_empty() {
                missing.push("code_example.code");
            }
        }
        missing
    }
}
