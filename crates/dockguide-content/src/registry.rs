//! Topic registry.
//!
//! Populated once, never mutated. Lookups use exact key equality; the
//! catalog order only matters for listing and previous/next navigation.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use dockguide_common::error::{GuideError, Result};
use dockguide_common::types::{ContentRecord, Difficulty, TopicKey};
use serde::Serialize;

use crate::catalog;

/// Immutable mapping from topic key to content record.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Entries in catalog order.
    entries: Vec<(&'static str, ContentRecord)>,
    /// Key to position in `entries`.
    index: HashMap<&'static str, usize>,
}

/// Topics adjacent to a given topic in catalog order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors {
    /// Topic before the current one.
    pub previous: Option<&'static str>,
    /// Topic after the current one.
    pub next: Option<&'static str>,
}

/// One line of a topic listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicSummary {
    /// Topic key.
    pub key: TopicKey,
    /// Display title.
    pub title: &'static str,
    /// Difficulty label.
    pub difficulty: Difficulty,
    /// Reading time label.
    pub duration: &'static str,
    /// Whether the topic carries a code sample.
    pub has_code: bool,
}

static BUILTIN: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Returns the process-wide built-in catalog.
    pub fn builtin() -> &'static Self {
        BUILTIN.get_or_init(|| {
            tracing::debug!(topics = catalog::ENTRIES.len(), "initializing built-in registry");
            Self::index_entries(catalog::ENTRIES.to_vec())
        })
    }

    /// Builds a registry from explicit entries, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::InvalidCatalog`] if a key is empty or repeated,
    /// or if a record has empty required fields.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (&'static str, ContentRecord)>,
    ) -> Result<Self> {
        let entries: Vec<_> = entries.into_iter().collect();
        let mut seen = HashSet::with_capacity(entries.len());
        for (key, record) in &entries {
            if key.trim().is_empty() {
                return Err(GuideError::InvalidCatalog {
                    message: "topic key must not be empty".into(),
                });
            }
            if !seen.insert(*key) {
                return Err(GuideError::InvalidCatalog {
                    message: format!("duplicate topic key '{key}'"),
                });
            }
            let missing = record.missing_fields();
            if !missing.is_empty() {
                return Err(GuideError::InvalidCatalog {
                    message: format!("topic '{key}' has empty fields: {}", missing.join(", ")),
                });
            }
        }
        Ok(Self::index_entries(entries))
    }

    fn index_entries(entries: Vec<(&'static str, ContentRecord)>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(pos, (key, _))| (*key, pos))
            .collect();
        Self { entries, index }
    }

    /// Looks up a topic by exact key.
    ///
    /// Absent keys return `None`; there is no case folding or prefix match.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&ContentRecord> {
        let record = self.index.get(key).map(|&pos| &self.entries[pos].1);
        tracing::debug!(key, found = record.is_some(), "topic lookup");
        record
    }

    /// Returns whether `key` names a topic.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no topics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Topic keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Topics in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ContentRecord)> + '_ {
        self.entries.iter().map(|(key, record)| (*key, record))
    }

    /// Position of `key` in catalog order.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Returns the topics before and after `key`.
    ///
    /// Both sides are `None` when `key` is not registered.
    #[must_use]
    pub fn neighbors(&self, key: &str) -> Neighbors {
        let Some(pos) = self.position(key) else {
            return Neighbors::default();
        };
        Neighbors {
            previous: pos.checked_sub(1).map(|prev| self.entries[prev].0),
            next: self.entries.get(pos + 1).map(|(next, _)| *next),
        }
    }

    /// Finds topics whose key, title, or description contains `query`,
    /// ignoring case. An empty query matches everything.
    pub fn search<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = (&'static str, &'a ContentRecord)> + 'a {
        let needle = query.trim().to_lowercase();
        self.iter().filter(move |(key, record)| {
            needle.is_empty()
                || [*key, record.title, record.description]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
    }

    /// Listing rows for every topic in catalog order.
    #[must_use]
    pub fn summaries(&self) -> Vec<TopicSummary> {
        self.iter().map(|(key, record)| summarize(key, record)).collect()
    }
}

/// Builds the listing row for one topic.
#[must_use]
pub fn summarize(key: &str, record: &ContentRecord) -> TopicSummary {
    TopicSummary {
        key: TopicKey::new(key),
        title: record.title,
        difficulty: record.difficulty,
        duration: record.duration,
        has_code: record.code_example.is_some(),
    }
}
