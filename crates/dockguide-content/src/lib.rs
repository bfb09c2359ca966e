//! # dockguide-content
//!
//! The content registry: an immutable table from topic key to
//! [`ContentRecord`](dockguide_common::types::ContentRecord).
//!
//! - **Catalog**: the literal tutorial topics shipped with dockguide.
//! - **Registry**: exact-key lookup, catalog-order listing, navigation
//!   between neighbouring topics, and a listing search aid.
//!
//! # Example
//!
//! ```rust
//! use dockguide_content::registry::Registry;
//!
//! let registry = Registry::builtin();
//! let record = registry.lookup("docker-compose").expect("built-in topic");
//! assert_eq!(record.code_example.map(|c| c.language), Some("yaml"));
//! assert!(registry.lookup("unknown-topic-xyz").is_none());
//! ```

pub mod catalog;
pub mod registry;
