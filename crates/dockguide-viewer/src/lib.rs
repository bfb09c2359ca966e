//! # dockguide-viewer
//!
//! Renders a tutorial topic, selected by key, into a [`Page`](page::Page).
//!
//! Provides:
//! - [`Viewer`](viewer::Viewer): registry lookup plus the fixed page layout,
//!   falling back to a "coming soon" placeholder for unknown keys.
//! - [`Clipboard`](clipboard::Clipboard): the copy-action seam, with an
//!   in-memory implementation and one that pipes into a host clipboard tool.
//! - [`format`]: deterministic plain-text rendering of a page.
//!
//! # Example
//!
//! ```rust
//! use dockguide_viewer::clipboard::MemoryClipboard;
//! use dockguide_viewer::viewer::Viewer;
//!
//! let viewer = Viewer::builtin();
//! let page = viewer.render("install-linux");
//! let panel = page.code_panel().expect("topic has a code sample");
//!
//! let mut clipboard = MemoryClipboard::new();
//! panel.copy_action().invoke(&mut clipboard);
//! assert!(clipboard.contents().unwrap_or_default().starts_with("# Update package index"));
//! ```

pub mod clipboard;
pub mod format;
pub mod page;
pub mod viewer;
