//! Integration tests for topic page rendering and the copy action.
//!
//! These tests are implemented in:
//! `crates/dockguide-viewer/tests/viewer_test.rs`
//!
//! Covered scenarios:
//! - Known topics render difficulty, duration, title, description, body, code
//! - Unknown topics render the "Content Coming Soon" placeholder
//! - The copy action places the exact sample text on the clipboard
//! - Pages serialize to JSON
