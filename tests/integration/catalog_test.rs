//! Integration tests for the built-in tutorial catalog.
//!
//! These tests are implemented in:
//! `crates/dockguide-content/tests/catalog_test.rs`
//!
//! Covered scenarios:
//! - Every built-in record passes catalog validation
//! - Topics keep their catalog order for listing and prev/next navigation
//! - Known keys resolve to their record; unknown keys resolve to nothing
//! - Code samples keep literal backslashes and blank lines
//! - Search and difficulty filters select the expected topics
