//! Integration tests for the `dguide` binary.
//!
//! These tests are implemented in:
//! `crates/dockguide-cli/tests/cli_test.rs`
//!
//! Covered scenarios:
//! - `list` prints topics in catalog order and honours filters
//! - `show` prints pages and the placeholder for unknown topics
//! - `copy --stdout` emits the sample byte for byte
//! - Invalid configuration fails before any output
