//! End-to-end tests for the `dguide` binary.
//!
//! Runs the compiled binary and checks what a user sees:
//! 1. `list` tables and filters
//! 2. `show` pages, including the placeholder for unknown topics
//! 3. `copy --stdout` emits the literal sample
//! 4. Configuration errors fail before any output

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::process::{Command, Output};

use dockguide_content::registry::Registry;

fn dguide(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dguide"))
        .args(args)
        .env_remove("DGUIDE_CONFIG")
        .env_remove("DGUIDE_CLIPBOARD")
        .env_remove("RUST_LOG")
        .output()
        .expect("run dguide")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

// ── list ─────────────────────────────────────────────────────────────

#[test]
fn list_prints_every_topic_in_order() {
    let output = dguide(&["list"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let keys: Vec<_> = text
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    let expected: Vec<_> = Registry::builtin().keys().collect();
    assert_eq!(keys, expected);
}

#[test]
fn list_json_filters_by_difficulty() {
    let output = dguide(&["list", "--difficulty", "advanced", "--format", "json"]);
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["key"], "mcp-toolkit");
}

#[test]
fn list_without_matches_says_so() {
    let output = dguide(&["list", "--search", "kubernetes-operator-xyz"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "No topics found.");
}

// ── show ─────────────────────────────────────────────────────────────

#[test]
fn show_prints_topic_page() {
    let output = dguide(&["show", "install-mac"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("[Beginner]"));
    assert!(text.contains("Docker Desktop for macOS"));
    assert!(text.contains("[Copy]"));
}

#[test]
fn show_unknown_topic_prints_placeholder() {
    let output = dguide(&["show", "unknown-topic-xyz"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Content Coming Soon"));
    assert!(text.contains("This tutorial section is being prepared."));
}

#[test]
fn show_respects_width_flag() {
    let output = dguide(&["show", "docker-desktop-intro", "--width", "40"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let description = "Learn about Docker Desktop and its benefits for modern development";
    assert!(!text.lines().any(|line| line == description));
    assert!(text.lines().any(|line| line == "Learn about Docker Desktop and its"));
}

#[test]
fn show_rejects_width_below_minimum() {
    let output = dguide(&["show", "install-mac", "--width", "5"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

// ── copy ─────────────────────────────────────────────────────────────

#[test]
fn copy_to_stdout_is_byte_exact() {
    let output = dguide(&["copy", "docker-compose", "--stdout"]);
    assert!(output.status.success());
    let expected = Registry::builtin()
        .lookup("docker-compose")
        .and_then(|record| record.code_example)
        .expect("sample")
        .code;
    assert_eq!(stdout(&output), expected);
}

#[test]
fn copy_unknown_topic_fails() {
    let output = dguide(&["copy", "unknown-topic-xyz", "--stdout"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn copy_unknown_topic_reports_topic_before_clipboard() {
    let empty_path = tempfile::tempdir().expect("tempdir");
    let output = Command::new(env!("CARGO_BIN_EXE_dguide"))
        .args(["copy", "unknown-topic-xyz"])
        .env_remove("DGUIDE_CONFIG")
        .env_remove("DGUIDE_CLIPBOARD")
        .env_remove("RUST_LOG")
        .env("PATH", empty_path.path())
        .output()
        .expect("run dguide");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("topic not found: unknown-topic-xyz"),
        "got {stderr:?}"
    );
}

// ── configuration ────────────────────────────────────────────────────

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");
    let output = dguide(&["--config", path.to_str().expect("utf-8 path"), "list"]);
    assert!(!output.status.success());
}

#[test]
fn config_width_applies_to_show() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dguide.json");
    std::fs::write(&path, r#"{ "width": 30 }"#).expect("write config");
    let output = dguide(&[
        "--config",
        path.to_str().expect("utf-8 path"),
        "show",
        "unknown-topic-xyz",
    ]);
    assert!(output.status.success());
    assert!(stdout(&output).lines().all(|line| line.chars().count() <= 30));
}
