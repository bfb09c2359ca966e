//! Integration tests for the built-in tutorial catalog.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use dockguide_common::types::Difficulty;
use dockguide_content::catalog;
use dockguide_content::registry::Registry;

#[test]
fn builtin_catalog_passes_validation() {
    let registry = Registry::from_entries(catalog::ENTRIES.iter().copied())
        .expect("built-in catalog must be valid");
    assert_eq!(registry.len(), Registry::builtin().len());
}

#[test]
fn every_topic_is_fully_populated() {
    for (key, record) in Registry::builtin().iter() {
        assert!(!record.title.is_empty(), "{key}: title");
        assert!(!record.description.is_empty(), "{key}: description");
        assert!(!record.duration.is_empty(), "{key}: duration");
        assert!(!record.difficulty.label().is_empty(), "{key}: difficulty");
        assert!(!record.content.trim().is_empty(), "{key}: content");
    }
}

#[test]
fn catalog_lists_tutorial_topics_in_order() {
    let keys: Vec<_> = Registry::builtin().keys().collect();
    assert_eq!(
        keys,
        vec![
            "docker-desktop-intro",
            "install-windows",
            "install-mac",
            "install-linux",
            "docker-compose",
            "model-runner",
            "mcp-toolkit",
            "docker-extensions",
            "docker-model-runner",
        ]
    );
}

#[test]
fn intro_topic_matches_published_content() {
    let record = Registry::builtin()
        .lookup("docker-desktop-intro")
        .expect("intro topic");
    assert_eq!(record.title, "What is Docker Desktop?");
    assert_eq!(record.difficulty, Difficulty::Beginner);
    assert_eq!(record.duration, "10 min read");
    let code = record.code_example.expect("intro has a code sample").code;
    assert!(code.starts_with("# Check Docker version"));
}

#[test]
fn unknown_topic_is_not_found() {
    assert!(Registry::builtin().lookup("unknown-topic-xyz").is_none());
}

#[test]
fn compose_topic_sample_is_yaml() {
    let sample = Registry::builtin()
        .lookup("docker-compose")
        .and_then(|record| record.code_example)
        .expect("compose sample");
    assert_eq!(sample.language, "yaml");
    assert!(sample.code.contains("version: '3.8'"));
}

#[test]
fn linux_install_sample_starts_with_package_update() {
    let sample = Registry::builtin()
        .lookup("install-linux")
        .and_then(|record| record.code_example)
        .expect("linux sample");
    assert!(sample.code.starts_with("# Update package index"));
}

#[test]
fn line_continuations_are_single_backslashes() {
    let sample = Registry::builtin()
        .lookup("model-runner")
        .and_then(|record| record.code_example)
        .expect("model runner sample");
    assert!(sample.code.contains("docker run -d --name tf-serving \\\n  -p 8501:8501"));
    assert!(!sample.code.contains("\\\\"));
}

#[test]
fn repeated_lookups_return_equal_records() {
    let registry = Registry::builtin();
    for key in registry.keys() {
        assert_eq!(registry.lookup(key), registry.lookup(key));
    }
}

#[test]
fn model_runner_deep_dive_is_registered() {
    let record = Registry::builtin()
        .lookup("docker-model-runner")
        .expect("deep dive");
    assert_eq!(record.title, "Docker Model Runner");
    assert_eq!(record.duration, "45 min");
    assert_eq!(record.difficulty, Difficulty::Intermediate);
}

#[test]
fn advanced_topics_are_searchable() {
    let registry = Registry::builtin();
    let advanced: Vec<_> = registry
        .iter()
        .filter(|(_, record)| record.difficulty == Difficulty::Advanced)
        .map(|(key, _)| key)
        .collect();
    assert_eq!(advanced, vec!["mcp-toolkit"]);
    assert!(registry.search("model context").any(|(key, _)| key == "mcp-toolkit"));
}

#[test]
fn summaries_serialize_to_json() {
    let json = serde_json::to_value(Registry::builtin().summaries()).expect("serialize");
    assert_eq!(json[0]["key"], "docker-desktop-intro");
    assert_eq!(json[0]["difficulty"], "Beginner");
    assert_eq!(json[0]["has_code"], true);
}
