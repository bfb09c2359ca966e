//! Configuration resolution for CLI commands.
//!
//! Precedence, lowest first: built-in defaults, the JSON file named by
//! `--config` / `DGUIDE_CONFIG`, then individual flags.

use std::path::Path;

use dockguide_common::config::ViewerConfig;

/// Builds the effective configuration.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be loaded or the
/// merged values are invalid.
pub fn resolve(
    config_path: Option<&Path>,
    clipboard_command: Option<&str>,
) -> anyhow::Result<ViewerConfig> {
    let mut config = match config_path {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    if let Some(command) = clipboard_command {
        config.clipboard_command = Some(command.to_owned());
    }
    config.validate()?;
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file_or_flags() {
        let config = resolve(None, None).expect("resolve");
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn flag_overrides_file_clipboard_command() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dguide.json");
        std::fs::write(&path, r#"{ "clipboard_command": "pbcopy", "width": 60 }"#)
            .expect("write");

        let config = resolve(Some(&path), Some("wl-copy")).expect("resolve");
        assert_eq!(config.clipboard_command.as_deref(), Some("wl-copy"));
        assert_eq!(config.width, 60);
    }

    #[test]
    fn blank_clipboard_flag_is_rejected() {
        assert!(resolve(None, Some("   ")).is_err());
    }
}
