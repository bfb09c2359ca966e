//! Configuration model for the dockguide viewer.
//!
//! Values come from an optional JSON file; command-line flags and
//! environment variables are layered on top by the binary.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WIDTH, MIN_WIDTH};
use crate::error::{GuideError, Result};

/// Root configuration for the viewer surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Wrap width for plain-text output.
    pub width: u16,
    /// Explicit clipboard command line, e.g. `"xclip -selection clipboard"`.
    ///
    /// When unset, the first clipboard helper found on `PATH` is used.
    pub clipboard_command: Option<String>,
    /// Topic opened when the interactive reader starts without an argument.
    pub start_topic: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            clipboard_command: None,
            start_topic: None,
        }
    }
}

impl ViewerConfig {
    /// Loads configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds out-of-range values.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading viewer configuration");
        let raw = std::fs::read_to_string(path).map_err(|e| GuideError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_WIDTH {
            return Err(GuideError::Config {
                message: format!("width must be at least {MIN_WIDTH}, got {}", self.width),
            });
        }
        if self
            .clipboard_command
            .as_deref()
            .is_some_and(|cmd| cmd.trim().is_empty())
        {
            return Err(GuideError::Config {
                message: "clipboard_command must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Splits the configured clipboard command into program and arguments.
    #[must_use]
    pub fn clipboard_argv(&self) -> Option<Vec<String>> {
        self.clipboard_command
            .as_deref()
            .map(|cmd| cmd.split_whitespace().map(str::to_owned).collect::<Vec<_>>())
            .filter(|argv| !argv.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ViewerConfig::default();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_fills_missing_fields_with_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dguide.json");
        std::fs::write(&path, r#"{ "start_topic": "install-mac" }"#).expect("write");

        let config = ViewerConfig::load(&path).expect("load");
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.start_topic.as_deref(), Some("install-mac"));
        assert!(config.clipboard_command.is_none());
    }

    #[test]
    fn load_rejects_narrow_width() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dguide.json");
        std::fs::write(&path, r#"{ "width": 5 }"#).expect("write");

        let err = ViewerConfig::load(&path).expect_err("should reject");
        assert!(matches!(err, GuideError::Config { .. }));
    }

    #[test]
    fn load_rejects_unknown_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dguide.json");
        std::fs::write(&path, r#"{ "colour": "blue" }"#).expect("write");

        let err = ViewerConfig::load(&path).expect_err("should reject");
        assert!(matches!(err, GuideError::Serialization { .. }));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = ViewerConfig::load(&dir.path().join("absent.json")).expect_err("missing");
        assert!(matches!(err, GuideError::Io { .. }));
    }

    #[test]
    fn clipboard_argv_splits_on_whitespace() {
        let config = ViewerConfig {
            clipboard_command: Some("xclip  -selection clipboard".into()),
            ..ViewerConfig::default()
        };
        assert_eq!(
            config.clipboard_argv(),
            Some(vec![
                "xclip".to_string(),
                "-selection".to_string(),
                "clipboard".to_string()
            ])
        );
    }
}
