//! Unified error types for the dockguide workspace.
//!
//! Library crates return [`GuideError`]; the binary wraps it in `anyhow`.
//! A missing topic is never an error on the rendering path: it only surfaces
//! as [`GuideError::NotFound`] from commands that need a concrete record.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum GuideError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A required resource was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Type of the missing resource.
        kind: &'static str,
        /// Identifier of the missing resource.
        id: String,
    },

    /// A content catalog violates the registry invariants.
    #[error("invalid catalog: {message}")]
    InvalidCatalog {
        /// Which entry is at fault and why.
        message: String,
    },

    /// Writing to the clipboard failed.
    #[error("clipboard error: {message}")]
    Clipboard {
        /// Description of the failure.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, GuideError>;
