//! Clipboard seam for the code panel's copy action.
//!
//! The viewer never inspects clipboard results: a failed write is logged
//! and the page stays as it was.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use dockguide_common::config::ViewerConfig;
use dockguide_common::constants::CLIPBOARD_PROGRAMS;
use dockguide_common::error::{GuideError, Result};

/// Destination for copied text.
pub trait Clipboard {
    /// Places `text` on the clipboard exactly as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard could not be written.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The copy control of a code panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyAction<'a> {
    text: &'a str,
}

impl<'a> CopyAction<'a> {
    /// Creates an action that copies `text`.
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Text that will be copied.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Writes the text to `clipboard` without transforming it.
    ///
    /// Returns whether the clipboard accepted the text. Failures are logged
    /// and otherwise ignored.
    pub fn invoke(&self, clipboard: &mut dyn Clipboard) -> bool {
        match clipboard.write_text(self.text) {
            Ok(()) => {
                tracing::debug!(bytes = self.text.len(), "copied code sample");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                false
            }
        }
    }
}

/// In-process clipboard that remembers every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Vec<String>,
}

impl MemoryClipboard {
    /// Creates an empty clipboard.
    #[must_use]
    pub const fn new() -> Self {
        Self { writes: Vec::new() }
    }

    /// The most recent write.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    /// Every write, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.writes
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.writes.push(text.to_owned());
        Ok(())
    }
}

/// Clipboard backed by a host helper program reading standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Finds the first clipboard helper available on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::NotFound`] if none of the known helpers exist.
    pub fn detect() -> Result<Self> {
        for argv in CLIPBOARD_PROGRAMS {
            let Some((name, args)) = argv.split_first() else {
                continue;
            };
            if let Ok(program) = which::which(name) {
                tracing::debug!(program = %program.display(), "detected clipboard helper");
                return Ok(Self {
                    program,
                    args: args.iter().map(|arg| (*arg).to_owned()).collect(),
                });
            }
        }
        Err(GuideError::NotFound {
            kind: "clipboard helper",
            id: "wl-copy, xclip, xsel, pbcopy, or clip.exe (install one or set DGUIDE_CLIPBOARD)"
                .into(),
        })
    }

    /// Uses an explicit command line, resolving the program on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns an error if `argv` is empty or the program cannot be found.
    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (name, args) = argv.split_first().ok_or_else(|| GuideError::Config {
            message: "clipboard command is empty".into(),
        })?;
        let program = which::which(name).map_err(|_| GuideError::NotFound {
            kind: "clipboard command",
            id: name.clone(),
        })?;
        Ok(Self {
            program,
            args: args.to_vec(),
        })
    }

    /// Uses the configured command, or detects a helper when none is set.
    ///
    /// # Errors
    ///
    /// Returns an error if no usable clipboard program is found.
    pub fn from_config(config: &ViewerConfig) -> Result<Self> {
        match config.clipboard_argv() {
            Some(argv) => Self::from_argv(&argv),
            None => Self::detect(),
        }
    }

    /// Resolved helper program.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let io_err = |source: std::io::Error| GuideError::Io {
            path: self.program.clone(),
            source,
        };
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(io_err)?;
        // Close stdin before waiting; the child is reaped even if the write failed.
        let written = child
            .stdin
            .take()
            .map_or(Ok(()), |mut stdin| stdin.write_all(text.as_bytes()));
        let status = child.wait().map_err(io_err)?;
        written.map_err(io_err)?;
        if status.success() {
            Ok(())
        } else {
            Err(GuideError::Clipboard {
                message: format!("{} exited with {status}", self.program.display()),
            })
        }
    }
}

/// Clipboard that can be switched off, e.g. when no helper is installed.
///
/// Writes to a disabled clipboard fail with [`GuideError::Clipboard`].
#[derive(Debug)]
pub enum HostClipboard {
    /// A helper program was found.
    Command(CommandClipboard),
    /// No helper is available; the reason is reported on each write.
    Unavailable(String),
}

impl HostClipboard {
    /// Resolves the host clipboard from configuration, never failing.
    #[must_use]
    pub fn from_config(config: &ViewerConfig) -> Self {
        match CommandClipboard::from_config(config) {
            Ok(clipboard) => Self::Command(clipboard),
            Err(e) => {
                tracing::info!(reason = %e, "clipboard unavailable");
                Self::Unavailable(e.to_string())
            }
        }
    }
}

impl Clipboard for HostClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        match self {
            Self::Command(clipboard) => clipboard.write_text(text),
            Self::Unavailable(reason) => Err(GuideError::Clipboard {
                message: reason.clone(),
            }),
        }
    }
}
