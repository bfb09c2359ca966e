//! System-wide constants.

/// Heading shown when a topic key has no content.
pub const COMING_SOON_HEADING: &str = "Content Coming Soon";

/// Explanatory text shown under [`COMING_SOON_HEADING`].
pub const COMING_SOON_TEXT: &str = "This tutorial section is being prepared.";

/// Label on the code panel's copy control.
pub const COPY_LABEL: &str = "Copy";

/// Default wrap width for plain-text output.
pub const DEFAULT_WIDTH: u16 = 80;

/// Narrowest wrap width accepted from configuration.
pub const MIN_WIDTH: u16 = 20;

/// Clipboard helpers probed on the host, in order of preference.
///
/// Each entry is the program name followed by its arguments. The text to
/// copy is always written to the program's standard input.
pub const CLIPBOARD_PROGRAMS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["pbcopy"],
    &["clip.exe"],
];

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV: &str = "DGUIDE_CONFIG";

/// Environment variable overriding the clipboard command.
pub const CLIPBOARD_ENV: &str = "DGUIDE_CLIPBOARD";

/// Application name used in CLI output.
pub const APP_NAME: &str = "dockguide";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "dguide";
