//! CLI command definitions and dispatch.

pub mod copy;
pub mod list;
pub mod show;
pub mod tui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dockguide_common::constants::{CLIPBOARD_ENV, CONFIG_ENV};

use crate::settings;

/// dockguide — Docker Desktop tutorials in your terminal.
#[derive(Parser, Debug)]
#[command(name = "dguide", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to a JSON configuration file.
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Command that receives copied code on stdin, e.g. "xclip -selection clipboard".
    #[arg(long, global = true, env = CLIPBOARD_ENV)]
    pub clipboard_command: Option<String>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List tutorial topics.
    List(list::ListArgs),
    /// Print a topic page.
    Show(show::ShowArgs),
    /// Copy a topic's code sample to the clipboard.
    Copy(copy::CopyArgs),
    /// Open the interactive reader.
    Tui(tui::TuiArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the command fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = settings::resolve(cli.config.as_deref(), cli.clipboard_command.as_deref())?;
    match cli.command {
        Command::List(args) => list::execute(&args),
        Command::Show(args) => show::execute(&args, &config),
        Command::Copy(args) => copy::execute(&args, &config),
        Command::Tui(args) => tui::execute(args, &config),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_with_width() {
        let cli = Cli::try_parse_from(["dguide", "show", "install-mac", "--width", "60"])
            .expect("parse");
        let Command::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.topic, "install-mac");
        assert_eq!(args.width, Some(60));
    }

    #[test]
    fn show_width_below_minimum_is_rejected() {
        assert!(Cli::try_parse_from(["dguide", "show", "install-mac", "--width", "5"]).is_err());
        let cli = Cli::try_parse_from(["dguide", "show", "install-mac", "--width", "20"])
            .expect("minimum width parses");
        let Command::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.width, Some(20));
    }

    #[test]
    fn parses_list_difficulty_filter() {
        let cli = Cli::try_parse_from(["dguide", "list", "--difficulty", "advanced"])
            .expect("parse");
        let Command::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(
            args.difficulty,
            Some(dockguide_common::types::Difficulty::Advanced)
        );
    }

    #[test]
    fn rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["dguide", "list", "--difficulty", "expert"]).is_err());
    }
}
