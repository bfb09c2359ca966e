//! # dguide — dockguide CLI
//!
//! Browse Docker Desktop tutorials from the terminal.
//! Lists topics, prints pages, copies code samples, and hosts the
//! interactive reader.

mod commands;
mod output;
mod settings;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
