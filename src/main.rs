//! gsd-opencode - get-shit-done installer for OpenCode
//!
//! Converts Claude-style command and agent markdown from a get-shit-done checkout into
//! OpenCode's layout and installs it locally (`./.opencode`) or globally (the OpenCode
//! config directory).

use clap::Parser;
use clap::error::ErrorKind;

mod cli;
mod commands;
mod config;
mod error;
mod frontmatter;
mod installer;
mod ui;

use cli::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let result = match cli.completions {
        Some(shell) => commands::completions::run(shell),
        None => commands::install::run(&cli).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}
