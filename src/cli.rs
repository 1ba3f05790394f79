//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use clap_complete::Shell;

/// GSD OpenCode Installer
///
/// Converts the get-shit-done commands, agents and library to OpenCode format and installs them.
#[derive(Parser, Debug)]
#[command(
    name = "gsd-opencode",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default().bold())
        .usage(AnsiColor::Yellow.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install get-shit-done into OpenCode",
    long_about = "Converts get-shit-done commands, agents and its library from Claude format \
                  to OpenCode format and installs them into ./.opencode or the global OpenCode \
                  config directory.",
    after_help = "\x1b[1m\x1b[33mExamples:\x1b[0m\n    \
                  \x1b[2m# Project-local install\x1b[0m\n    \
                  gsd-opencode --local\n\n    \
                  \x1b[2m# Global install\x1b[0m\n    \
                  gsd-opencode --global\n\n    \
                  \x1b[2m# If your submodule lives elsewhere\x1b[0m\n    \
                  gsd-opencode --gsd-dir ./vendor/get-shit-done --local"
)]
pub struct Cli {
    /// Install into ./.opencode (default)
    #[arg(long, short = 'l')]
    pub local: bool,

    /// Install into the OpenCode config dir ($XDG_CONFIG_HOME/opencode or ~/.config/opencode)
    #[arg(long, short = 'g')]
    pub global: bool,

    /// Override the global OpenCode config dir
    #[arg(long, short = 'c', value_name = "PATH")]
    pub opencode_config_dir: Option<String>,

    /// Path to the get-shit-done (submodule) directory
    #[arg(long, value_name = "PATH")]
    pub gsd_dir: Option<String>,

    /// List every file written
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
