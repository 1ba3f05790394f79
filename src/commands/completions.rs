//! Shell completions

use clap::CommandFactory;
use clap_complete::Shell;

use crate::error::Result;

/// Write completions for `shell` to `out`
pub fn write(shell: Shell, out: &mut dyn std::io::Write) {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "gsd-opencode", out);
}

/// Generate shell completions on stdout
pub fn run(shell: Shell) -> Result<()> {
    write(shell, &mut std::io::stdout().lock());
    Ok(())
}
