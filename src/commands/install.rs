//! Install command implementation
//!
//! 1. Resolve the source checkout and print the banner
//! 2. Validate the scope flags
//! 3. Resolve the install target (local or global)
//! 4. Run the installer and report

use std::path::Path;

use crate::cli::Cli;
use crate::config::{self, GsdSource, Scope, source::DEFAULT_GSD_DIR};
use crate::error::{InstallError, Result};
use crate::installer::{InstallSummary, Installer};
use crate::ui::{ConsoleReporter, Reporter, SilentReporter};

/// Source checkout from `--gsd-dir`, or `./get-shit-done`
fn resolve_source(gsd_dir: Option<&str>, cwd: &Path, home: Option<&Path>) -> GsdSource {
    let root = gsd_dir.map_or_else(
        || cwd.join(DEFAULT_GSD_DIR),
        |dir| config::expand_tilde(dir, home),
    );
    GsdSource::new(root)
}

/// Run the install for parsed arguments
pub fn run(cli: &Cli) -> Result<InstallSummary> {
    let mut reporter: Box<dyn Reporter> = if cli.quiet {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter::new(cli.verbose))
    };

    let cwd = std::env::current_dir()?;
    let home = dirs::home_dir();
    let source = resolve_source(cli.gsd_dir.as_deref(), &cwd, home.as_deref());

    execute(cli, &cwd, &source, reporter.as_mut())
}

fn execute(
    cli: &Cli,
    cwd: &Path,
    source: &GsdSource,
    reporter: &mut dyn Reporter,
) -> Result<InstallSummary> {
    reporter.banner(&source.version());

    let scope = Scope::from_flags(cli.local, cli.global)?;

    if !source.exists() {
        return Err(InstallError::SourceRootNotFound {
            path: source.root().display().to_string(),
        });
    }

    let target = config::resolve_target(scope, cwd, cli.opencode_config_dir.as_deref())?;
    let summary = Installer::new(source, &target, reporter).install()?;
    if summary.files_pruned() > 0 {
        reporter.step(&format!(
            "Replaced {} files from a previous install",
            summary.files_pruned()
        ));
    }
    reporter.done(summary.files_written());

    Ok(summary)
}
