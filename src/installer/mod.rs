//! Installation of get-shit-done into an OpenCode directory
//!
//! The installation process:
//! 1. Prune `gsd-*.md` files left by previous installs in `commands/` and `agents/`
//! 2. Replace the library directory wholesale (copy with rewrite)
//! 3. Convert commands into `commands/gsd-<name>.md`
//! 4. Convert agents into `agents/<name>.md` (skipped if the source has none)
//! 5. Remove `hooks/`, which OpenCode never uses
//!
//! Steps 1 and 2 clear everything this installer owns before repopulating it, so running
//! an install twice ends in the same state. There is no rollback: a failure after step 1
//! leaves the target partially cleared.

pub mod file_ops;
pub mod formats;
pub mod rewrite;

use std::fs;
use std::path::Path;

use crate::config::{GsdSource, InstallTarget, OWNED_PREFIX};
use crate::error::Result;
use crate::error::fs::{source_dir_missing, write_failed};
use crate::ui::Reporter;

use formats::DocumentFormat;

/// Counts reported by a finished install
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallSummary {
    /// Stale `gsd-*.md` commands removed before installing
    pub pruned_commands: usize,
    /// Stale `gsd-*.md` agents removed before installing
    pub pruned_agents: usize,
    /// Files written into the library directory
    pub library_files: usize,
    /// Commands installed
    pub commands: usize,
    /// Agents installed, `None` when the source has no agents directory
    pub agents: Option<usize>,
    /// Whether a `hooks/` directory was removed
    pub hooks_removed: bool,
}

impl InstallSummary {
    /// Files written across library, commands and agents
    pub fn files_written(&self) -> usize {
        self.library_files + self.commands + self.agents.unwrap_or(0)
    }

    /// Files from earlier installs removed before repopulating
    pub fn files_pruned(&self) -> usize {
        self.pruned_commands + self.pruned_agents
    }
}

/// Installs one source checkout into one target
pub struct Installer<'a> {
    source: &'a GsdSource,
    target: &'a InstallTarget,
    reporter: &'a mut dyn Reporter,
}

impl<'a> Installer<'a> {
    pub fn new(
        source: &'a GsdSource,
        target: &'a InstallTarget,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self {
            source,
            target,
            reporter,
        }
    }

    /// Run the full install
    pub fn install(&mut self) -> Result<InstallSummary> {
        self.reporter.installing_to(&self.target.label);

        let mut summary = InstallSummary {
            pruned_commands: file_ops::remove_owned_files(&self.target.commands_dir())?,
            pruned_agents: file_ops::remove_owned_files(&self.target.agents_dir())?,
            ..InstallSummary::default()
        };

        summary.library_files = self.install_library()?;
        summary.commands = self.install_commands()?;
        summary.agents = self.install_agents()?;
        summary.hooks_removed = self.remove_hooks()?;

        Ok(summary)
    }

    fn install_library(&mut self) -> Result<usize> {
        let dest = self.target.library_dir();
        file_ops::remove_dir_if_exists(&dest)?;

        let src = self.source.library_dir();
        if !src.is_dir() {
            return Err(source_dir_missing(&src));
        }

        let written = file_ops::copy_dir_with_rewrite(
            &src,
            &dest,
            &self.target.path_prefix,
            &self.target.root,
            self.reporter,
        )?;
        self.reporter.step("Installed get-shit-done library");
        Ok(written)
    }

    fn install_commands(&mut self) -> Result<usize> {
        let src = self.source.commands_dir();
        if !src.is_dir() {
            return Err(source_dir_missing(&src));
        }

        let dest = self.target.commands_dir();
        fs::create_dir_all(&dest).map_err(|e| write_failed(&dest, &e))?;

        let files = file_ops::list_markdown_files(&src)?;
        for file in &files {
            let target = dest.join(command_file_name(file));
            file_ops::install_document(
                file,
                &target,
                DocumentFormat::Command,
                &self.target.path_prefix,
            )?;
            self.report_written(&target);
        }

        self.reporter
            .step(&format!("Installed {} commands", files.len()));
        Ok(files.len())
    }

    fn install_agents(&mut self) -> Result<Option<usize>> {
        let src = self.source.agents_dir();
        if !src.is_dir() {
            self.reporter.warn("No agents directory found, skipping");
            return Ok(None);
        }

        let dest = self.target.agents_dir();
        fs::create_dir_all(&dest).map_err(|e| write_failed(&dest, &e))?;

        let files = file_ops::list_markdown_files(&src)?;
        for file in &files {
            let Some(name) = file.file_name() else {
                continue;
            };
            let target = dest.join(name);
            file_ops::install_document(
                file,
                &target,
                DocumentFormat::Agent,
                &self.target.path_prefix,
            )?;
            self.report_written(&target);
        }

        self.reporter
            .step(&format!("Installed {} agents", files.len()));
        Ok(Some(files.len()))
    }

    fn report_written(&mut self, path: &Path) {
        let relative = path.strip_prefix(&self.target.root).unwrap_or(path);
        self.reporter.file_written(relative);
    }

    fn remove_hooks(&mut self) -> Result<bool> {
        let removed = file_ops::remove_dir_if_exists(&self.target.hooks_dir())?;
        if removed {
            self.reporter.step("Removed hooks (not used for OpenCode)");
        }
        Ok(removed)
    }
}

/// `plan-phase.md` → `gsd-plan-phase.md`
fn command_file_name(source: &Path) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    format!("{OWNED_PREFIX}{stem}.md")
}
