//! UI/Progress presentation layer
//!
//! All installer output goes through the [`Reporter`] trait so the installer itself
//! never prints:
//! - [`ConsoleReporter`]: styled step lines, a file progress bar, per-file lines with `--verbose`
//! - [`SilentReporter`]: no output, used with `--quiet` and in tests

use std::path::Path;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Receives progress events from an install run
pub trait Reporter {
    /// Installer name and the version of the source being installed
    fn banner(&mut self, version: &str);

    /// Location the run writes to
    fn installing_to(&mut self, label: &str);

    /// A batch of `total` files is about to be written
    fn begin_files(&mut self, total: u64);

    /// One file of the current batch was written
    fn file_written(&mut self, path: &Path);

    /// The current batch is complete
    fn finish_files(&mut self);

    /// A step completed
    fn step(&mut self, message: &str);

    /// A step was skipped or degraded without failing the run
    fn warn(&mut self, message: &str);

    /// The whole run completed after writing `files` files
    fn done(&mut self, files: usize);
}

/// Console reporter with colored output
pub struct ConsoleReporter {
    verbose: bool,
    file_pb: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            file_pb: None,
        }
    }
}

impl Reporter for ConsoleReporter {
    fn banner(&mut self, version: &str) {
        println!();
        println!(
            "  {} {}",
            Style::new().cyan().apply_to("GSD OpenCode Installer"),
            Style::new().dim().apply_to(format!("v{version}"))
        );
        println!();
    }

    fn installing_to(&mut self, label: &str) {
        println!("  Installing to {}", Style::new().cyan().apply_to(label));
        println!();
    }

    fn begin_files(&mut self, total: u64) {
        if self.verbose {
            return;
        }
        let file_style = ProgressStyle::default_bar()
            .template("  [{bar:40.green/yellow}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏  ");

        let file_pb = ProgressBar::new(total);
        file_pb.set_style(file_style);
        self.file_pb = Some(file_pb);
    }

    fn file_written(&mut self, path: &Path) {
        let path = path.display().to_string();
        if self.verbose {
            println!("    {}", Style::new().dim().apply_to(&path));
            return;
        }
        if let Some(ref file_pb) = self.file_pb {
            // Truncate long paths for display
            let len = path.chars().count();
            let display_path = if len > 50 {
                let tail: String = path.chars().skip(len - 47).collect();
                format!("...{tail}")
            } else {
                path
            };
            file_pb.set_message(display_path);
            file_pb.inc(1);
        }
    }

    fn finish_files(&mut self) {
        if let Some(file_pb) = self.file_pb.take() {
            file_pb.finish_and_clear();
        }
    }

    fn step(&mut self, message: &str) {
        println!("  {} {message}", Style::new().green().apply_to("✓"));
    }

    fn warn(&mut self, message: &str) {
        println!("  {} {message}", Style::new().yellow().apply_to("⚠"));
    }

    fn done(&mut self, files: usize) {
        println!();
        println!(
            "  {} Wrote {files} files. In OpenCode, run {}.",
            Style::new().green().apply_to("Done!"),
            Style::new().cyan().apply_to("/gsd-help")
        );
        println!();
    }
}

/// Silent reporter for quiet mode
///
/// No-op implementation that does not display anything.
#[derive(Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn banner(&mut self, _version: &str) {}

    fn installing_to(&mut self, _label: &str) {}

    fn begin_files(&mut self, _total: u64) {}

    fn file_written(&mut self, _path: &Path) {}

    fn finish_files(&mut self) {}

    fn step(&mut self, _message: &str) {}

    fn warn(&mut self, _message: &str) {}

    fn done(&mut self, _files: usize) {}
}

/// Reporter that records events for assertions
#[cfg(test)]
#[derive(Default, Debug)]
pub struct RecordingReporter {
    pub steps: Vec<String>,
    pub warnings: Vec<String>,
    pub files: Vec<std::path::PathBuf>,
    pub batches: Vec<u64>,
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn banner(&mut self, _version: &str) {}

    fn installing_to(&mut self, _label: &str) {}

    fn begin_files(&mut self, total: u64) {
        self.batches.push(total);
    }

    fn file_written(&mut self, path: &Path) {
        self.files.push(path.to_path_buf());
    }

    fn finish_files(&mut self) {}

    fn step(&mut self, message: &str) {
        self.steps.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn done(&mut self, _files: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_reporter_no_ops() {
        let mut reporter = SilentReporter;

        // All methods should do nothing and not panic
        reporter.banner("1.0.0");
        reporter.installing_to("./.opencode");
        reporter.begin_files(3);
        reporter.file_written(Path::new("a.md"));
        reporter.finish_files();
        reporter.step("done");
        reporter.warn("skipped");
        reporter.done(3);
    }

    #[test]
    fn test_console_reporter_file_progress() {
        let mut reporter = ConsoleReporter::new(false);
        reporter.begin_files(2);
        reporter.file_written(Path::new("get-shit-done/workflows/a-very-long-workflow-name-for-truncation.md"));
        assert_eq!(reporter.file_pb.as_ref().map(ProgressBar::position), Some(1));
        reporter.finish_files();
        assert!(reporter.file_pb.is_none());
    }

    #[test]
    fn test_console_reporter_verbose_skips_progress_bar() {
        let mut reporter = ConsoleReporter::new(true);
        reporter.begin_files(2);
        assert!(reporter.file_pb.is_none());
    }
}
