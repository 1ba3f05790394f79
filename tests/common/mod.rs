//! Common test utilities for gsd-opencode integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A test workspace: a project directory with a get-shit-done checkout beside a fake home
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Project directory the binary runs in
    pub path: PathBuf,
    /// Fake home directory, also used for HOME
    pub home: PathBuf,
}

impl TestWorkspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("project");
        let home = temp.path().join("home");
        std::fs::create_dir_all(&path).expect("Failed to create project directory");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        Self { temp, path, home }
    }

    /// Create a workspace with a populated `./get-shit-done` checkout
    pub fn with_gsd() -> Self {
        let workspace = Self::new();
        workspace.seed_gsd("get-shit-done");
        workspace
    }

    /// Populate a get-shit-done checkout at `dir`, relative to the project
    pub fn seed_gsd(&self, dir: &str) {
        self.write_file(&format!("{dir}/package.json"), r#"{"name": "get-shit-done-cc", "version": "1.9.4"}"#);

        self.write_file(
            &format!("{dir}/get-shit-done/workflows/execute-phase.md"),
            "# Execute\n\nRead @~/.claude/get-shit-done/templates/summary.md\nThen run /gsd:verify-work\n",
        );
        self.write_file(
            &format!("{dir}/get-shit-done/templates/config.json"),
            "{\"planning\": \".claude/get-shit-done/planning\"}\n",
        );
        self.write_file(&format!("{dir}/get-shit-done/assets/logo.png"), "PNG~/.claude/");

        self.write_file(
            &format!("{dir}/commands/gsd/help.md"),
            "---\nname: gsd:help\ndescription: Show available GSD commands and usage guide\n---\n\n<objective>\nRun /gsd:new-project to start.\n</objective>\n",
        );
        self.write_file(
            &format!("{dir}/commands/gsd/plan-phase.md"),
            "---\nname: gsd:plan-phase\ndescription: Create detailed execution plan for a phase\nargument-hint: \"[phase]\"\nallowed-tools:\n  - Read\n  - Bash\n---\n\n@~/.claude/get-shit-done/workflows/plan-phase.md\n",
        );
        self.write_file(&format!("{dir}/commands/gsd/quick.md"), "Run /GSD:Quick-Task now.\n");

        self.write_file(
            &format!("{dir}/agents/gsd-planner.md"),
            "---\nname: gsd-planner\ndescription: Creates executable phase plans\ntools: Read, Write, Bash, Glob, Grep, WebFetch, mcp__context7__*\ncolor: green\n---\n\nYou are a planner. See ~/.claude/get-shit-done/references/plan.md\n",
        );
        self.write_file(
            &format!("{dir}/agents/gsd-verifier.md"),
            "---\nname: gsd-verifier\ndescription: Verifies phase goals\ntools: Read, Bash, SlashCommand\ncolor: \"#FF00AA\"\n---\nVerify the work.\n",
        );
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        write(&self.path.join(path), content);
    }

    /// Read a file from the project
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Command running the binary in the project with an isolated home
    pub fn cmd(&self) -> Command {
        let mut cmd = gsd_opencode_cmd();
        cmd.current_dir(&self.path)
            .env("HOME", &self.home)
            .env_remove("XDG_CONFIG_HOME")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated, dead_code)]
pub fn gsd_opencode_cmd() -> Command {
    Command::cargo_bin("gsd-opencode").unwrap()
}

/// Write a file, creating parent directories
pub fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
        assert!(workspace.home.exists());
    }

    #[test]
    fn test_workspace_seeds_gsd() {
        let workspace = TestWorkspace::with_gsd();
        assert!(workspace.file_exists("get-shit-done/package.json"));
        assert!(workspace.file_exists("get-shit-done/commands/gsd/help.md"));
        assert!(workspace.file_exists("get-shit-done/agents/gsd-planner.md"));
    }
}
