//! Error types and handling for the installer
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only fatal conditions live here. Soft conditions (unreadable version file,
//! missing agents directory, unknown tool names or colors, malformed frontmatter)
//! are handled where they occur and never become an [`InstallError`].

pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for installer operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallError {
    // Argument errors
    #[error("Cannot specify both --global and --local")]
    #[diagnostic(
        code(gsd_opencode::args::conflicting_scope),
        help("Pick one: --local installs into ./.opencode, --global into the OpenCode config dir")
    )]
    ConflictingScope,

    // Source layout errors
    #[error("GSD directory not found: {path}")]
    #[diagnostic(
        code(gsd_opencode::source::root_not_found),
        help("Expected the get-shit-done checkout at {path}, or pass --gsd-dir <path>")
    )]
    SourceRootNotFound { path: String },

    #[error("Missing source directory: {path}")]
    #[diagnostic(code(gsd_opencode::source::dir_missing))]
    SourceDirMissing { path: String },

    // Configuration errors
    #[error("Could not determine home directory")]
    #[diagnostic(
        code(gsd_opencode::config::home_unavailable),
        help("Pass --opencode-config-dir <path> or set XDG_CONFIG_HOME")
    )]
    HomeDirUnavailable,

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(gsd_opencode::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(gsd_opencode::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to remove: {path}: {reason}")]
    #[diagnostic(code(gsd_opencode::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(gsd_opencode::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for InstallError {
    fn from(err: std::io::Error) -> Self {
        InstallError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for InstallError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        InstallError::FileReadFailed {
            path,
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallError>;
