//! File system errors

use std::path::Path;

use super::InstallError;

/// Creates a read failure for `path`
pub fn read_failed(path: &Path, err: &std::io::Error) -> InstallError {
    InstallError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a write failure for `path`
pub fn write_failed(path: &Path, err: &std::io::Error) -> InstallError {
    InstallError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a removal failure for `path`
pub fn remove_failed(path: &Path, err: &std::io::Error) -> InstallError {
    InstallError::RemoveFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a missing-source failure for `path`
pub fn source_dir_missing(path: &Path) -> InstallError {
    InstallError::SourceDirMissing {
        path: path.display().to_string(),
    }
}
