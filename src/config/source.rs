//! Layout of the get-shit-done source checkout

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Library directory, same name in the source and in the target
pub const LIBRARY_DIR: &str = "get-shit-done";

/// Default source checkout, relative to the working directory
pub const DEFAULT_GSD_DIR: &str = "get-shit-done";

const PACKAGE_MANIFEST: &str = "package.json";

const UNKNOWN_VERSION: &str = "unknown";

#[derive(Debug, Deserialize)]
struct PackageManifest {
    version: Option<String>,
}

/// A get-shit-done checkout to install from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GsdSource {
    root: PathBuf,
}

impl GsdSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn exists(&self) -> bool {
        self.root.exists()
    }

    /// Library copied wholesale into the target
    pub fn library_dir(&self) -> PathBuf {
        self.root.join(LIBRARY_DIR)
    }

    /// Command sources: `commands/gsd/*.md`
    pub fn commands_dir(&self) -> PathBuf {
        self.root.join("commands").join("gsd")
    }

    /// Optional agent sources: `agents/*.md`
    pub fn agents_dir(&self) -> PathBuf {
        self.root.join("agents")
    }

    /// Version from `package.json`, or `"unknown"` if it cannot be read.
    pub fn version(&self) -> String {
        std::fs::read_to_string(self.root.join(PACKAGE_MANIFEST))
            .ok()
            .and_then(|raw| serde_json::from_str::<PackageManifest>(&raw).ok())
            .and_then(|manifest| manifest.version)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string())
    }
}
