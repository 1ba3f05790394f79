//! Install configuration
//!
//! Resolves where files are read from and where they go:
//! - [`Scope`]: local (`./.opencode`) or global (OpenCode config dir)
//! - [`InstallTarget`]: target root plus the path prefix written into rewritten content
//! - [`source`]: layout of the get-shit-done checkout
//!
//! Resolution takes the working directory, home directory and `XDG_CONFIG_HOME` value as
//! explicit inputs; only [`resolve_target`] reads the process environment.

pub mod source;

use std::path::{Path, PathBuf};

use crate::error::{InstallError, Result};

pub use source::GsdSource;

/// Local install directory, relative to the working directory
pub const LOCAL_DIR: &str = ".opencode";

/// Path prefix written into content for local installs
pub const LOCAL_PATH_PREFIX: &str = "./.opencode/";

/// Directory under the config home that OpenCode reads
const OPENCODE_CONFIG_DIR: &str = "opencode";

/// Filename prefix marking files this installer generated
pub const OWNED_PREFIX: &str = "gsd-";

/// Target subdirectories
pub const COMMANDS_DIR: &str = "commands";
pub const AGENTS_DIR: &str = "agents";
pub const HOOKS_DIR: &str = "hooks";

/// Where the install goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// `./.opencode` under the working directory
    #[default]
    Local,
    /// The OpenCode config directory
    Global,
}

impl Scope {
    /// Scope from the `--local` / `--global` flags.
    pub fn from_flags(local: bool, global: bool) -> Result<Self> {
        match (local, global) {
            (true, true) => Err(InstallError::ConflictingScope),
            (_, true) => Ok(Scope::Global),
            _ => Ok(Scope::Local),
        }
    }
}

/// Resolved destination of an install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    /// Filesystem root that receives `commands/`, `agents/` and the library
    pub root: PathBuf,
    /// Replacement for `~/.claude/` inside rewritten content, always ends with `/`
    pub path_prefix: String,
    /// Human-readable location for progress output
    pub label: String,
}

impl InstallTarget {
    /// Local install into `<cwd>/.opencode`.
    pub fn local(cwd: &Path) -> Self {
        Self {
            root: cwd.join(LOCAL_DIR),
            path_prefix: LOCAL_PATH_PREFIX.to_string(),
            label: format!("./{LOCAL_DIR}"),
        }
    }

    /// Global install into `base`; `home` is only used to shorten the label.
    pub fn global(base: PathBuf, home: Option<&Path>) -> Self {
        let root_str = base.display().to_string();
        let label = match home.and_then(|h| base.strip_prefix(h).ok()) {
            Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
            Some(rest) => format!("~/{}", rest.display()),
            None => root_str.clone(),
        };
        Self {
            path_prefix: format!("{root_str}/"),
            root: base,
            label,
        }
    }

    pub fn commands_dir(&self) -> PathBuf {
        self.root.join(COMMANDS_DIR)
    }

    pub fn agents_dir(&self) -> PathBuf {
        self.root.join(AGENTS_DIR)
    }

    pub fn library_dir(&self) -> PathBuf {
        self.root.join(source::LIBRARY_DIR)
    }

    pub fn hooks_dir(&self) -> PathBuf {
        self.root.join(HOOKS_DIR)
    }
}

/// Expand a leading `~/` against `home`. Other forms are returned unchanged.
pub fn expand_tilde(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Global OpenCode config directory.
///
/// Precedence: explicit `--opencode-config-dir`, then `$XDG_CONFIG_HOME/opencode`,
/// then `<home>/.config/opencode`.
pub fn resolve_global_base(
    explicit: Option<&str>,
    xdg_config_home: Option<&str>,
    home: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(expand_tilde(dir, home));
    }

    if let Some(xdg) = xdg_config_home.filter(|x| !x.is_empty()) {
        return Ok(expand_tilde(xdg, home).join(OPENCODE_CONFIG_DIR));
    }

    let home = home.ok_or(InstallError::HomeDirUnavailable)?;
    Ok(home.join(".config").join(OPENCODE_CONFIG_DIR))
}

/// Resolve the install target for `scope`, reading `XDG_CONFIG_HOME` and the home
/// directory from the environment when a global base is needed.
pub fn resolve_target(
    scope: Scope,
    cwd: &Path,
    explicit_config_dir: Option<&str>,
) -> Result<InstallTarget> {
    match scope {
        Scope::Local => Ok(InstallTarget::local(cwd)),
        Scope::Global => {
            let home = dirs::home_dir();
            let xdg = std::env::var("XDG_CONFIG_HOME").ok();
            let base = resolve_global_base(explicit_config_dir, xdg.as_deref(), home.as_deref())?;
            Ok(InstallTarget::global(base, home.as_deref()))
        }
    }
}
