//! Content rewriting from Claude conventions to OpenCode conventions
//!
//! Applied to every text file copied from the library and to every converted
//! command and agent document:
//! 1. `~/.claude/` becomes the install's path prefix
//! 2. any remaining `.claude/` becomes `.opencode/`
//! 3. `/gsd:<name>` command references become `/gsd-<name>`

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Home-relative references to the Claude config directory.
const CLAUDE_HOME_REF: &str = "~/.claude/";

const CLAUDE_DIR_SEGMENT: &str = ".claude/";

const OPENCODE_DIR_SEGMENT: &str = ".opencode/";

/// Namespaced command references such as `/gsd:plan-phase`.
#[allow(clippy::unwrap_used)]
static COMMAND_REF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)/gsd:([a-z0-9-]+)").unwrap());

/// Extensions whose files are rewritten; everything else is copied byte for byte.
const TEXT_EXTENSIONS: &[&str] = &["md", "txt", "json", "yaml", "yml"];

/// True if `path` should be read and rewritten rather than copied as-is.
pub fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Rewrite Claude paths and command references for OpenCode.
///
/// `path_prefix` replaces `~/.claude/` and must end with a separator.
pub fn rewrite_content(content: &str, path_prefix: &str) -> String {
    let out = content.replace(CLAUDE_HOME_REF, path_prefix);
    let out = out.replace(CLAUDE_DIR_SEGMENT, OPENCODE_DIR_SEGMENT);
    COMMAND_REF_REGEX
        .replace_all(&out, "/gsd-$1")
        .into_owned()
}
