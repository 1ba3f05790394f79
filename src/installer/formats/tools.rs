//! Tool-ID normalization for OpenCode agent frontmatter
//!
//! Claude agents declare tools as a comma list of PascalCase names
//! (`tools: Read, Bash, WebFetch`). OpenCode expects lowercase tool IDs:
//! <https://opencode.ai/docs/tools/>

use std::collections::HashSet;

/// Prefix of MCP-provided tools; these are passed through untouched.
pub const VENDOR_TOOL_PREFIX: &str = "mcp__";

/// Claude tool name to OpenCode tool ID (case-sensitive).
const TOOL_MAP: &[(&str, &str)] = &[
    ("Read", "read"),
    ("Write", "write"),
    ("Edit", "edit"),
    ("Bash", "bash"),
    ("Grep", "grep"),
    ("Glob", "glob"),
    ("List", "list"),
    ("Patch", "patch"),
    ("WebFetch", "webfetch"),
    ("AskUserQuestion", "question"),
    ("Question", "question"),
    ("TodoWrite", "todowrite"),
    ("TodoRead", "todoread"),
    ("Skill", "skill"),
    ("LSP", "lsp"),
];

/// Tool IDs OpenCode actually accepts.
const OPENCODE_TOOLS: &[&str] = &[
    "bash",
    "edit",
    "write",
    "read",
    "grep",
    "glob",
    "list",
    "lsp",
    "patch",
    "skill",
    "todowrite",
    "todoread",
    "webfetch",
    "question",
];

fn map_tool(name: &str) -> Option<&'static str> {
    TOOL_MAP
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .filter(|id| OPENCODE_TOOLS.contains(id))
}

/// Normalize a comma-separated Claude tool list into OpenCode tool IDs.
///
/// Unknown names are dropped, MCP tools pass through verbatim, and the result keeps
/// first-occurrence order with no duplicate IDs.
pub fn normalize_tools(tools: Option<&str>) -> Vec<String> {
    let Some(tools) = tools else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for token in tools.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let id = if token.starts_with(VENDOR_TOOL_PREFIX) {
            token
        } else {
            match map_tool(token) {
                Some(id) => id,
                None => continue,
            }
        };

        if seen.insert(id) {
            out.push(id.to_string());
        }
    }

    out
}
