//! OpenCode-specific format conversions
//!
//! This module handles conversions for the OpenCode platform:
//! - Commands: Frontmatter with description only
//! - Agents: Frontmatter with name, description, mode, tools and color
//!
//! Both converters are pure; path and command-reference rewriting happens afterwards
//! in [`crate::installer::rewrite`].

use crate::frontmatter::Frontmatter;

use super::color::normalize_hex_color;
use super::tools::normalize_tools;

/// Description used when a command declares none.
pub const DEFAULT_COMMAND_DESCRIPTION: &str = "GSD command";

/// Description used when an agent declares none.
pub const DEFAULT_AGENT_DESCRIPTION: &str = "GSD agent";

/// OpenCode agent mode for every converted agent.
pub const AGENT_MODE: &str = "subagent";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Trim whitespace and byte order marks from both ends.
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

fn non_empty(value: &&str) -> bool {
    !value.is_empty()
}

/// Convert a Claude command document to OpenCode command format.
///
/// All frontmatter fields except `description` are dropped. Documents without
/// frontmatter get a synthesized one with the default description. A present but
/// empty `description` is kept empty.
pub fn convert_command(content: &str) -> String {
    let Some(fm) = Frontmatter::parse(content) else {
        return format!(
            "---\ndescription: {DEFAULT_COMMAND_DESCRIPTION}\n---\n\n{}\n",
            trim_text(content)
        );
    };

    let description = fm
        .scalar("description")
        .unwrap_or(DEFAULT_COMMAND_DESCRIPTION);

    format!(
        "---\ndescription: {description}\n---\n\n{}\n",
        fm.body().trim()
    )
}

/// Convert a Claude agent document to OpenCode agent format.
///
/// Documents without frontmatter are returned unchanged.
pub fn convert_agent(content: &str) -> String {
    let Some(fm) = Frontmatter::parse(content) else {
        return content.to_string();
    };

    let name = fm.scalar("name").filter(non_empty);
    let description = fm
        .scalar("description")
        .filter(non_empty)
        .unwrap_or(DEFAULT_AGENT_DESCRIPTION);
    let tools = normalize_tools(fm.scalar("tools"));
    let color = normalize_hex_color(fm.scalar("color"));

    let mut new_frontmatter = String::from("---\n");
    if let Some(name) = name {
        new_frontmatter.push_str(&format!("name: {name}\n"));
    }
    new_frontmatter.push_str(&format!("description: {description}\n"));
    new_frontmatter.push_str(&format!("mode: {AGENT_MODE}\n"));
    if !tools.is_empty() {
        new_frontmatter.push_str("tools:\n");
        for tool in &tools {
            new_frontmatter.push_str(&format!("  - {tool}\n"));
        }
    }
    if let Some(color) = color {
        new_frontmatter.push_str(&format!("color: \"{color}\"\n"));
    }
    new_frontmatter.push_str("---\n");

    format!("{new_frontmatter}\n{}\n", fm.body().trim())
}
