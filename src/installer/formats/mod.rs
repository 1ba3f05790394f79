//! Claude → OpenCode format conversions
//!
//! - [`opencode`]: command and agent document converters
//! - [`tools`]: agent tool list normalization
//! - [`color`]: agent color normalization

pub mod color;
pub mod opencode;
pub mod tools;

/// How a markdown document is reshaped before content rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Slash command: frontmatter reduced to `description`
    Command,
    /// Subagent: frontmatter rebuilt for OpenCode
    Agent,
    /// Library file: content kept as-is
    Passthrough,
}

impl DocumentFormat {
    /// Convert `content` into this format.
    pub fn convert(self, content: &str) -> String {
        match self {
            DocumentFormat::Command => opencode::convert_command(content),
            DocumentFormat::Agent => opencode::convert_agent(content),
            DocumentFormat::Passthrough => content.to_string(),
        }
    }
}
