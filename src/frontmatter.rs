//! Line-oriented frontmatter reading.
//!
//! Frontmatter is treated as a flat list of `key: value` scalar lines between two
//! `---` delimiters at the very start of a document. Nested YAML is not interpreted.

use std::sync::LazyLock;

use regex::Regex;

/// Leading `---` block, lazily matched, followed by the rest of the document.
#[allow(clippy::unwrap_used)]
static FRONTMATTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^---\s*\n([\s\S]*?)\n---\s*\n([\s\S]*)$").unwrap());

/// A document split into its leading frontmatter block and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    block: &'a str,
    body: &'a str,
}

impl<'a> Frontmatter<'a> {
    /// Split `content` into frontmatter and body.
    ///
    /// Returns `None` unless the document opens with a delimiter line, has a closing
    /// delimiter line, and the closing delimiter is followed by a line break.
    pub fn parse(content: &'a str) -> Option<Self> {
        let caps = FRONTMATTER_REGEX.captures(content)?;
        let block = caps.get(1)?.as_str();
        let body = caps.get(2)?.as_str();
        Some(Self { block, body })
    }

    /// Raw text between the delimiters.
    pub fn block(&self) -> &'a str {
        self.block
    }

    /// Everything after the closing delimiter line.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// First top-level scalar named `key`, see [`get_scalar`].
    pub fn scalar(&self, key: &str) -> Option<&'a str> {
        get_scalar(self.block(), key)
    }
}

/// Get the trimmed value of the first line whose trimmed text starts with `<key>:`.
///
/// Later lines with the same key are ignored.
pub fn get_scalar<'a>(block: &'a str, key: &str) -> Option<&'a str> {
    block.lines().find_map(|line| {
        line.trim()
            .strip_prefix(key)
            .and_then(|rest| rest.strip_prefix(':'))
            .map(str::trim)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_frontmatter() {
        assert!(Frontmatter::parse("just body\nno delimiters").is_none());
    }

    #[test]
    fn parse_requires_leading_delimiter() {
        let content = "intro\n---\ndescription: x\n---\nbody";
        assert!(Frontmatter::parse(content).is_none());
    }

    #[test]
    fn parse_requires_newline_after_closing_delimiter() {
        assert!(Frontmatter::parse("---\ndescription: x\n---").is_none());
    }

    #[test]
    fn test_parse_frontmatter_and_body() {
        let content = "---\ndescription: hello\n---\n\nbody here\n";
        let fm = Frontmatter::parse(content).expect("Should parse frontmatter and body");
        assert_eq!(fm.block(), "description: hello");
        assert_eq!(fm.body(), "body here\n");
        assert_eq!(fm.scalar("description"), Some("hello"));
    }

    #[test]
    fn parse_stops_at_first_closing_delimiter() {
        let content = "---\nname: a\n---\nbody\n---\nmore\n";
        let fm = Frontmatter::parse(content).expect("Should parse frontmatter and body");
        assert_eq!(fm.block(), "name: a");
        assert_eq!(fm.body(), "body\n---\nmore\n");
    }

    #[test]
    fn parse_tolerates_trailing_whitespace_on_delimiters() {
        let content = "---  \r\nname: a\r\n---\t\nbody";
        let fm = Frontmatter::parse(content).expect("Should parse frontmatter and body");
        assert_eq!(fm.scalar("name"), Some("a"));
        assert_eq!(fm.body(), "body");
    }

    #[test]
    fn get_scalar_first_match_wins() {
        let block = "name: first\ndescription: d\nname: second";
        assert_eq!(get_scalar(block, "name"), Some("first"));
    }

    #[test]
    fn get_scalar_trims_line_and_value() {
        let block = "   color:    cyan   ";
        assert_eq!(get_scalar(block, "color"), Some("cyan"));
    }

    #[test]
    fn get_scalar_requires_colon_after_key() {
        let block = "namespace: other\nnames: x";
        assert_eq!(get_scalar(block, "name"), None);
    }

    #[test]
    fn get_scalar_missing_key() {
        assert_eq!(get_scalar("description: d", "tools"), None);
    }

    #[test]
    fn get_scalar_keeps_colons_in_value() {
        let block = "description: Run /gsd:plan-phase: then execute";
        assert_eq!(
            get_scalar(block, "description"),
            Some("Run /gsd:plan-phase: then execute")
        );
    }

    #[test]
    fn get_scalar_empty_value() {
        assert_eq!(get_scalar("tools:", "tools"), Some(""));
    }
}
