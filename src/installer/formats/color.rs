//! Agent color normalization
//!
//! OpenCode only accepts `#rrggbb` colors, while Claude agents commonly use names.

/// Named colors mapped to their Tailwind 500 shade.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("green", "#22c55e"),
    ("yellow", "#eab308"),
    ("cyan", "#06b6d4"),
    ("blue", "#3b82f6"),
    ("purple", "#a855f7"),
    ("red", "#ef4444"),
    ("orange", "#f97316"),
    ("gray", "#64748b"),
    ("grey", "#64748b"),
    ("white", "#ffffff"),
    ("black", "#000000"),
];

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Normalize a color token to lowercase `#rrggbb`, or `None` if it is not recognized.
pub fn normalize_hex_color(color: Option<&str>) -> Option<String> {
    let value = color?.trim();
    if value.is_empty() {
        return None;
    }

    if is_hex_color(value) {
        return Some(value.to_ascii_lowercase());
    }

    let named = value.to_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == named)
        .map(|(_, hex)| (*hex).to_string())
}
