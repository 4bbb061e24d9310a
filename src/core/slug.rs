/// Used when nothing of the name survives sanitising.
pub const DEFAULT_SLUG: &str = "client";

/// Derives the output file stem from a client name.
///
/// Trims, lowercases, drops every character outside `[a-z0-9- ]` and turns
/// each remaining space into a hyphen. Runs of spaces are not collapsed.
pub fn slugify(name: &str) -> String {
    let slug: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == ' ')
        .map(|c| if c == ' ' { '-' } else { c })
        .collect();

    if slug.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        slug
    }
}
