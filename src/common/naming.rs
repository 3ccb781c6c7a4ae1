//! Identifier normalization for emitted file names and cross-references.
//!
//! Every command, droid and in-body reference goes through [`normalize_name`],
//! so a name written into a file path always matches the name used to refer
//! to it from another file.

/// Returned when a name has no usable characters left after normalization.
pub const FALLBACK_NAME: &str = "item";

/// Separator between namespace segments in a Claude command name.
pub const NAMESPACE_SEPARATOR: char = ':';

/// Canonicalize an arbitrary string into a lowercase slug.
///
/// Path separators, colons, whitespace and every other character outside
/// `[a-z0-9_-]` become a single hyphen. Leading and trailing hyphens are
/// dropped. Blank input returns [`FALLBACK_NAME`].
///
/// # Examples
/// ```
/// use droidify::common::naming::normalize_name;
/// assert_eq!(normalize_name("Security Reviewer"), "security-reviewer");
/// assert_eq!(normalize_name("a/b\\c:d"), "a-b-c-d");
/// assert_eq!(normalize_name("  !!  "), "item");
/// ```
pub fn normalize_name(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());

    for c in value.trim().to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        slug.to_string()
    }
}

/// Flatten a possibly namespaced command name to its normalized leaf.
///
/// Only the text after the last `:` survives, so `workflows:plan` and
/// `review:plan` both become `plan`.
///
/// # Examples
/// ```
/// use droidify::common::naming::flatten_command_name;
/// assert_eq!(flatten_command_name("workflows:plan"), "plan");
/// assert_eq!(flatten_command_name("plan_review"), "plan_review");
/// ```
pub fn flatten_command_name(name: &str) -> String {
    let leaf = name
        .rsplit_once(NAMESPACE_SEPARATOR)
        .map_or(name, |(_, leaf)| leaf);
    normalize_name(leaf)
}
