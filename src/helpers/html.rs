//! HTML helper functions

use std::collections::{HashMap, HashSet};

/// Tags allowed in post-like content; everything else is dropped
const ALLOWED_TAGS: &[&str] = &[
    "a", "abbr", "b", "br", "cite", "code", "del", "em", "i", "ins", "kbd", "mark", "q", "s",
    "small", "span", "strong", "sub", "sup", "time", "u",
];

/// Attributes kept on allowed tags
const ALLOWED_ATTRS: &[&str] = &["href", "title", "class", "datetime", "lang", "cite"];

/// Schemes allowed in absolute link targets
const URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape a value for use inside a double-quoted attribute
pub fn esc_attr(s: &str) -> String {
    html_escape(s)
}

/// Sanitize post-like HTML: keep a small inline allowlist, drop the rest
///
/// Script and style elements are removed together with their contents;
/// other unknown tags are unwrapped and their text kept.
pub fn kses_post(s: &str) -> String {
    let mut builder = ammonia::Builder::default();
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect::<HashSet<_>>())
        .tag_attributes(HashMap::new())
        .generic_attributes(ALLOWED_ATTRS.iter().copied().collect::<HashSet<_>>())
        .url_schemes(URL_SCHEMES.iter().copied().collect::<HashSet<_>>())
        .link_rel(None);
    builder.clean(s).to_string()
}
