//! Naming and quoting helpers shared by inference and emission.

use std::fmt::Write as _;

/// Check if a property name must be quoted to be a valid object key.
///
/// Returns true if the name:
/// - Is empty
/// - Doesn't start with a letter, underscore, or dollar sign
/// - Contains characters other than alphanumeric, underscore, or dollar sign
pub fn needs_quotes(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escape a string for use in a double-quoted JavaScript/TypeScript literal.
///
/// Line terminators (including U+2028/U+2029) and other control characters
/// are escaped so the literal stays on one line.
pub fn escape_js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out
}

/// Quote a property key if it is not a valid identifier.
pub fn quote_if_needed(name: &str) -> String {
    if needs_quotes(name) {
        format!("\"{}\"", escape_js_string(name))
    } else {
        name.to_string()
    }
}

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Convert an arbitrary key (`user_id`, `created-at`, `fooBar`) to PascalCase.
///
/// Returns an empty string when the key has no alphanumeric characters.
pub fn pascal_case(key: &str) -> String {
    key.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(capitalize_first)
        .collect()
}

/// Make a declaration name a valid TypeScript identifier.
///
/// Separators are removed PascalCase-style (`user-info` -> `UserInfo`), a
/// leading digit gets a `T` prefix, and a name with nothing alphanumeric left
/// falls back to `fallback`.
pub fn type_identifier(name: &str, fallback: &str) -> String {
    let cleaned = pascal_case(name);
    let name = if cleaned.is_empty() {
        fallback
    } else {
        cleaned.as_str()
    };
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("T{name}")
    } else {
        name.to_string()
    }
}

/// Naive English singular used for array element type names (`users` -> `user`).
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies")
        && !stem.is_empty()
    {
        return format!("{stem}y");
    }
    if word.ends_with("ss") || word.len() <= 1 {
        return word.to_string();
    }
    word.strip_suffix('s').unwrap_or(word).to_string()
}
