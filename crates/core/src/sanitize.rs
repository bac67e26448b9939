//! Type-name derivation from URLs and API paths.

use crate::error::{ArtGenError, Result};

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Derive a type name from a URL or path.
///
/// The scheme is stripped, every run of non-alphanumeric characters splits a
/// segment, and each segment gets its first letter upper-cased (the rest of
/// the segment keeps its casing). Returns an empty string when nothing
/// alphanumeric is left; callers must treat that as "no name".
pub fn sanitize_type_name(input: &str) -> String {
    let rest = SCHEMES
        .iter()
        .find_map(|scheme| input.strip_prefix(scheme))
        .unwrap_or(input);

    rest.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_ascii_uppercase().to_string() + chars.as_str()
            })
        })
        .collect()
}

/// Use the explicit name if one was given, otherwise derive it from `origin`.
///
/// Blank explicit names count as absent. Fails when the derived name is empty.
pub fn resolve_type_name(explicit: Option<&str>, origin: &str) -> Result<String> {
    if let Some(name) = explicit.map(str::trim).filter(|name| !name.is_empty()) {
        return Ok(name.to_string());
    }
    let derived = sanitize_type_name(origin);
    if derived.is_empty() {
        return Err(ArtGenError::EmptyTypeName {
            origin: origin.to_string(),
        });
    }
    Ok(derived)
}
