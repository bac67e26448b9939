//! Input validators shared by the interactive prompts and the flag parser.
//!
//! Each validator returns `Err` with a message fit to show next to the
//! prompt that produced the input.

use std::path::Path;

/// Reject empty or whitespace-only input.
pub fn required(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("Input must not be empty".to_string());
    }
    Ok(())
}

/// Require an absolute URL (`https://api.example.com`).
pub fn url(input: &str) -> Result<(), String> {
    required(input)?;
    url::Url::parse(input.trim())
        .map(|_| ())
        .map_err(|err| format!("Please enter a valid URL ({err})"))
}

/// Require the parent directory of `input` to exist.
///
/// Used for output files (the file itself is created) and for output
/// directories (the directory itself is created if missing). A bare file
/// name has the current directory as its parent.
pub fn parent_dir_exists(input: &str) -> Result<(), String> {
    required(input)?;
    let path = Path::new(input.trim());
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if parent.is_dir() {
        Ok(())
    } else {
        Err(format!("Directory does not exist: {}", parent.display()))
    }
}
