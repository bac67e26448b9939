//! Where generated files go: explicit flags win, otherwise ask.

use std::path::PathBuf;

use artgen_core::type_file_name;
use artgen_core::validate::parent_dir_exists;

use crate::common::desktop_dir;
use crate::prompt::Prompt;

/// Directory created under the Desktop for batch output.
pub const DEFAULT_DIR_NAME: &str = "types";

/// `~/Desktop/<TypeName>.ts`.
pub fn default_output_file(type_name: &str) -> PathBuf {
    desktop_dir().join(type_file_name(type_name))
}

/// `~/Desktop/types`.
pub fn default_output_dir() -> PathBuf {
    desktop_dir().join(DEFAULT_DIR_NAME)
}

/// Resolve the file a single generation writes to.
pub fn resolve_output_file<P: Prompt + ?Sized>(
    explicit: Option<PathBuf>,
    type_name: &str,
    prompt: &mut P,
) -> Result<PathBuf, String> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let default = default_output_file(type_name).to_string_lossy().into_owned();
    let answer = prompt.input(
        "Full path of the file to save",
        Some(default.as_str()),
        Some(parent_dir_exists),
    )?;
    Ok(PathBuf::from(answer.trim()))
}

/// Resolve the directory a batch writes into. The directory itself is
/// created later; only its parent has to exist.
pub fn resolve_output_dir<P: Prompt + ?Sized>(
    explicit: Option<PathBuf>,
    prompt: &mut P,
) -> Result<PathBuf, String> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    let default = default_output_dir().to_string_lossy().into_owned();
    let answer = prompt.input(
        "Directory to save the type files in",
        Some(default.as_str()),
        Some(parent_dir_exists),
    )?;
    Ok(PathBuf::from(answer.trim()))
}
