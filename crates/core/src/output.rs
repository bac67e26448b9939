//! Writing generated sources to disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ArtGenError, Result};

/// Extension of every generated file.
pub const TYPE_FILE_EXTENSION: &str = "ts";

/// `User` -> `User.ts`
pub fn type_file_name(type_name: &str) -> String {
    format!("{type_name}.{TYPE_FILE_EXTENSION}")
}

/// Create `dir` (and its parents) if it does not exist yet.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    debug!("Creating output directory {}", dir.display());
    fs::create_dir_all(dir).map_err(|source| ArtGenError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write `source` to `path` as UTF-8, replacing any existing file.
pub fn write_types(path: &Path, source: &str) -> Result<()> {
    debug!("Writing {} bytes to {}", source.len(), path.display());
    fs::write(path, source).map_err(|source| ArtGenError::Write {
        path: path.to_path_buf(),
        source,
    })
}
