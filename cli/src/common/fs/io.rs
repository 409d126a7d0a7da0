//! # DirTree Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Writes rendered trees to disk as plain UTF-8 text. The file holds the
//! newline-joined lines with trailing newlines trimmed, so reading it back
//! yields exactly `tree_to_text(lines)`.
//!
//! - **`ensure_dir_exists`**: creates a directory (and parents) if missing and
//!   rejects paths that exist but are not directories.
//! - **`tree_to_text`**: joins lines into the persisted text form.
//! - **`write_tree_file`**: writes that text, overwriting any existing file.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let lines = render::render_tree(root)?;
//! io::write_tree_file(Path::new("out/tree.txt"), &lines)?;
//! ```
//!
use crate::core::error::{DirtreeError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function creates it along with any
/// missing parents (like `mkdir -p`).
///
/// # Errors
///
/// Returns `DirtreeError::PersistenceFailure` if the path exists but is not a
/// directory, or if creating it fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| DirtreeError::PersistenceFailure {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        return Err(DirtreeError::PersistenceFailure {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "path exists but is not a directory",
            ),
        }
        .into());
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Joins rendered lines with `\n` and strips any trailing newlines.
pub fn tree_to_text<S: AsRef<str>>(lines: &[S]) -> String {
    let joined = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n");
    joined.trim_end_matches('\n').to_string()
}

/// Writes `lines` to `path` as UTF-8 text, overwriting if it exists.
///
/// The parent directory is created first when missing. The caller's `lines`
/// are never modified, whatever the outcome.
///
/// # Errors
///
/// Returns `DirtreeError::PersistenceFailure` if the parent directory cannot
/// be created or the write fails.
pub fn write_tree_file<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }

    let content = tree_to_text(lines);
    fs::write(path, content.as_bytes()).map_err(|source| DirtreeError::PersistenceFailure {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}
