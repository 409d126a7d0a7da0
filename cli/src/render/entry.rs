//! # DirTree Entry Classification
//!
//! File: cli/src/render/entry.rs
//!
//! ## Overview
//!
//! Reads one directory level and turns it into the ordered child list the
//! tree printer walks: sub-directories first, then plain files, each group
//! sorted by name. Every child is classified exactly once, at listing time.
//!
//! Classification follows symbolic links, so a link to a directory is a
//! directory and a dangling link is `Other`. `Other` entries (dangling links,
//! sockets, devices) are dropped from the listing.
//!
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{trace, warn};

/// What a directory entry resolved to when its parent was listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Neither a directory nor a regular file, or its metadata was unreadable.
    Other,
}

impl EntryKind {
    /// Classifies `path`, following symlinks.
    pub fn of(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(md) if md.is_dir() => EntryKind::Directory,
            Ok(md) if md.is_file() => EntryKind::File,
            Ok(_) => EntryKind::Other,
            Err(e) => {
                trace!("Could not stat '{}': {}", path.display(), e);
                EntryKind::Other
            }
        }
    }
}

/// A child of the directory being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Full path to the entry.
    pub path: PathBuf,
    /// Final path segment, as displayed in the tree.
    pub name: String,
    pub kind: EntryKind,
}

/// Lists `dir` and returns its directories and files in display order.
///
/// ## Errors
///
/// Returns the `io::Error` from opening the directory (for example
/// `PermissionDenied`). Failures on individual entries are logged and the
/// entry is skipped.
pub fn read_sorted_entries(dir: &Path) -> io::Result<Vec<DirEntry>> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry_result in fs::read_dir(dir)? {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    "Failed to read an entry in '{}': {}. Skipping.",
                    dir.display(),
                    e
                );
                continue;
            }
        };
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        match EntryKind::of(&path) {
            EntryKind::Directory => dirs.push(DirEntry {
                path,
                name,
                kind: EntryKind::Directory,
            }),
            EntryKind::File => files.push(DirEntry {
                path,
                name,
                kind: EntryKind::File,
            }),
            EntryKind::Other => {
                trace!("Dropping non-file, non-directory entry: {}", path.display());
            }
        }
    }

    // `str` ordering is byte order, which for UTF-8 is codepoint order.
    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));
    dirs.append(&mut files);
    Ok(dirs)
}
