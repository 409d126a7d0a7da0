//! # DirTree Tree Printer
//!
//! File: cli/src/render/tree_printer.rs
//!
//! ## Overview
//!
//! Renders a directory as the classic `tree`-command text, one `String` per
//! line. The root is shown as `.`; every other node is
//! `<prefix><connector><name>`.
//!
//! ## Architecture
//!
//! - Pre-order recursion, one call per directory level
//! - Directories before files, alphabetical within each group (see `entry`)
//! - Connectors `├── ` / `└── ` and guide prefixes `│   ` / `    `
//! - A directory that cannot be listed gets a single `[Access Denied]` line
//!   and no children; its siblings still render
//!
//! Example output:
//!
//! ```text
//! .
//! ├── src
//! │   ├── lib.rs
//! │   └── main.rs
//! ├── locked
//!     [Access Denied]
//! └── Cargo.toml
//! ```
//!
use crate::core::error::{DirtreeError, Result};
use crate::render::entry::{read_sorted_entries, EntryKind};
use std::{io, path::Path};
use tracing::{debug, warn};

// --- Constants for Tree Drawing ---

/// Name shown on the first line in place of the root directory's name.
pub const ROOT_NAME: &str = ".";
/// Connector for intermediate items in a directory listing ("T" shape).
const TEE: &str = "├── ";
/// Connector for the last item in a directory listing ("L" shape).
const ELBOW: &str = "└── ";
/// Guide bar added below an ancestor that still has siblings to come.
const PIPE: &str = "│   ";
/// Spacer added below an ancestor that was the last of its siblings.
const SPACER: &str = "    ";
/// Placeholder for a directory whose contents could not be listed.
pub const ACCESS_DENIED: &str = "[Access Denied]";

/// Where the node being rendered sits. `Root` only ever appears at the top
/// of the recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Root,
    Child { is_last: bool },
}

fn connector(is_last: bool) -> &'static str {
    if is_last {
        ELBOW
    } else {
        TEE
    }
}

/// # Render Directory Tree (`render_tree`)
///
/// Validates `root` and returns its rendering as an ordered list of lines.
/// Every call re-reads the file system.
///
/// ## Returns
///
/// * `Result<Vec<String>>` - The tree lines, starting with `.`.
///
/// ## Errors
///
/// `DirtreeError::InvalidRoot` if `root` does not exist or is not a directory.
/// Listing failures below the root never surface as errors.
pub fn render_tree(root: &Path) -> Result<Vec<String>> {
    if !root.exists() {
        return Err(DirtreeError::InvalidRoot {
            path: root.to_path_buf(),
            reason: "path does not exist".to_string(),
        }
        .into());
    }
    if !root.is_dir() {
        return Err(DirtreeError::InvalidRoot {
            path: root.to_path_buf(),
            reason: "path is not a directory".to_string(),
        }
        .into());
    }

    debug!("Rendering tree for '{}'", root.display());
    let mut lines = Vec::new();
    build_ascii_tree(root, "", Position::Root, &mut lines);
    debug!("Rendered {} lines for '{}'", lines.len(), root.display());
    Ok(lines)
}

/// Appends the lines for `dir` and everything beneath it to `lines`.
///
/// `prefix` is the guide text accumulated from the ancestors; it is empty for
/// the root and for the root's direct children.
fn build_ascii_tree(dir: &Path, prefix: &str, position: Position, lines: &mut Vec<String>) {
    match position {
        Position::Root => lines.push(ROOT_NAME.to_string()),
        Position::Child { is_last } => {
            lines.push(format!("{}{}{}", prefix, connector(is_last), display_name(dir)))
        }
    }

    let entries = match read_sorted_entries(dir) {
        Ok(entries) => entries,
        Err(e) => {
            if e.kind() == io::ErrorKind::PermissionDenied {
                warn!("Access denied listing '{}': {}", dir.display(), e);
            } else {
                warn!(
                    "Could not list '{}' ({:?}): {}. Treating as access denied.",
                    dir.display(),
                    e.kind(),
                    e
                );
            }
            lines.push(format!("{}{}{}", prefix, SPACER, ACCESS_DENIED));
            return;
        }
    };

    let child_prefix = match position {
        Position::Root => String::new(),
        Position::Child { is_last } => {
            format!("{}{}", prefix, if is_last { SPACER } else { PIPE })
        }
    };

    let count = entries.len();
    for (index, entry) in entries.into_iter().enumerate() {
        let child_is_last = index + 1 == count;
        match entry.kind {
            EntryKind::Directory => build_ascii_tree(
                &entry.path,
                &child_prefix,
                Position::Child {
                    is_last: child_is_last,
                },
                lines,
            ),
            EntryKind::File | EntryKind::Other => lines.push(format!(
                "{}{}{}",
                child_prefix,
                connector(child_is_last),
                entry.name
            )),
        }
    }
}

/// Basename of `dir`, falling back to the whole path when there is none.
fn display_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_directory() -> Result<()> {
        let temp_dir = tempdir()?;
        assert_eq!(render_tree(temp_dir.path())?, ["."]);
        Ok(())
    }

    #[test]
    fn test_files_only_sorted() -> Result<()> {
        let temp_dir = tempdir()?;
        fs::write(temp_dir.path().join("b.txt"), "")?;
        fs::write(temp_dir.path().join("a.txt"), "")?;

        assert_eq!(
            render_tree(temp_dir.path())?,
            [".", "├── a.txt", "└── b.txt"]
        );
        Ok(())
    }

    /// `sub` comes first even though `a.txt` sorts before it alphabetically.
    #[test]
    fn test_directories_before_files() -> Result<()> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::create_dir(root.join("sub"))?;
        fs::write(root.join("z.txt"), "")?;
        fs::write(root.join("a.txt"), "")?;

        assert_eq!(
            render_tree(root)?,
            [".", "├── sub", "├── a.txt", "└── z.txt"]
        );
        Ok(())
    }

    #[test]
    fn test_guide_bar_under_non_last_directory() -> Result<()> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::create_dir(root.join("A"))?;
        fs::write(root.join("A/x.txt"), "")?;
        fs::write(root.join("y.txt"), "")?;

        assert_eq!(
            render_tree(root)?,
            [".", "├── A", "│   └── x.txt", "└── y.txt"]
        );
        Ok(())
    }

    #[test]
    fn test_spacer_under_last_directory() -> Result<()> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::create_dir_all(root.join("X/inner"))?;
        fs::write(root.join("X/inner/deep.txt"), "")?;
        fs::write(root.join("X/y.txt"), "")?;

        assert_eq!(
            render_tree(root)?,
            [
                ".",
                "└── X",
                "    ├── inner",
                "    │   └── deep.txt",
                "    └── y.txt",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_mixed_prefixes_at_depth_three() -> Result<()> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::create_dir_all(root.join("A/B"))?;
        fs::write(root.join("A/B/c.txt"), "")?;
        fs::write(root.join("z.txt"), "")?;

        assert_eq!(
            render_tree(root)?,
            [
                ".",
                "├── A",
                "│   └── B",
                "│       └── c.txt",
                "└── z.txt",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_empty_subdirectory_has_no_children() -> Result<()> {
        let temp_dir = tempdir()?;
        fs::create_dir(temp_dir.path().join("empty"))?;
        assert_eq!(render_tree(temp_dir.path())?, [".", "└── empty"]);
        Ok(())
    }

    #[test]
    fn test_idempotent() -> Result<()> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::create_dir_all(root.join("one/two"))?;
        fs::write(root.join("one/two/f.rs"), "")?;
        fs::write(root.join("README.md"), "")?;

        assert_eq!(render_tree(root)?, render_tree(root)?);
        Ok(())
    }

    #[test]
    fn test_nonexistent_root() {
        let temp_dir = tempdir().unwrap();
        let result = render_tree(&temp_dir.path().join("does-not-exist"));
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DirtreeError>(),
            Some(DirtreeError::InvalidRoot { .. })
        ));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_file_as_root() -> Result<()> {
        let temp_dir = tempdir()?;
        let file_path = temp_dir.path().join("a_file.txt");
        fs::write(&file_path, "content")?;

        let err = render_tree(&file_path).unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
        Ok(())
    }

    /// A directory that disappears between classification and listing is
    /// rendered like an access-denied one.
    #[test]
    fn test_unlistable_child_gets_placeholder() {
        let temp_dir = tempdir().unwrap();
        let gone = temp_dir.path().join("gone");
        let mut lines = Vec::new();

        build_ascii_tree(&gone, "│   ", Position::Child { is_last: false }, &mut lines);

        assert_eq!(lines, ["│   ├── gone", "│       [Access Denied]"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_denied_subdirectory() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        let locked = root.join("locked");
        fs::create_dir(&locked)?;
        fs::write(locked.join("secret.txt"), "")?;
        fs::create_dir(root.join("open"))?;
        fs::write(root.join("open/visible.txt"), "")?;
        fs::write(root.join("z.txt"), "")?;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

        // Privileged users can list the directory anyway; nothing to check then.
        let still_readable = fs::read_dir(&locked).is_ok();
        let lines = render_tree(root);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        if still_readable {
            return Ok(());
        }

        assert_eq!(
            lines?,
            [
                ".",
                "├── locked",
                "    [Access Denied]",
                "├── open",
                "│   └── visible.txt",
                "└── z.txt",
            ]
        );
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_descended() -> Result<()> {
        use std::os::unix::fs as unix_fs;

        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::create_dir(root.join("real"))?;
        fs::write(root.join("real/inside.txt"), "")?;
        unix_fs::symlink(root.join("real"), root.join("alias"))?;
        unix_fs::symlink(root.join("missing"), root.join("dangling"))?;

        assert_eq!(
            render_tree(root)?,
            [
                ".",
                "├── alias",
                "│   └── inside.txt",
                "└── real",
                "    └── inside.txt",
            ]
        );
        Ok(())
    }
}
