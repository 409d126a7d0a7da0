//! # DirTree Save Command
//!
//! File: cli/src/commands/save.rs
//!
//! ## Overview
//!
//! Implements `dirtree save [PATH] --output FILE`: render PATH, print the
//! tree, then write the same lines to FILE as UTF-8 text with trailing
//! newlines trimmed.
//!
//! If FILE has no extension, `save.default_extension` (default `txt`) is
//! appended. Missing parent directories are created.
//!
//! ## Examples
//!
//! ```bash
//! dirtree save ./project --output reports/project-tree
//! # writes reports/project-tree.txt
//! ```
//!
use crate::commands::{print_lines, resolve_root};
use crate::common::fs::io;
use crate::core::config;
use crate::core::error::Result;
use crate::render;
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Arguments for `dirtree save`.
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Directory to render. Defaults to `scan.default_root` from config, then
    /// the current directory.
    #[arg(env = "DIRTREE_ROOT")]
    pub path: Option<PathBuf>,

    /// File to write the tree to. Gets the default extension if it has none.
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
}

/// # Handle Save Command (`handle_save`)
///
/// Renders the root, prints it, and persists it to the output file. A write
/// failure is reported as an error after the tree has been printed.
pub async fn handle_save(args: SaveArgs) -> Result<()> {
    let cfg = config::load_config().context("Failed to load DirTree configuration")?;
    let root = resolve_root(args.path, &cfg);
    let output = with_default_extension(&args.output, &cfg.save.default_extension);

    let lines = render::render_tree(&root).context("Please select a valid folder path")?;
    print_lines(&lines)?;

    io::write_tree_file(&output, &lines).context("Failed to save file")?;
    info!("Saved tree of '{}' to '{}'", root.display(), output.display());
    println!("Folder tree saved to: {}", output.display());
    Ok(())
}

/// Appends `extension` to `path` when it has none.
fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    if path.extension().is_some() {
        return path.to_path_buf();
    }
    let mut with_ext = path.to_path_buf();
    with_ext.set_extension(extension);
    debug!(
        "Output path '{}' has no extension, using '{}'",
        path.display(),
        with_ext.display()
    );
    with_ext
}
