//! # DirTree Scan Command
//!
//! File: cli/src/commands/scan.rs
//!
//! ## Overview
//!
//! Implements `dirtree scan [PATH]`: render the directory at PATH and print
//! the tree to stdout, one line per entry.
//!
//! ## Examples
//!
//! ```bash
//! dirtree scan ~/projects/demo
//! ```
//!
//! ```text
//! .
//! ├── src
//! │   └── main.rs
//! └── Cargo.toml
//! ```
//!
use crate::commands::{print_lines, resolve_root};
use crate::core::config;
use crate::core::error::Result;
use crate::render;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `dirtree scan`.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Directory to render. Defaults to `scan.default_root` from config, then
    /// the current directory.
    #[arg(env = "DIRTREE_ROOT")]
    pub path: Option<PathBuf>,
}

/// # Handle Scan Command (`handle_scan`)
///
/// Loads configuration, resolves the root, renders it and prints the lines.
///
/// ## Errors
///
/// Fails before any traversal if the root is missing or not a directory, or
/// if the configuration cannot be loaded.
pub async fn handle_scan(args: ScanArgs) -> Result<()> {
    let cfg = config::load_config().context("Failed to load DirTree configuration")?;
    let root = resolve_root(args.path, &cfg);

    let lines = render::render_tree(&root).context("Please select a valid folder path")?;
    info!("Rendered {} line(s) for '{}'", lines.len(), root.display());

    print_lines(&lines)
}
