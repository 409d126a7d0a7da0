//! # DirTree Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! The commands form the presentation layer around the renderer. Each one
//! resolves a root directory, hands it to `render::render_tree`, and does
//! something with the returned lines:
//!
//! - `scan`: print the tree to stdout
//! - `save`: print the tree and write it to a text file
//!
//! The root path and the rendered lines are passed between the layers as
//! plain arguments and return values.
//!
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::Context;
use std::{
    io::{self, Write},
    path::PathBuf,
};
use tracing::debug;

/// Renders a directory tree to standard output.
pub mod scan;
/// Renders a directory tree and saves it as plain text.
pub mod save;

/// Picks the directory to render.
///
/// Precedence: the explicit argument (which clap already fills from
/// `DIRTREE_ROOT`), then `scan.default_root` from configuration, then the
/// current directory.
pub(crate) fn resolve_root(arg: Option<PathBuf>, cfg: &Config) -> PathBuf {
    let root = arg
        .or_else(|| cfg.scan.default_root.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    debug!("Resolved root directory: {}", root.display());
    root
}

/// Writes every line followed by `\n` to stdout.
pub(crate) fn print_lines(lines: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{}", line).context("Failed to write tree to stdout")?;
    }
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}
