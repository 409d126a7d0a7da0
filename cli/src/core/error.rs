//! # DirTree Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout DirTree. Recognized
//! domain failures are variants of `DirtreeError`; everything is propagated
//! as `anyhow::Result` so call sites can attach context with `.context()`.
//!
//! ## Architecture
//!
//! - `DirtreeError`: a `thiserror` enum for the failures the CLI reports.
//! - `Result<T>`: alias for `anyhow::Result<T>`.
//!
//! The error domains are:
//! - Invalid root path (missing or not a directory), raised before traversal
//! - Persistence failures when saving a rendered tree
//! - Configuration errors
//!
//! Permission errors while listing a subdirectory are *not* represented here.
//! The renderer recovers from them inline with an `[Access Denied]` line.
//!
//! ## Examples
//!
//! ```rust
//! if !root.is_dir() {
//!     return Err(DirtreeError::InvalidRoot {
//!         path: root.to_path_buf(),
//!         reason: "not a directory".into(),
//!     })?;
//! }
//!
//! // Checking for a specific failure
//! if let Some(DirtreeError::PersistenceFailure { path, .. }) = err.downcast_ref() {
//!     eprintln!("Could not write {}", path.display());
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for DirTree.
#[derive(Error, Debug)]
pub enum DirtreeError {
    /// The root handed to the renderer is missing or is not a directory.
    #[error("Invalid root '{}': {reason}", path.display())]
    InvalidRoot { path: PathBuf, reason: String },

    /// Writing a rendered tree to disk failed.
    #[error("Could not write '{}'", path.display())]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
