//! # DirTree Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers used by the command handlers. Reading the tree itself
//! lives in `crate::render`; this module only covers writing results out.
//!
//! - **`io`**: directory creation and plain-text persistence of rendered trees
//!   (`ensure_dir_exists`, `tree_to_text`, `write_tree_file`).
//!

/// Plain-text persistence of rendered trees.
pub mod io;
