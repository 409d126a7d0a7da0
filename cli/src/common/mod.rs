//! # DirTree Common Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers that are not part of the renderer or of a single command.
//! Currently this is only filesystem output (`fs`).
//!

/// Utilities for filesystem operations (directory creation, saving trees).
pub mod fs;
