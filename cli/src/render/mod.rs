//! # DirTree Renderer
//!
//! File: cli/src/render/mod.rs
//!
//! ## Overview
//!
//! Turns a directory into the ordered lines of an ASCII tree. This is the
//! only part of DirTree with real logic; the command handlers just pass a
//! root path in and print or save the lines that come back.
//!
//! - `entry`: lists one directory level and classifies each child once as
//!   directory, file or other, in display order.
//! - `tree_printer`: the recursive pre-order walk that emits the lines.
//!
//! ```rust
//! let lines = crate::render::render_tree(Path::new("."))?;
//! for line in &lines {
//!     println!("{}", line);
//! }
//! ```
//!

/// Directory listing and entry classification.
pub mod entry;
/// Recursive tree rendering.
pub mod tree_printer;

pub use tree_printer::render_tree;
