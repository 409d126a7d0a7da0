//! # DirTree Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by the command handlers:
//! - `config`: configuration loading, merging and validation
//! - `error`: the `DirtreeError` enum and the `Result` alias
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{DirtreeError, Result};
//! ```
//!
pub mod config;
pub mod error;
