//! # DirTree CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests. Every test runs the compiled
//! `dirtree` binary inside a `TestEnv`: a temporary directory holding the tree
//! to render (`root/`), a working directory bounded by a `.git` marker
//! (`work/`), and an isolated config home, so no real user or project
//! configuration leaks into the results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated sandbox for one CLI invocation.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("root")).expect("Failed to create root dir");
        fs::create_dir_all(dir.path().join("work/.git")).expect("Failed to create work dir");
        fs::create_dir(dir.path().join("home")).expect("Failed to create home dir");
        TestEnv { dir }
    }

    /// Directory whose tree the tests render.
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("root")
    }

    /// Current directory of the spawned command.
    pub fn work(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes the user config file where `directories` looks for it on Linux.
    pub fn write_user_config(&self, content: &str) {
        let cfg_dir = self.home().join(".config/dirtree");
        fs::create_dir_all(&cfg_dir).expect("Failed to create config dir");
        fs::write(cfg_dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// `dirtree` with cwd, HOME and XDG_CONFIG_HOME pointed into the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = dirtree_cmd();
        cmd.current_dir(self.work())
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env_remove("DIRTREE_ROOT")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// # Get DirTree Command (`dirtree_cmd`)
///
/// Creates an `assert_cmd::Command` for the `dirtree` binary built for this
/// test run.
pub fn dirtree_cmd() -> Command {
    Command::cargo_bin("dirtree").expect("Failed to find dirtree binary for testing")
}

/// Builds:
/// ```text
/// root/
/// ├── A/
/// │   └── x.txt
/// └── y.txt
/// ```
pub fn populate_basic_tree(root: &Path) {
    fs::create_dir(root.join("A")).unwrap();
    fs::write(root.join("A/x.txt"), "x").unwrap();
    fs::write(root.join("y.txt"), "y").unwrap();
}

pub const BASIC_TREE: &str = ".\n├── A\n│   └── x.txt\n└── y.txt\n";
