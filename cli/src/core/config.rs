//! # DirTree Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Loads, merges and validates the optional DirTree configuration. Nothing is
//! required: with no files present every command runs on built-in defaults.
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.dirtree.toml` in the current directory or an ancestor
//!    (the search stops at the first directory containing `.git`)
//! 2. User-specific `<config dir>/dirtree/config.toml`
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [scan]
//! default_root = "~/projects"
//!
//! [save]
//! default_extension = "txt"
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let ext = &cfg.save.default_extension;
//! ```
//!
use crate::core::error::{DirtreeError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub save: SaveConfig,
}

/// Settings for choosing what `dirtree scan` / `dirtree save` render.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Directory rendered when no path is given (can use ~). Will be expanded.
    pub default_root: Option<String>,
}

/// Settings for `dirtree save`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SaveConfig {
    /// Extension appended to an output path that has none. No leading dot.
    #[serde(default = "default_save_extension")]
    pub default_extension: String,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            default_extension: default_save_extension(),
        }
    }
}

fn default_save_extension() -> String {
    "txt".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".dirtree.toml";

/// Loads user and project configuration, merges them over the defaults,
/// expands `~` and validates the result.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "DirTree", "dirtree") else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!("No project configuration file (.dirtree.toml) found.");
            Ok(None)
        }
    }
}

/// Walks from `start` towards the filesystem root looking for `.dirtree.toml`,
/// giving up at the first repository boundary (`.git` directory).
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project_cfg) = project else {
        return user;
    };
    Config {
        scan: ScanConfig {
            default_root: project_cfg.scan.default_root.or(user.scan.default_root),
        },
        save: SaveConfig {
            default_extension: if project_cfg.save.default_extension != default_save_extension()
            {
                project_cfg.save.default_extension
            } else {
                user.save.default_extension
            },
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(root) = config.scan.default_root.as_mut() {
        *root = shellexpand::tilde(root).into_owned();
        debug!("Expanded default root: {}", root);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    let ext = &config.save.default_extension;
    if ext.is_empty() {
        return Err(anyhow!(DirtreeError::Config(
            "save.default_extension cannot be empty.".to_string()
        )));
    }
    if ext.contains(['.', '/', '\\']) {
        return Err(anyhow!(DirtreeError::Config(format!(
            "Invalid save.default_extension '{}'. Expected a bare extension such as \"txt\".",
            ext
        ))));
    }
    if let Some(root) = &config.scan.default_root {
        // Only a warning: the shell re-checks the root and reports it properly.
        if !Path::new(root).is_dir() {
            warn!("Configured default root '{}' is not a directory.", root);
        }
    }
    Ok(())
}
