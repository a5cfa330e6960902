//! Configuration system for contentquill.
//!
//! Settings are read from a TOML file with sensible defaults for every field,
//! so a partial (or missing) file is always usable.
//!
//! # Example
//!
//! ```
//! use contentquill::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.indent_size, 2);
//! assert!(!config.create_missing_parents);
//!
//! let custom = Config {
//!     indent_size: 4,
//!     ..Config::default()
//! };
//! assert_eq!(custom.undo_limit, 50);
//! ```

use crate::editor::options::EditOptions;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Configuration for contentquill.
///
/// * `indent_size` - Spaces per indentation level when saving (default: 2, 0 = compact)
/// * `create_backup` - Copy the previous file to `<name>.bak` before saving (default: false)
/// * `undo_limit` - Maximum number of undo steps kept per session (default: 50)
/// * `create_missing_parents` - Create missing path structure on edit instead of failing (default: false)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of spaces per indentation level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Create .bak files before saving
    #[serde(default)]
    pub create_backup: bool,

    /// Maximum number of undo steps to keep
    #[serde(default = "default_undo_limit")]
    pub undo_limit: usize,

    /// Create missing intermediate objects when editing
    #[serde(default)]
    pub create_missing_parents: bool,
}

/// Returns the default indentation size.
fn default_indent_size() -> usize {
    2
}

/// Returns the default undo limit.
fn default_undo_limit() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_size: default_indent_size(),
            create_backup: false,
            undo_limit: default_undo_limit(),
            create_missing_parents: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/contentquill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("contentquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::default()
            }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string).context("Failed to write config")?;

        Ok(())
    }

    /// Editing options derived from this configuration.
    pub fn edit_options(&self) -> EditOptions {
        EditOptions {
            create_missing_parents: self.create_missing_parents,
        }
    }
}
