//! Configuration file
//!
//! Reads optional settings from `config.toml` in the config directory, or
//! from a path given on the command line. Every setting has a default, so a
//! missing file is not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults::{MKSQUASHFS, PACKAGE_LIST_FILE, PACMAN, PACMAN_CACHE_DIR};
use crate::error::ConfigError;
use crate::infra::dirs::PacstashDirs;
use crate::infra::filesystem;

/// Settings for pacstash
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Filesystem locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// External tools
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Filesystem locations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// pacman package cache
    pub cache_dir: Option<PathBuf>,

    /// Package list file, relative to the working directory unless absolute
    pub package_list: Option<PathBuf>,
}

/// External tools
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Run fetch, move and compression through sudo
    pub sudo: Option<bool>,

    /// Package manager binary
    pub pacman: Option<String>,

    /// Compression tool binary
    pub mksquashfs: Option<String>,
}

/// Output preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colored output
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration from the default config directory
    pub fn load(dirs: &PacstashDirs) -> Result<Self, ConfigError> {
        Self::load_from_path(&dirs.config_path())
    }

    /// Load configuration from a specific path
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = filesystem::read_file(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Effective package cache directory
    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        self.paths
            .cache_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(PACMAN_CACHE_DIR))
    }

    /// Effective package list path (possibly relative)
    #[must_use]
    pub fn package_list(&self) -> &Path {
        self.paths
            .package_list
            .as_deref()
            .unwrap_or_else(|| Path::new(PACKAGE_LIST_FILE))
    }

    /// Whether privileged commands go through sudo
    #[must_use]
    pub fn use_sudo(&self) -> bool {
        self.tools.sudo.unwrap_or(true)
    }

    /// Effective package manager binary
    #[must_use]
    pub fn pacman(&self) -> &str {
        self.tools.pacman.as_deref().unwrap_or(PACMAN)
    }

    /// Effective compression tool binary
    #[must_use]
    pub fn mksquashfs(&self) -> &str {
        self.tools.mksquashfs.as_deref().unwrap_or(MKSQUASHFS)
    }

    /// Whether colored output is enabled
    #[must_use]
    pub fn color(&self) -> bool {
        self.output.color.unwrap_or(true)
    }
}
