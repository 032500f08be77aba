//! Platform-specific directory management
//!
//! Resolves the configuration directory, following the XDG Base Directory
//! Specification on Linux.
//!
//! The `PACSTASH_CONFIG_DIR` environment variable overrides the default.

use std::env;
use std::path::PathBuf;

/// Environment variable name for the config directory override
pub const ENV_CONFIG_DIR: &str = "PACSTASH_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "pacstash";

/// Configuration file name
const CONFIG_FILE: &str = "config.toml";

/// Directory provider for pacstash
#[derive(Debug, Clone)]
pub struct PacstashDirs {
    config_dir: PathBuf,
}

impl PacstashDirs {
    /// Create a new `PacstashDirs` instance
    ///
    /// Checks the environment variable first, then falls back to the platform default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/pacstash` or `~/.config/pacstash`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the config file path
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for PacstashDirs {
    fn default() -> Self {
        Self::new()
    }
}
