//! Session context
//!
//! Created once at start-up and passed to every operation: the run's date
//! stamp, the working directory and the loaded configuration. All working
//! tree and log paths are derived here.

use std::path::{Path, PathBuf};

use super::config::Config;
use super::date::DateStamp;
use super::package::PackageName;
use crate::config::defaults::{LOG_FILE_EXTENSION, LOG_FILE_PREFIX, PACKAGES_DIR, SQUASHFS_EXTENSION};

/// Per-run context
#[derive(Debug, Clone)]
pub struct Session {
    date: DateStamp,
    root: PathBuf,
    config: Config,
}

impl Session {
    /// Session dated today
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self::with_date(root, config, DateStamp::today())
    }

    /// Session with an explicit date stamp
    pub fn with_date(root: impl Into<PathBuf>, config: Config, date: DateStamp) -> Self {
        Self {
            date,
            root: root.into(),
            config,
        }
    }

    /// Date stamp of this run
    pub fn date(&self) -> &DateStamp {
        &self.date
    }

    /// Working directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loaded configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `packages/`
    pub fn packages_dir(&self) -> PathBuf {
        self.root.join(PACKAGES_DIR)
    }

    /// `packages/<date>/`
    pub fn dated_dir(&self) -> PathBuf {
        self.packages_dir().join(self.date.as_str())
    }

    /// `packages/<date>/<name>/`
    pub fn package_dir(&self, name: &PackageName) -> PathBuf {
        self.dated_dir().join(name.as_str())
    }

    /// `packages/<date>/<name>.sfs`
    pub fn package_image(&self, name: &PackageName) -> PathBuf {
        self.dated_dir()
            .join(format!("{name}.{SQUASHFS_EXTENSION}"))
    }

    /// `packages.sfs`
    pub fn tree_image(&self) -> PathBuf {
        self.root
            .join(format!("{PACKAGES_DIR}.{SQUASHFS_EXTENSION}"))
    }

    /// `download-<date>.txt`
    pub fn log_path(&self) -> PathBuf {
        self.root
            .join(format!("{LOG_FILE_PREFIX}{}.{LOG_FILE_EXTENSION}", self.date))
    }

    /// Package list file
    pub fn package_list_path(&self) -> PathBuf {
        self.root.join(self.config.package_list())
    }
}
