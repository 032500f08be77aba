//! Package cache inspection
//!
//! Snapshots of pacman's cache directory. Comparing a snapshot taken before
//! a download with one taken after it tells exactly which archives the
//! download produced.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::defaults::PACKAGE_ARCHIVE_SUFFIX;
use crate::error::FilesystemError;

/// Extract the package name from an archive file name
///
/// Archives are named `<name>-<pkgver>-<pkgrel>-<arch>.pkg.tar.zst`. Package
/// names may contain hyphens, so the last three hyphen-separated fields are
/// stripped from the right.
pub fn archive_package_name(file_name: &str) -> Option<&str> {
    let stem = file_name.strip_suffix(PACKAGE_ARCHIVE_SUFFIX)?;
    let mut fields = stem.rsplitn(4, '-');
    let _arch = fields.next()?;
    let _pkgrel = fields.next()?;
    let _pkgver = fields.next()?;
    fields.next().filter(|name| !name.is_empty())
}

/// Archives present in the cache at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheSnapshot {
    archives: BTreeSet<PathBuf>,
}

impl CacheSnapshot {
    /// Scan a cache directory; a missing directory is an empty cache
    pub fn scan(dir: &Path) -> Result<Self, FilesystemError> {
        if !dir.exists() {
            tracing::debug!("Package cache {} does not exist", dir.display());
            return Ok(Self::default());
        }

        let mut archives = BTreeSet::new();
        for entry in walkdir::WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
        {
            let entry = entry.map_err(|e| FilesystemError::ReadDir {
                path: dir.to_path_buf(),
                error: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_archive = entry
                .file_name()
                .to_str()
                .is_some_and(|n| n.ends_with(PACKAGE_ARCHIVE_SUFFIX));
            if is_archive {
                archives.insert(entry.into_path());
            }
        }

        Ok(Self { archives })
    }

    /// Archives in `self` that were not in `earlier`
    #[must_use]
    pub fn added_since(&self, earlier: &Self) -> Self {
        Self {
            archives: self.archives.difference(&earlier.archives).cloned().collect(),
        }
    }

    /// Archives belonging to exactly the named package
    pub fn archives_for(&self, package: &str) -> Vec<PathBuf> {
        self.archives
            .iter()
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .and_then(archive_package_name)
                    == Some(package)
            })
            .cloned()
            .collect()
    }

    /// Number of archives
    pub fn len(&self) -> usize {
        self.archives.len()
    }

    /// Whether the snapshot holds no archives
    pub fn is_empty(&self) -> bool {
        self.archives.is_empty()
    }
}

/// Archives of `package` to relocate after a download
///
/// Prefers archives the download added; otherwise falls back to whatever is
/// already cached for that package (pacman skips downloads it already has).
pub fn locate_archives(before: &CacheSnapshot, after: &CacheSnapshot, package: &str) -> Vec<PathBuf> {
    let fresh = after.added_since(before).archives_for(package);
    if fresh.is_empty() {
        after.archives_for(package)
    } else {
        fresh
    }
}
