//! Default configuration values

/// Root of the working tree, relative to the working directory
pub const PACKAGES_DIR: &str = "packages";

/// Shared package cache of pacman
pub const PACMAN_CACHE_DIR: &str = "/var/cache/pacman/pkg";

/// Operator-provided package list consumed by the list fetch
pub const PACKAGE_LIST_FILE: &str = "packages.txt";

/// Suffix of package archives in the cache
pub const PACKAGE_ARCHIVE_SUFFIX: &str = ".pkg.tar.zst";

/// Download log file name prefix, followed by the date stamp
pub const LOG_FILE_PREFIX: &str = "download-";

/// Extension of download logs (also what the log browser lists)
pub const LOG_FILE_EXTENSION: &str = "txt";

/// Extension of SquashFS images
pub const SQUASHFS_EXTENSION: &str = "sfs";

/// Date stamp format (DD-MM-YYYY)
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Default package manager binary
pub const PACMAN: &str = "pacman";

/// Default compression tool binary
pub const MKSQUASHFS: &str = "mksquashfs";

/// Privilege escalation wrapper
pub const SUDO: &str = "sudo";

/// Archive relocation binary
pub const MV: &str = "mv";

/// Fixed mksquashfs profile: xz with 1M blocks, full dictionary and x86 BCJ filter
pub const SQUASHFS_PROFILE: &[&str] = &[
    "-comp",
    "xz",
    "-b",
    "1M",
    "-no-duplicates",
    "-no-recovery",
    "-always-use-fragments",
    "-wildcards",
    "-xattrs",
    "-Xdict-size",
    "100%",
    "-Xbcj",
    "x86",
];
