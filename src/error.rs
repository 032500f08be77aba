//! Error types for pacstash
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Package name validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackageNameError {
    /// Empty name
    #[error("Package name cannot be empty")]
    Empty,

    /// Name contains characters that are unsafe in paths or arguments
    #[error(
        "Invalid package name '{name}': only letters, digits and '@._+-' are allowed, \
         and the name must not start with '-' or '.'"
    )]
    InvalidCharacters { name: String },
}

/// External command errors
#[derive(Error, Debug)]
pub enum CommandError {
    /// The program could not be started
    #[error("Failed to start '{command}': {error}")]
    Spawn { command: String, error: String },

    /// The program exited unsuccessfully
    #[error("Error executing command: {command} ({status})")]
    Failed { command: String, status: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to list directory
    #[error("Failed to list directory '{path}': {error}")]
    ReadDir { path: PathBuf, error: String },
}

/// Errors for a single package fetch
#[derive(Error, Debug)]
pub enum FetchError {
    /// Destination directory could not be created
    #[error("{0}")]
    Directory(#[from] FilesystemError),

    /// Package manager download failed
    #[error("Download failed for '{package}': {error}")]
    Download {
        package: String,
        #[source]
        error: CommandError,
    },

    /// Nothing to move after the download
    #[error("No archive for '{package}' found in {cache_dir}")]
    ArchiveNotFound { package: String, cache_dir: PathBuf },

    /// Moving the archives failed
    #[error("Failed to move archive(s) for '{package}': {error}")]
    Move {
        package: String,
        #[source]
        error: CommandError,
    },
}

/// SquashFS image errors
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// mksquashfs failed
    #[error("Failed to create SquashFS archive '{output}': {error}")]
    Compression {
        output: PathBuf,
        #[source]
        error: CommandError,
    },
}

/// Download log errors
#[derive(Error, Debug)]
pub enum LogError {
    /// Log file could not be opened
    #[error("Error opening download log file '{path}': {error}")]
    Open { path: PathBuf, error: String },

    /// Log file could not be written
    #[error("Error writing download log file '{path}': {error}")]
    Write { path: PathBuf, error: String },
}

/// Package list errors
#[derive(Error, Debug)]
pub enum ListError {
    /// List file exists but cannot be read
    #[error("Failed to read package list '{path}': {error}")]
    Read { path: PathBuf, error: String },
}

/// Log browsing errors
#[derive(Error, Debug)]
pub enum BrowseError {
    /// Directory listing failed
    #[error("{0}")]
    Listing(#[from] FilesystemError),

    /// Selection is not a number in range
    #[error("Invalid choice '{input}': expected a number between 1 and {count}")]
    InvalidSelection { input: String, count: usize },

    /// Selected log cannot be read
    #[error("Error opening log file: {path}: {error}")]
    Open { path: PathBuf, error: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}
