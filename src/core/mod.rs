//! Core logic module
//!
//! Everything pacstash does to the working tree. External programs are
//! reached through [`crate::infra::command::CommandRunner`].
//!
//! # Submodules
//!
//! - [`session`] - Per-run context (date stamp, working directory, config)
//! - [`date`] - `DD-MM-YYYY` date stamps
//! - [`package`] - Package name validation
//! - [`fetch`] - Download and file package archives
//! - [`archive`] - SquashFS image creation
//! - [`log`] - Download log writing
//! - [`list`] - Package list loading
//! - [`browse`] - Log browsing
//! - [`installed`] - Installed package enumeration
//! - [`stash`] - Workflows composed from the above
//! - [`config`] - Configuration file
//! - [`doctor`] - External tool checks

pub mod archive;
pub mod browse;
pub mod config;
pub mod date;
pub mod doctor;
pub mod fetch;
pub mod installed;
pub mod list;
pub mod log;
pub mod package;
pub mod session;
pub mod stash;
