//! Infrastructure layer
//!
//! Handles I/O against the outside world: external processes, the
//! filesystem and pacman's package cache.

pub mod command;
pub mod dirs;
pub mod filesystem;
pub mod pkg_cache;
