//! Pacstash - stash pacman packages into dated directories and SquashFS images
//!
//! This library provides an interactive front-end for pacman that downloads
//! package archives without installing them, files them under
//! `packages/<DD-MM-YYYY>/<name>/`, packs them into SquashFS images and keeps
//! a dated download log.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line parsing, the interactive menu and console output
//! - [`core`] - Operations on the working tree
//! - [`infra`] - Infrastructure layer (processes, filesystem, package cache)
//! - [`config`] - Constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
