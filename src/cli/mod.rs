//! Command-line interface module
//!
//! This module handles argument parsing, the interactive menu and console
//! output. The work itself belongs in the [`crate::core`] module.

pub mod commands;
pub mod menu;
pub mod output;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::config::Config;
use crate::core::session::Session;
use crate::infra::command::SystemRunner;
use crate::infra::dirs::PacstashDirs;
use commands::Commands;
use output::Console;

/// A fatal error, with the color setting in effect when it happened
#[derive(Debug)]
pub struct Failure {
    /// The error and its causes
    pub error: anyhow::Error,
    /// Whether the console reporting it is colored
    pub color: bool,
}

/// Pacstash - stash pacman packages into dated directories and SquashFS images
///
/// Without a subcommand the interactive menu runs.
#[derive(Parser, Debug)]
#[command(name = "pacstash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Working directory (defaults to the current directory)
    #[arg(short = 'C', long = "dir", value_name = "PATH", global = true)]
    pub dir: Option<PathBuf>,

    /// Configuration file
    #[arg(long, value_name = "PATH", global = true, env = "PACSTASH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log level selected by `-v`/`-q`
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<(), Failure> {
        let session = self.session().map_err(|error| Failure {
            error,
            color: !self.no_color,
        })?;
        let color = !self.no_color && session.config().color();
        let mut console = Console::stdio(color);

        self.command
            .unwrap_or(Commands::Menu)
            .run(&session, &SystemRunner, &mut console)
            .map_err(|error| Failure { error, color })
    }

    fn session(&self) -> Result<Session> {
        let root = match &self.dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        anyhow::ensure!(
            root.is_dir(),
            "Working directory {} does not exist",
            root.display()
        );

        let config = match &self.config {
            Some(path) => load_explicit_config(path)?,
            None => Config::load(&PacstashDirs::new()).context("Failed to load configuration")?,
        };
        tracing::debug!(root = %root.display(), ?config, "session ready");

        Ok(Session::new(root, config))
    }
}

fn load_explicit_config(path: &Path) -> Result<Config> {
    anyhow::ensure!(
        path.is_file(),
        "Configuration file {} not found",
        path.display()
    );
    Config::load_from_path(path).context("Failed to load configuration")
}

/// `pacstash v<version>`, with the git sha when the build captured one
pub fn version_line() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if !sha.is_empty() && sha != "VERGEN_IDEMPOTENT_OUTPUT" => {
            let short = sha.get(..7).unwrap_or(sha);
            format!("pacstash v{version} ({short})")
        }
        _ => format!("pacstash v{version}"),
    }
}
