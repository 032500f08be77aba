//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod doctor;
pub mod fetch;
pub mod installed;
pub mod log;
pub mod logs;
pub mod menu;

use std::io::Write;

use anyhow::Result;
use clap::Subcommand;

use crate::cli::output::Console;
use crate::core::session::Session;
use crate::infra::command::CommandRunner;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (the default)
    Menu,

    /// Download and store packages
    Fetch {
        /// Package names
        #[arg(required_unless_present = "list", conflicts_with = "list")]
        packages: Vec<String>,

        /// Read the names from the package list file
        #[arg(long)]
        list: bool,

        /// Create a SquashFS image per package, then one of the whole tree
        #[arg(long)]
        squashfs: bool,
    },

    /// Download and store every installed package
    Installed {
        /// Create a SquashFS image of the whole tree afterwards
        #[arg(long)]
        squashfs: bool,
    },

    /// Record package names in today's download log
    Log {
        /// Package names
        #[arg(required = true)]
        packages: Vec<String>,
    },

    /// List download logs
    Logs,

    /// Check external tools
    Doctor,
}

impl Commands {
    /// Execute the command
    pub fn run<R, O, E>(
        self,
        session: &Session,
        runner: &R,
        console: &mut Console<O, E>,
    ) -> Result<()>
    where
        R: CommandRunner + ?Sized,
        O: Write,
        E: Write,
    {
        match self {
            Commands::Menu => menu::execute(session, runner, console),
            Commands::Fetch {
                packages,
                list,
                squashfs,
            } => fetch::execute(session, runner, console, &packages, list, squashfs),
            Commands::Installed { squashfs } => {
                installed::execute(session, runner, console, squashfs)
            }
            Commands::Log { packages } => log::execute(session, console, &packages),
            Commands::Logs => logs::execute(session, console),
            Commands::Doctor => doctor::execute(session, console),
        }
    }
}
