//! CLI command for `pacstash menu`

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::menu::MenuController;
use crate::cli::output::Console;
use crate::core::session::Session;
use crate::infra::command::CommandRunner;

/// Execute the menu command over stdin
pub fn execute<R, O, E>(session: &Session, runner: &R, console: &mut Console<O, E>) -> Result<()>
where
    R: CommandRunner + ?Sized,
    O: Write,
    E: Write,
{
    let stdin = io::stdin();
    MenuController::new(session, runner, stdin.lock(), console)
        .run()
        .context("Failed to read from stdin")
}
