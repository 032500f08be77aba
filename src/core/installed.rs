//! Installed package enumeration

use super::session::Session;
use crate::error::CommandError;
use crate::infra::command::{CommandRunner, CommandSpec};

/// `pacman -Qq`
pub fn installed_command(session: &Session) -> CommandSpec {
    CommandSpec::new(session.config().pacman()).arg("-Qq")
}

/// Names from enumeration output: the first field of each non-blank line
pub fn parse_installed(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// List installed packages
pub fn list_installed<R: CommandRunner + ?Sized>(
    session: &Session,
    runner: &R,
) -> Result<Vec<String>, CommandError> {
    let output = runner.capture(&installed_command(session))?;
    Ok(parse_installed(&output))
}
