//! CLI command for `pacstash installed`

use std::io::Write;

use anyhow::{bail, Result};

use super::fetch::check_report;
use crate::cli::output::Console;
use crate::core::session::Session;
use crate::core::stash::Stash;
use crate::infra::command::CommandRunner;

/// Execute the installed command
pub fn execute<R, O, E>(
    session: &Session,
    runner: &R,
    console: &mut Console<O, E>,
    squashfs: bool,
) -> Result<()>
where
    R: CommandRunner + ?Sized,
    O: Write,
    E: Write,
{
    let stash = Stash::new(session, runner);

    if !squashfs {
        let Some(report) = stash.fetch_installed(console) else {
            bail!("No installed packages fetched");
        };
        return check_report(&report);
    }

    let Some(run) = stash.store_installed(console) else {
        bail!("No installed packages fetched");
    };
    check_report(&run.fetch)?;
    if run.images.iter().any(Result::is_err) {
        bail!("SquashFS image of the package tree could not be created");
    }
    Ok(())
}
