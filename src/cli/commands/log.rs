//! CLI command for `pacstash log`

use std::io::Write;

use anyhow::{bail, Context, Result};

use crate::cli::output::Console;
use crate::core::log::append_log;
use crate::core::session::Session;
use crate::core::stash::accept_names;

/// Execute the log command
pub fn execute<O: Write, E: Write>(
    session: &Session,
    console: &mut Console<O, E>,
    packages: &[String],
) -> Result<()> {
    let Some(names) = accept_names(packages, console) else {
        bail!("No valid package names given");
    };
    append_log(session, &names, console).context("Failed to write the download log")?;
    Ok(())
}
