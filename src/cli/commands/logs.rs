//! CLI command for `pacstash logs`

use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::output::Console;
use crate::core::browse::{list_logs, print_listing};
use crate::core::session::Session;

/// List the logs of the working directory without prompting
pub fn execute<O: Write, E: Write>(session: &Session, console: &mut Console<O, E>) -> Result<()> {
    let logs = list_logs(session.root()).context("Failed to list logs")?;
    if logs.is_empty() {
        console.info("No logs found.");
    } else {
        print_listing(&logs, console);
    }
    Ok(())
}
