//! Download log
//!
//! Appends a dated block of package names to `download-<date>.txt`. The log
//! is never read back except for display.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use super::date::DateStamp;
use super::package::PackageName;
use super::session::Session;
use crate::cli::output::Console;
use crate::error::LogError;

/// Header written at the start of every block
pub fn header_line(date: &DateStamp) -> String {
    format!("Download Log - {date}")
}

/// Line recorded for one package
pub fn entry_line(name: &PackageName) -> String {
    format!("Package \"{name}\"")
}

/// Append one header plus one line per package to the session's log
pub fn append_log<O: Write, E: Write>(
    session: &Session,
    names: &[PackageName],
    console: &mut Console<O, E>,
) -> Result<PathBuf, LogError> {
    let path = session.log_path();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| LogError::Open {
            path: path.clone(),
            error: e.to_string(),
        })?;

    let write_error = |e: std::io::Error| LogError::Write {
        path: path.clone(),
        error: e.to_string(),
    };

    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", header_line(session.date())).map_err(write_error)?;
    for name in names {
        writeln!(writer, "{}", entry_line(name)).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;

    for name in names {
        console.success(format!("Package {name} logged successfully."));
    }

    tracing::info!("Logged {} package(s) to {}", names.len(), path.display());
    Ok(path)
}
