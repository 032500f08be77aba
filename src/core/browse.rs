//! Log browsing
//!
//! Lists the `.txt` files of the working directory, sorted by name and
//! numbered from 1, and prints the one the operator selects.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::cli::output::Console;
use crate::config::defaults::LOG_FILE_EXTENSION;
use crate::error::BrowseError;
use crate::infra::filesystem;

/// Log files in `dir`, sorted by file name
pub fn list_logs(dir: &Path) -> Result<Vec<PathBuf>, BrowseError> {
    Ok(filesystem::list_files_with_extension(dir, LOG_FILE_EXTENSION)?)
}

/// Resolve a 1-based selection against the listing
pub fn select_log<'a>(logs: &'a [PathBuf], input: &str) -> Result<&'a Path, BrowseError> {
    let invalid = || BrowseError::InvalidSelection {
        input: input.trim().to_string(),
        count: logs.len(),
    };
    let index: usize = input.trim().parse().map_err(|_| invalid())?;
    if index == 0 {
        return Err(invalid());
    }
    logs.get(index - 1).map(PathBuf::as_path).ok_or_else(invalid)
}

/// Print the numbered listing
pub fn print_listing<O: Write, E: Write>(logs: &[PathBuf], console: &mut Console<O, E>) {
    for (index, path) in logs.iter().enumerate() {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        console.info(format!("{}. {name}", index + 1));
    }
}

/// Stream a log's contents to the console
pub fn show_log<O: Write, E: Write>(path: &Path, console: &mut Console<O, E>) -> Result<(), BrowseError> {
    let open_error = |e: std::io::Error| BrowseError::Open {
        path: path.to_path_buf(),
        error: e.to_string(),
    };
    let file = File::open(path).map_err(open_error)?;

    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    console.success(format!("Contents of {name}:"));

    for line in BufReader::new(file).lines() {
        console.plain(line.map_err(open_error)?);
    }
    Ok(())
}
