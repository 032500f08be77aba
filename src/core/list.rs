//! Package list loading
//!
//! Reads the newline-delimited package list (`packages.txt` by default).

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::ListError;

/// Read the non-blank lines of a package list, in order
///
/// Returns `Ok(None)` when the file does not exist. Surrounding whitespace
/// (including a trailing `\r`) is trimmed from each line.
pub fn load_package_list(path: &Path) -> Result<Option<Vec<String>>, ListError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("Package list {} not found", path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(ListError::Read {
                path: path.to_path_buf(),
                error: e.to_string(),
            })
        }
    };

    let mut names = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| ListError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }

    Ok(Some(names))
}
