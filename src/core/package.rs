//! Package names
//!
//! Names are validated before they are used as a path segment or a command
//! argument.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::PackageNameError;

/// Letters, digits and `@._+-`, not starting with `-` or `.`
const NAME_PATTERN: &str = r"^[A-Za-z0-9@_+][A-Za-z0-9@._+-]*$";

fn name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(NAME_PATTERN).expect("Invalid package name pattern"))
}

/// A validated package identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    /// Validate a package name
    pub fn new(name: &str) -> Result<Self, PackageNameError> {
        if name.is_empty() {
            return Err(PackageNameError::Empty);
        }
        if !name_regex().is_match(name) {
            return Err(PackageNameError::InvalidCharacters {
                name: name.to_string(),
            });
        }
        Ok(Self(name.to_string()))
    }

    /// The name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PackageName {
    type Err = PackageNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Split operator input into names on whitespace, dropping empty tokens
pub fn split_names(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// Names parsed from operator input or a list
#[derive(Debug, Default)]
pub struct ParsedNames {
    /// Valid names, first occurrence order, duplicates removed
    pub valid: Vec<PackageName>,
    /// Rejected names with the reason
    pub rejected: Vec<PackageNameError>,
}

/// Validate every raw name
pub fn parse_names<I, S>(raw: I) -> ParsedNames
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ParsedNames::default();
    for name in raw {
        match PackageName::new(name.as_ref()) {
            Ok(name) if parsed.valid.contains(&name) => {
                tracing::debug!("Skipping duplicate package name '{name}'");
            }
            Ok(name) => parsed.valid.push(name),
            Err(e) => parsed.rejected.push(e),
        }
    }
    parsed
}
