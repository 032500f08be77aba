//! Run date stamp
//!
//! The `DD-MM-YYYY` stamp namespaces the working tree and the download log
//! of one run.

use std::fmt;

use chrono::{Local, NaiveDate};

use crate::config::defaults::DATE_FORMAT;

/// Calendar date formatted as `DD-MM-YYYY`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateStamp(String);

impl DateStamp {
    /// Today's date in local time
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Stamp for a specific date
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(DATE_FORMAT).to_string())
    }

    /// The formatted stamp
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DateStamp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
