//! Stash workflows
//!
//! The operations the menu and the subcommands offer, composed from the
//! fetcher, the archive builder, the log writer and the list loader. None
//! of them fails as a whole: problems are reported on the console and the
//! remaining steps run.

use std::io::Write;
use std::path::PathBuf;

use super::archive::ArchiveBuilder;
use super::fetch::{FetchReport, PackageFetcher};
use super::installed::list_installed;
use super::list::load_package_list;
use super::log::append_log;
use super::package::{parse_names, PackageName};
use super::session::Session;
use crate::cli::output::Console;
use crate::error::{ArchiveError, LogError};
use crate::infra::command::CommandRunner;

/// Fetch results plus the images built afterwards
#[derive(Debug, Default)]
pub struct PackRun {
    /// Fetch outcomes
    pub fetch: FetchReport,
    /// One result per image, in creation order (the whole tree last)
    pub images: Vec<Result<PathBuf, ArchiveError>>,
}

/// Validate operator-supplied names, reporting every rejected one
///
/// Returns `None`, after telling the operator, when nothing usable is left.
pub fn accept_names<O: Write, E: Write>(
    raw: &[String],
    console: &mut Console<O, E>,
) -> Option<Vec<PackageName>> {
    if raw.is_empty() {
        console.info("No package names provided. Returning to menu.");
        return None;
    }

    let parsed = parse_names(raw);
    for rejected in &parsed.rejected {
        console.error(rejected);
    }

    if parsed.valid.is_empty() {
        console.info("No valid package names provided. Returning to menu.");
        None
    } else {
        Some(parsed.valid)
    }
}

/// Workflows over one session
pub struct Stash<'a, R: CommandRunner + ?Sized> {
    session: &'a Session,
    runner: &'a R,
}

impl<'a, R: CommandRunner + ?Sized> Stash<'a, R> {
    /// Create the workflows for a session
    pub fn new(session: &'a Session, runner: &'a R) -> Self {
        Self { session, runner }
    }

    /// The session
    pub fn session(&self) -> &Session {
        self.session
    }

    /// Fetch and store packages
    pub fn store<O: Write, E: Write>(
        &self,
        names: &[PackageName],
        console: &mut Console<O, E>,
    ) -> FetchReport {
        PackageFetcher::new(self.session, self.runner).fetch_all(names, console)
    }

    /// Fetch and store the packages named in the package list file
    pub fn store_from_list<O: Write, E: Write>(
        &self,
        console: &mut Console<O, E>,
    ) -> Option<FetchReport> {
        let names = self.list_names(console)?;
        Some(self.store(&names, console))
    }

    /// Valid names from the package list file
    ///
    /// Returns `None`, after telling the operator, when the file is missing
    /// or holds nothing usable.
    pub fn list_names<O: Write, E: Write>(
        &self,
        console: &mut Console<O, E>,
    ) -> Option<Vec<PackageName>> {
        let path = self.session.package_list_path();
        let file_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        let raw = match load_package_list(&path) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                console.error(format!(
                    "Error: '{file_name}' not found in {}.",
                    path.parent().map_or_else(String::new, |p| p.display().to_string())
                ));
                return None;
            }
            Err(e) => {
                console.error(&e);
                return None;
            }
        };

        if raw.is_empty() {
            console.info(format!(
                "No packages found in '{file_name}'. Returning to menu."
            ));
            return None;
        }

        accept_names(&raw, console)
    }

    /// Fetch each package, pack it, then pack the whole tree
    pub fn store_and_pack<O: Write, E: Write>(
        &self,
        names: &[PackageName],
        console: &mut Console<O, E>,
    ) -> PackRun {
        let fetcher = PackageFetcher::new(self.session, self.runner);
        let builder = ArchiveBuilder::new(self.session, self.runner);
        let mut run = PackRun::default();

        for name in names {
            run.fetch.packages.push(fetcher.fetch_one(name, console));
            run.images.push(builder.pack_package(name, console));
        }
        run.images.push(builder.pack_tree(console));

        run
    }

    /// Fetch every installed package, then pack the whole tree
    pub fn store_installed<O: Write, E: Write>(
        &self,
        console: &mut Console<O, E>,
    ) -> Option<PackRun> {
        let fetch = self.fetch_installed(console)?;
        let tree = ArchiveBuilder::new(self.session, self.runner).pack_tree(console);

        Some(PackRun {
            fetch,
            images: vec![tree],
        })
    }

    /// Fetch and store every installed package
    pub fn fetch_installed<O: Write, E: Write>(
        &self,
        console: &mut Console<O, E>,
    ) -> Option<FetchReport> {
        console.info("Fetching list of installed packages...");

        let raw = match list_installed(self.session, self.runner) {
            Ok(raw) => raw,
            Err(e) => {
                console.error(format!("Error fetching installed packages: {e}"));
                return None;
            }
        };
        if raw.is_empty() {
            console.error("No installed packages found.");
            return None;
        }
        tracing::info!("{} installed package(s) to store", raw.len());

        let names = accept_names(&raw, console)?;
        Some(self.store(&names, console))
    }

    /// Record package names in the download log only
    pub fn log<O: Write, E: Write>(
        &self,
        names: &[PackageName],
        console: &mut Console<O, E>,
    ) -> Result<PathBuf, LogError> {
        let result = append_log(self.session, names, console);
        if let Err(e) = &result {
            console.error(e);
        }
        result
    }
}
