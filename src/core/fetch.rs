//! Package fetching
//!
//! Downloads package archives with pacman without installing them and files
//! each one under `packages/<date>/<name>/`.
//!
//! Every package goes through the same fixed sequence: create the
//! directory, download, locate the new archive in the cache, move it. A
//! failed step is reported and the remaining steps and packages still run.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::package::PackageName;
use super::session::Session;
use crate::cli::output::Console;
use crate::config::defaults::MV;
use crate::error::FetchError;
use crate::infra::command::{CommandRunner, CommandSpec};
use crate::infra::filesystem;
use crate::infra::pkg_cache::{locate_archives, CacheSnapshot};

/// Result of fetching one package
#[derive(Debug)]
pub struct PackageOutcome {
    /// Package name
    pub name: PackageName,
    /// Destination directory
    pub directory: PathBuf,
    /// Archives moved into the directory (paths as they were in the cache)
    pub archives: Vec<PathBuf>,
    /// Failed steps, in order
    pub errors: Vec<FetchError>,
}

impl PackageOutcome {
    /// Whether every step succeeded
    pub fn succeeded(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Result of a fetch run
#[derive(Debug, Default)]
pub struct FetchReport {
    /// One outcome per package, in input order
    pub packages: Vec<PackageOutcome>,
}

impl FetchReport {
    /// Packages with at least one failed step
    pub fn failed(&self) -> impl Iterator<Item = &PackageOutcome> {
        self.packages.iter().filter(|p| !p.succeeded())
    }
}

/// Fetches packages into the session's working tree
pub struct PackageFetcher<'a, R: CommandRunner + ?Sized> {
    session: &'a Session,
    runner: &'a R,
}

impl<'a, R: CommandRunner + ?Sized> PackageFetcher<'a, R> {
    /// Create a fetcher
    pub fn new(session: &'a Session, runner: &'a R) -> Self {
        Self { session, runner }
    }

    /// Fetch every package in order
    pub fn fetch_all<O: Write, E: Write>(
        &self,
        names: &[PackageName],
        console: &mut Console<O, E>,
    ) -> FetchReport {
        let packages = names
            .iter()
            .map(|name| self.fetch_one(name, console))
            .collect();
        FetchReport { packages }
    }

    /// Fetch a single package
    pub fn fetch_one<O: Write, E: Write>(
        &self,
        name: &PackageName,
        console: &mut Console<O, E>,
    ) -> PackageOutcome {
        let directory = self.session.package_dir(name);
        let cache_dir = self.session.config().cache_dir();
        let mut outcome = PackageOutcome {
            name: name.clone(),
            directory: directory.clone(),
            archives: Vec::new(),
            errors: Vec::new(),
        };

        if let Err(e) = filesystem::create_dir_all(&directory) {
            console.error(&e);
            outcome.errors.push(e.into());
        }

        console.info(format!("Downloading package: {name}"));

        let before = scan_or_empty(cache_dir, console);

        if let Err(error) = self.runner.run(&self.download_command(name)) {
            console.error(&error);
            outcome.errors.push(FetchError::Download {
                package: name.to_string(),
                error,
            });
        }

        let after = scan_or_empty(cache_dir, console);
        let archives = locate_archives(&before, &after, name.as_str());

        if archives.is_empty() {
            let e = FetchError::ArchiveNotFound {
                package: name.to_string(),
                cache_dir: cache_dir.to_path_buf(),
            };
            console.error(&e);
            outcome.errors.push(e);
        } else {
            tracing::debug!("Located {} archive(s) for {name}", archives.len());
            match self.runner.run(&self.move_command(&archives, &directory)) {
                Ok(()) => outcome.archives = archives,
                Err(error) => {
                    console.error(&error);
                    outcome.errors.push(FetchError::Move {
                        package: name.to_string(),
                        error,
                    });
                }
            }
        }

        if outcome.succeeded() {
            console.success(format!(
                "Package {name} downloaded successfully to {}",
                directory.display()
            ));
        } else {
            console.error(format!("Package {name} was not stored completely"));
        }

        outcome
    }

    /// `[sudo] pacman -Sw --noconfirm <name>`
    pub fn download_command(&self, name: &PackageName) -> CommandSpec {
        let config = self.session.config();
        CommandSpec::new(config.pacman())
            .args(["-Sw", "--noconfirm"])
            .arg(name.as_str())
            .elevated(config.use_sudo())
    }

    /// `[sudo] mv <archives...> <dir>/`
    pub fn move_command(&self, archives: &[PathBuf], directory: &Path) -> CommandSpec {
        let mut target = directory.as_os_str().to_os_string();
        target.push("/");
        CommandSpec::new(MV)
            .args(archives)
            .arg(target)
            .elevated(self.session.config().use_sudo())
    }
}

fn scan_or_empty<O: Write, E: Write>(cache_dir: &Path, console: &mut Console<O, E>) -> CacheSnapshot {
    CacheSnapshot::scan(cache_dir).unwrap_or_else(|e| {
        console.error(&e);
        CacheSnapshot::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::date::DateStamp;
    use crate::test_utils::runner::FakeRunner;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn session(root: &Path, cache: &Path, sudo: bool) -> Session {
        let mut config = Config::default();
        config.paths.cache_dir = Some(cache.to_path_buf());
        config.tools.sudo = Some(sudo);
        let date = DateStamp::from_date(NaiveDate::from_ymd_opt(2025, 2, 21).unwrap());
        Session::with_date(root, config, date)
    }

    fn quiet_console() -> Console<Vec<u8>, Vec<u8>> {
        Console::new(Vec::new(), Vec::new(), false)
    }

    fn names(raw: &[&str]) -> Vec<PackageName> {
        raw.iter().map(|n| PackageName::new(n).unwrap()).collect()
    }

    #[test]
    fn test_download_command_with_sudo() {
        let root = TempDir::new().unwrap();
        let s = session(root.path(), root.path(), true);
        let runner = FakeRunner::default();
        let fetcher = PackageFetcher::new(&s, &runner);
        let cmd = fetcher.download_command(&names(&["vim"])[0]);
        assert_eq!(cmd.to_string(), "sudo pacman -Sw --noconfirm vim");
    }

    #[test]
    fn test_move_command_targets_directory() {
        let root = TempDir::new().unwrap();
        let s = session(root.path(), root.path(), false);
        let runner = FakeRunner::default();
        let fetcher = PackageFetcher::new(&s, &runner);
        let cmd = fetcher.move_command(
            &[PathBuf::from("/cache/vim-1-1-any.pkg.tar.zst")],
            Path::new("/work/packages/x/vim"),
        );
        assert_eq!(
            cmd.to_string(),
            "mv /cache/vim-1-1-any.pkg.tar.zst /work/packages/x/vim/"
        );
    }

    #[test]
    fn test_creates_one_directory_per_package() {
        let root = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        let s = session(root.path(), cache.path(), false);
        let runner = FakeRunner::default();

        let mut console = quiet_console();
        let report = PackageFetcher::new(&s, &runner).fetch_all(&names(&["vim", "nano"]), &mut console);

        assert_eq!(report.packages.len(), 2);
        let dated = s.dated_dir();
        let mut created: Vec<_> = std::fs::read_dir(&dated)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        created.sort();
        assert_eq!(created, vec!["nano", "vim"]);
    }

    #[test]
    fn test_missing_archive_is_reported_not_silent() {
        let root = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        let s = session(root.path(), cache.path(), false);
        let runner = FakeRunner::default();

        let mut console = quiet_console();
        let outcome = PackageFetcher::new(&s, &runner).fetch_one(&names(&["vim"])[0], &mut console);

        assert!(!outcome.succeeded());
        assert!(matches!(outcome.errors[0], FetchError::ArchiveNotFound { .. }));
        // Only the download ran; no move without an archive
        assert_eq!(runner.rendered(), vec!["pacman -Sw --noconfirm vim"]);
        let (_, err) = console.into_parts();
        assert!(String::from_utf8(err).unwrap().contains("No archive for 'vim'"));
    }

    #[test]
    fn test_cached_archive_is_moved() {
        let root = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        std::fs::write(cache.path().join("vim-9.1-1-x86_64.pkg.tar.zst"), "").unwrap();
        std::fs::write(cache.path().join("vim-runtime-9.1-1-x86_64.pkg.tar.zst"), "").unwrap();
        let s = session(root.path(), cache.path(), false);
        let runner = FakeRunner::default();

        let mut console = quiet_console();
        let outcome = PackageFetcher::new(&s, &runner).fetch_one(&names(&["vim"])[0], &mut console);

        assert!(outcome.succeeded(), "{:?}", outcome.errors);
        assert_eq!(outcome.archives.len(), 1);
        let calls = runner.rendered();
        assert_eq!(calls.len(), 2);
        assert!(calls[1].starts_with("mv "));
        assert!(calls[1].contains("vim-9.1-1-x86_64.pkg.tar.zst"));
        assert!(!calls[1].contains("vim-runtime"));
    }

    #[test]
    fn test_failed_download_still_attempts_move() {
        let root = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        std::fs::write(cache.path().join("nano-8.0-1-x86_64.pkg.tar.zst"), "").unwrap();
        let s = session(root.path(), cache.path(), false);
        let runner = FakeRunner::failing(&["pacman"]);

        let mut console = quiet_console();
        let outcome = PackageFetcher::new(&s, &runner).fetch_one(&names(&["nano"])[0], &mut console);

        assert!(matches!(outcome.errors[0], FetchError::Download { .. }));
        assert_eq!(runner.rendered().len(), 2);
    }
}
