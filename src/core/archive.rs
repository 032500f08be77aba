//! SquashFS image creation
//!
//! Packs a fetched package directory, or the whole `packages/` tree, with
//! mksquashfs using one fixed compression profile.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::package::PackageName;
use super::session::Session;
use crate::cli::output::Console;
use crate::config::defaults::{PACKAGES_DIR, SQUASHFS_PROFILE};
use crate::error::ArchiveError;
use crate::infra::command::{CommandRunner, CommandSpec};

/// Builds SquashFS images from the working tree
pub struct ArchiveBuilder<'a, R: CommandRunner + ?Sized> {
    session: &'a Session,
    runner: &'a R,
}

impl<'a, R: CommandRunner + ?Sized> ArchiveBuilder<'a, R> {
    /// Create a builder
    pub fn new(session: &'a Session, runner: &'a R) -> Self {
        Self { session, runner }
    }

    /// Pack `packages/<date>/<name>` into `packages/<date>/<name>.sfs`
    pub fn pack_package<O: Write, E: Write>(
        &self,
        name: &PackageName,
        console: &mut Console<O, E>,
    ) -> Result<PathBuf, ArchiveError> {
        console.info(format!("Creating SquashFS archive for {name}..."));
        self.pack(
            &self.session.package_dir(name),
            self.session.package_image(name),
            console,
        )
    }

    /// Pack the whole `packages/` tree into `packages.sfs`
    pub fn pack_tree<O: Write, E: Write>(
        &self,
        console: &mut Console<O, E>,
    ) -> Result<PathBuf, ArchiveError> {
        console.info(format!(
            "Creating SquashFS archive for the '{PACKAGES_DIR}' folder..."
        ));
        self.pack(
            &self.session.packages_dir(),
            self.session.tree_image(),
            console,
        )
    }

    /// `[sudo] mksquashfs <source> <output> <profile...>`
    pub fn squashfs_command(&self, source: &Path, output: &Path) -> CommandSpec {
        let config = self.session.config();
        CommandSpec::new(config.mksquashfs())
            .arg(source)
            .arg(output)
            .args(SQUASHFS_PROFILE)
            .elevated(config.use_sudo())
    }

    fn pack<O: Write, E: Write>(
        &self,
        source: &Path,
        output: PathBuf,
        console: &mut Console<O, E>,
    ) -> Result<PathBuf, ArchiveError> {
        match self.runner.run(&self.squashfs_command(source, &output)) {
            Ok(()) => {
                console.success(format!(
                    "SquashFS archive created successfully: {}",
                    output.display()
                ));
                Ok(output)
            }
            Err(error) => {
                let e = ArchiveError::Compression { output, error };
                console.error(&e);
                Err(e)
            }
        }
    }
}
