//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use chrono::NaiveDate;
use pacstash::cli::menu::MenuController;
use pacstash::cli::output::Console;
use pacstash::core::config::Config;
use pacstash::core::date::DateStamp;
use pacstash::core::session::Session;
use pacstash::error::CommandError;
use pacstash::infra::command::{CommandRunner, CommandSpec};
use tempfile::TempDir;

/// Date used by library-driven tests
pub const TEST_DATE: &str = "21-02-2025";

/// Test working directory with a separate package cache
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Stand-in for the pacman cache
    pub cache: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            cache: TempDir::new().expect("Failed to create cache directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Get the path to the package cache
    pub fn cache_path(&self) -> PathBuf {
        self.cache.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Configuration without sudo, pointing at the test cache
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.paths.cache_dir = Some(self.cache_path());
        config.tools.sudo = Some(false);
        config
    }

    /// Session over the project with the fixed test date
    pub fn session(&self) -> Session {
        let date = DateStamp::from_date(NaiveDate::from_ymd_opt(2025, 2, 21).unwrap());
        Session::with_date(self.path(), self.config(), date)
    }

    /// Write a config file for the binary and return its path
    ///
    /// `pacman` resolves to `true`, so downloads succeed without touching
    /// the system and leave the cache empty.
    pub fn write_binary_config(&self) -> PathBuf {
        let path = self.cache.path().join("pacstash.toml");
        let content = format!(
            "[paths]\ncache_dir = {:?}\n\n[tools]\nsudo = false\npacman = \"true\"\nmksquashfs = \"true\"\n",
            self.cache_path().display().to_string()
        );
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Run the binary in the project with the given stdin
    pub fn run_binary(&self, args: &[&str], stdin: &str) -> Output {
        let config = self.write_binary_config();
        let mut child = Command::new(env!("CARGO_BIN_EXE_pacstash"))
            .arg("--no-color")
            .arg("--config")
            .arg(&config)
            .arg("-C")
            .arg(self.path())
            .args(args)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn pacstash");

        {
            use std::io::Write;
            let mut input = child.stdin.take().expect("stdin is piped");
            input
                .write_all(stdin.as_bytes())
                .expect("Failed to write stdin");
        }

        child.wait_with_output().expect("Failed to wait for pacstash")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Command runner that records every command
///
/// With a cache attached it also acts out the commands: a download drops
/// `<name>-1.0-1-x86_64.pkg.tar.zst` into the cache and `mv` moves files.
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<String>>,
    cache: Option<PathBuf>,
    failing: Vec<String>,
    installed: String,
}

impl RecordingRunner {
    /// Record only
    pub fn new() -> Self {
        Self::default()
    }

    /// Record and simulate pacman and mv against `cache`
    pub fn simulating(cache: &Path) -> Self {
        Self {
            cache: Some(cache.to_path_buf()),
            ..Self::default()
        }
    }

    /// Make every invocation of `program` fail
    pub fn failing(mut self, program: &str) -> Self {
        self.failing.push(program.to_string());
        self
    }

    /// Answer captured commands with `output`, as `pacman -Qq` would
    pub fn with_installed(mut self, output: &str) -> Self {
        self.installed = output.to_string();
        self
    }

    /// Recorded commands
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn simulate(&self, spec: &CommandSpec) {
        let Some(cache) = &self.cache else {
            return;
        };
        let args = spec.args_lossy();
        match spec.program() {
            "pacman" if args.first().map(String::as_str) == Some("-Sw") => {
                if let Some(name) = args.last() {
                    let archive = cache.join(format!("{name}-1.0-1-x86_64.pkg.tar.zst"));
                    std::fs::write(archive, b"archive").expect("Failed to write archive");
                }
            }
            "mv" => {
                if let Some((target, sources)) = args.split_last() {
                    for source in sources {
                        let source = Path::new(source);
                        let dest = Path::new(target).join(source.file_name().unwrap());
                        std::fs::rename(source, dest).expect("Failed to move archive");
                    }
                }
            }
            _ => {}
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> Result<(), CommandError> {
        self.calls.borrow_mut().push(spec.to_string());
        if self.failing.iter().any(|p| p == spec.program()) {
            return Err(CommandError::Failed {
                command: spec.to_string(),
                status: "exit status: 1".to_string(),
            });
        }
        self.simulate(spec);
        Ok(())
    }

    fn capture(&self, spec: &CommandSpec) -> Result<String, CommandError> {
        self.run(spec).map(|()| self.installed.clone())
    }
}

/// Console output of a menu run
pub struct MenuOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Drive the menu with `input` until it runs out
pub fn run_menu(session: &Session, runner: &RecordingRunner, input: &str) -> MenuOutput {
    let mut console = Console::new(Vec::new(), Vec::new(), false);
    MenuController::new(session, runner, Cursor::new(input.to_string()), &mut console)
        .run()
        .expect("menu input is in memory");
    let (out, err) = console.into_parts();
    MenuOutput {
        stdout: String::from_utf8(out).expect("stdout is UTF-8"),
        stderr: String::from_utf8(err).expect("stderr is UTF-8"),
    }
}
