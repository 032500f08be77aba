//! External command execution
//!
//! Commands are built as a program plus an ordered argument list and are
//! never passed through a shell.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::{Command, Stdio};

use crate::config::defaults::SUDO;
use crate::error::CommandError;

/// A fully-formed external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<OsString>,
}

impl CommandSpec {
    /// Create a command for the given program with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Append several arguments in order
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Run the command through `sudo` when `elevate` is set
    #[must_use]
    pub fn elevated(self, elevate: bool) -> Self {
        if !elevate {
            return self;
        }
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(OsString::from(self.program));
        args.extend(self.args);
        Self {
            program: SUDO.to_string(),
            args,
        }
    }

    /// Program name
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Arguments as (lossy) UTF-8 strings
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    /// Build the std command
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Executes external commands synchronously
pub trait CommandRunner {
    /// Run with inherited stdio; success is a zero exit status
    fn run(&self, spec: &CommandSpec) -> Result<(), CommandError>;

    /// Run with inherited stdin/stderr and return captured stdout
    fn capture(&self, spec: &CommandSpec) -> Result<String, CommandError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, spec: &CommandSpec) -> Result<(), CommandError> {
        (**self).run(spec)
    }

    fn capture(&self, spec: &CommandSpec) -> Result<String, CommandError> {
        (**self).capture(spec)
    }
}

/// Runs commands as real subprocesses
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<(), CommandError> {
        tracing::debug!(command = %spec, "running command");

        let status = spec
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| CommandError::Spawn {
                command: spec.to_string(),
                error: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            tracing::debug!(command = %spec, %status, "command failed");
            Err(CommandError::Failed {
                command: spec.to_string(),
                status: status.to_string(),
            })
        }
    }

    fn capture(&self, spec: &CommandSpec) -> Result<String, CommandError> {
        tracing::debug!(command = %spec, "capturing command output");

        let output = spec
            .to_command()
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| CommandError::Spawn {
                command: spec.to_string(),
                error: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(CommandError::Failed {
                command: spec.to_string(),
                status: output.status.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
