//! Operator-facing console output
//!
//! Informational lines are blue, successes green and errors red. Colors are
//! cosmetic; with color disabled the text is identical.

use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};

use crossterm::style::Stylize;

/// Console that writes informational output to `out` and errors to `err`
///
/// Output is best-effort: a failed write to the terminal is not an error
/// for the operation being reported.
pub struct Console<O: Write, E: Write> {
    out: O,
    err: E,
    color: bool,
}

impl Console<Stdout, Stderr> {
    /// Console over the process's stdout and stderr
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), color)
    }
}

impl<O: Write, E: Write> Console<O, E> {
    /// Create a console over arbitrary writers
    pub fn new(out: O, err: E, color: bool) -> Self {
        Self { out, err, color }
    }

    /// Informational line (blue)
    pub fn info(&mut self, message: impl Display) {
        let line = message.to_string();
        if self.color {
            let _ = writeln!(self.out, "{}", line.dark_blue());
        } else {
            let _ = writeln!(self.out, "{line}");
        }
    }

    /// Success line (green)
    pub fn success(&mut self, message: impl Display) {
        let line = message.to_string();
        if self.color {
            let _ = writeln!(self.out, "{}", line.green());
        } else {
            let _ = writeln!(self.out, "{line}");
        }
    }

    /// Error line (red, on the error stream)
    pub fn error(&mut self, message: impl Display) {
        let line = message.to_string();
        if self.color {
            let _ = writeln!(self.err, "{}", line.red());
        } else {
            let _ = writeln!(self.err, "{line}");
        }
        let _ = self.err.flush();
    }

    /// Banner line (red)
    pub fn banner(&mut self, message: impl Display) {
        let line = message.to_string();
        if self.color {
            let _ = writeln!(self.out, "{}", line.red());
        } else {
            let _ = writeln!(self.out, "{line}");
        }
    }

    /// Uncolored line, used for file contents
    pub fn plain(&mut self, message: impl Display) {
        let _ = writeln!(self.out, "{message}");
    }

    /// Prompt without a trailing newline
    pub fn prompt(&mut self, message: impl Display) {
        let text = message.to_string();
        if self.color {
            let _ = write!(self.out, "{}", text.dark_blue());
        } else {
            let _ = write!(self.out, "{text}");
        }
        let _ = self.out.flush();
    }

    /// Error line followed by one line per cause
    pub fn error_chain(&mut self, error: &anyhow::Error) {
        self.error(format!("error: {error}"));
        for cause in error.chain().skip(1) {
            self.error(format!("  caused by: {cause}"));
        }
    }

    /// Consume the console and return its writers
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error, color: bool) {
    Console::stdio(color).error_chain(error);
}
