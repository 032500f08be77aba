//! Interactive menu
//!
//! Reads a choice per line, dispatches it and returns to the prompt. No
//! operation ends the loop; only the end of input does.

use std::io::{self, BufRead, Write};

use crate::cli::output::Console;
use crate::core::browse::{list_logs, print_listing, select_log, show_log};
use crate::core::package::{split_names, PackageName};
use crate::core::session::Session;
use crate::core::stash::{accept_names, Stash};
use crate::infra::command::CommandRunner;

const BANNER: &str = r"
                      _            _
 _ __   __ _  ___ ___| |_ __ _ ___| |__
| '_ \ / _` |/ __/ __| __/ _` / __| '_ \
| |_) | (_| | (__\__ \ || (_| \__ \ | | |
| .__/ \__,_|\___|___/\__\__,_|___/_| |_|
|_|";

/// Menu lines, in display order
///
/// Entry 5 is listed but has no operation behind it.
pub const MENU_ENTRIES: [&str; 8] = [
    "1. Download and store .pkg.tar.zst packages.",
    "2. Download and install packages.",
    "3. Download packages from list in packages.txt.",
    "4. Only store package names in the log.",
    "5. Install packages from the log.",
    "6. Download and store a package, then create SquashFS.",
    "7. Download and store all installed packages, then create SquashFS.",
    "8. Open logs.",
];

/// Message for anything that is not a dispatchable choice
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// A dispatchable menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1: fetch and store
    Store,
    /// 2: announced only, nothing is installed
    DownloadAndInstall,
    /// 3: fetch the package list file
    StoreFromList,
    /// 4: log names only
    LogOnly,
    /// 6: fetch one package, pack it, pack the tree
    StoreAndPack,
    /// 7: fetch all installed packages, pack the tree
    StoreInstalled,
    /// 8: browse logs
    OpenLogs,
}

impl MenuChoice {
    /// Parse an input line; `None` for anything that is not 1-4 or 6-8
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(Self::Store),
            2 => Some(Self::DownloadAndInstall),
            3 => Some(Self::StoreFromList),
            4 => Some(Self::LogOnly),
            6 => Some(Self::StoreAndPack),
            7 => Some(Self::StoreInstalled),
            8 => Some(Self::OpenLogs),
            _ => None,
        }
    }
}

/// Interactive menu loop over an input stream and a console
pub struct MenuController<'a, R, I, O, E>
where
    R: CommandRunner + ?Sized,
    I: BufRead,
    O: Write,
    E: Write,
{
    stash: Stash<'a, R>,
    input: I,
    console: &'a mut Console<O, E>,
}

impl<'a, R, I, O, E> MenuController<'a, R, I, O, E>
where
    R: CommandRunner + ?Sized,
    I: BufRead,
    O: Write,
    E: Write,
{
    /// Create a menu
    pub fn new(
        session: &'a Session,
        runner: &'a R,
        input: I,
        console: &'a mut Console<O, E>,
    ) -> Self {
        Self {
            stash: Stash::new(session, runner),
            input,
            console,
        }
    }

    /// Run until the input ends
    pub fn run(&mut self) -> io::Result<()> {
        self.print_banner();
        loop {
            self.print_menu();
            let Some(line) = self.prompt_line("Enter your choice: ")? else {
                self.console.plain("");
                tracing::debug!("End of input, leaving menu");
                return Ok(());
            };
            self.dispatch(&line)?;
        }
    }

    /// Handle one choice line
    pub fn dispatch(&mut self, line: &str) -> io::Result<()> {
        match MenuChoice::parse(line) {
            Some(choice) => {
                tracing::debug!(?choice, "menu choice");
                self.execute(choice)
            }
            None => {
                tracing::debug!(input = line, "rejected menu input");
                self.console.info(INVALID_CHOICE);
                Ok(())
            }
        }
    }

    fn execute(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::Store => {
                if let Some(names) = self.read_names()? {
                    self.stash.store(&names, self.console);
                }
            }
            MenuChoice::DownloadAndInstall => {
                if self.read_names()?.is_some() {
                    self.console.info("Downloading and installing packages...");
                }
            }
            MenuChoice::StoreFromList => {
                self.stash.store_from_list(self.console);
            }
            MenuChoice::LogOnly => {
                if let Some(names) = self.read_names()? {
                    // Already reported on the console
                    let _ = self.stash.log(&names, self.console);
                }
            }
            MenuChoice::StoreAndPack => {
                let line = self
                    .prompt_line("Enter the package name to download and create SquashFS: ")?
                    .unwrap_or_default();
                let name = line.trim();
                if name.is_empty() {
                    self.console
                        .info("No package name provided. Returning to menu.");
                } else {
                    match PackageName::new(name) {
                        Ok(name) => {
                            self.stash.store_and_pack(&[name], self.console);
                        }
                        Err(e) => self.console.error(e),
                    }
                }
            }
            MenuChoice::StoreInstalled => {
                self.stash.store_installed(self.console);
            }
            MenuChoice::OpenLogs => self.open_logs()?,
        }
        Ok(())
    }

    fn read_names(&mut self) -> io::Result<Option<Vec<PackageName>>> {
        let line = self
            .prompt_line("Enter the package names (separated by spaces): ")?
            .unwrap_or_default();
        Ok(accept_names(&split_names(&line), self.console))
    }

    fn open_logs(&mut self) -> io::Result<()> {
        self.console.info("Opening logs...");

        let logs = match list_logs(self.stash.session().root()) {
            Ok(logs) => logs,
            Err(e) => {
                self.console.error(e);
                return Ok(());
            }
        };
        if logs.is_empty() {
            self.console.info("No logs found.");
            return Ok(());
        }

        print_listing(&logs, self.console);
        let input = self
            .prompt_line("Enter the number of the log to open: ")?
            .unwrap_or_default();

        match select_log(&logs, &input) {
            Ok(path) => {
                if let Err(e) = show_log(path, self.console) {
                    self.console.error(e);
                }
            }
            Err(e) => {
                tracing::debug!("{e}");
                self.console.info("Invalid choice.");
            }
        }
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.console.prompt(prompt);
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn print_banner(&mut self) {
        self.console.banner(BANNER);
        self.console.info(super::version_line());
    }

    fn print_menu(&mut self) {
        self.console.plain("");
        self.console.info("Menu:");
        for entry in MENU_ENTRIES {
            self.console.info(entry);
        }
    }
}
