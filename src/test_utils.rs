//! Test utilities
//!
//! Proptest generators and a recording command runner for unit tests.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a valid package name (lowercase alphanumeric with hyphens)
    pub fn package_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,30}[a-z0-9]?".prop_filter("Name must not be empty", |s| !s.is_empty())
    }

    /// Generate a line of a package list: a name, or blank padding
    pub fn list_line() -> impl Strategy<Value = String> {
        prop_oneof![
            package_name(),
            Just(String::new()),
            Just("   ".to_string()),
        ]
    }
}

#[cfg(test)]
pub mod runner {
    use std::cell::RefCell;

    use crate::error::CommandError;
    use crate::infra::command::{CommandRunner, CommandSpec};

    /// Records every command and fails those whose program is listed
    #[derive(Debug, Default)]
    pub struct FakeRunner {
        pub calls: RefCell<Vec<CommandSpec>>,
        pub failing_programs: Vec<String>,
        pub captured: String,
    }

    impl FakeRunner {
        pub fn failing(programs: &[&str]) -> Self {
            Self {
                failing_programs: programs.iter().map(|p| (*p).to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn with_output(output: &str) -> Self {
            Self {
                captured: output.to_string(),
                ..Self::default()
            }
        }

        /// Recorded commands rendered as strings
        pub fn rendered(&self) -> Vec<String> {
            self.calls.borrow().iter().map(ToString::to_string).collect()
        }

        fn outcome(&self, spec: &CommandSpec) -> Result<(), CommandError> {
            self.calls.borrow_mut().push(spec.clone());
            if self.failing_programs.iter().any(|p| p == spec.program()) {
                Err(CommandError::Failed {
                    command: spec.to_string(),
                    status: "exit status: 1".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, spec: &CommandSpec) -> Result<(), CommandError> {
            self.outcome(spec)
        }

        fn capture(&self, spec: &CommandSpec) -> Result<String, CommandError> {
            self.outcome(spec).map(|()| self.captured.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_package_name_generator(name in package_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn test_list_line_generator(line in list_line()) {
            prop_assert!(line.trim().is_empty() || !line.contains(' '));
        }
    }
}
