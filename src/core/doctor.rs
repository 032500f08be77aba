//! Doctor command logic
//!
//! Checks that the external tools pacstash drives are installed and that
//! the package cache exists.

use std::path::PathBuf;

use super::config::Config;
use crate::config::defaults::SUDO;

/// Result of a single dependency check
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the dependency being checked
    pub name: String,
    /// Whether the check passed
    pub passed: bool,
    /// Resolved location, if found
    pub path: Option<PathBuf>,
    /// Error message if check failed
    pub error: Option<String>,
    /// Suggestion for fixing the issue
    pub suggestion: Option<String>,
    /// Whether this is a required or optional dependency
    pub required: bool,
}

impl CheckResult {
    /// Create a passing check result
    pub fn pass(name: &str, path: Option<PathBuf>, required: bool) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            path,
            error: None,
            suggestion: None,
            required,
        }
    }

    /// Create a failing check result
    pub fn fail(name: &str, error: &str, suggestion: Option<&str>, required: bool) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            path: None,
            error: Some(error.to_string()),
            suggestion: suggestion.map(String::from),
            required,
        }
    }
}

/// Overall doctor report
#[derive(Debug, Default)]
pub struct DoctorReport {
    /// Individual check results
    pub checks: Vec<CheckResult>,
    /// Configuration issues found
    pub config_issues: Vec<String>,
}

impl DoctorReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check result
    pub fn add_check(&mut self, result: CheckResult) {
        self.checks.push(result);
    }

    /// Add a configuration issue
    pub fn add_config_issue(&mut self, issue: String) {
        self.config_issues.push(issue);
    }

    /// Check if all checks passed (including optional)
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed) && self.config_issues.is_empty()
    }

    /// Count passed checks
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Get all failed required checks
    pub fn failed_required(&self) -> Vec<&CheckResult> {
        self.checks
            .iter()
            .filter(|c| c.required && !c.passed)
            .collect()
    }
}

/// Check that a program resolves on PATH
pub fn check_tool(program: &str, required: bool, suggestion: &str) -> CheckResult {
    match which::which(program) {
        Ok(path) => CheckResult::pass(program, Some(path), required),
        Err(_) => CheckResult::fail(
            program,
            &format!("{program} not found in PATH"),
            Some(suggestion),
            required,
        ),
    }
}

/// Run all doctor checks
pub fn run_doctor(config: &Config) -> DoctorReport {
    let mut report = DoctorReport::new();

    report.add_check(check_tool(
        config.pacman(),
        true,
        "pacstash needs pacman; run it on Arch Linux or a derivative",
    ));
    report.add_check(check_tool(
        config.mksquashfs(),
        true,
        "Install squashfs-tools: pacman -S squashfs-tools",
    ));
    report.add_check(check_tool(
        SUDO,
        config.use_sudo(),
        "Install sudo, or set tools.sudo = false and run pacstash as root",
    ));

    let cache_dir = config.cache_dir();
    if !cache_dir.is_dir() {
        report.add_config_issue(format!(
            "Package cache {} does not exist",
            cache_dir.display()
        ));
    }

    report
}
