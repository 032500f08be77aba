//! CLI command for `pacstash doctor`
//!
//! Checks the external tools and reports issues with suggestions.

use std::io::Write;

use anyhow::Result;

use crate::cli::output::Console;
use crate::core::doctor::run_doctor;
use crate::core::session::Session;

/// Execute the doctor command
pub fn execute<O: Write, E: Write>(session: &Session, console: &mut Console<O, E>) -> Result<()> {
    let report = run_doctor(session.config());

    console.info("Checking external tools...");
    for check in &report.checks {
        let optional = if check.required { "" } else { " [optional]" };
        if check.passed {
            let location = check
                .path
                .as_ref()
                .map(|p| format!(" ({})", p.display()))
                .unwrap_or_default();
            console.success(format!("  ok {}{location}{optional}", check.name));
        } else {
            console.error(format!("  missing {}{optional}", check.name));
            if let Some(suggestion) = &check.suggestion {
                console.plain(format!("      Suggestion: {suggestion}"));
            }
        }
    }

    for issue in &report.config_issues {
        console.info(format!("  warning: {issue}"));
    }

    let passed = report.passed_count();
    let total = report.checks.len();
    let missing: Vec<&str> = report
        .failed_required()
        .iter()
        .map(|check| check.name.as_str())
        .collect();

    if report.all_passed() {
        console.success(format!("All checks passed ({passed}/{total})"));
        Ok(())
    } else if missing.is_empty() {
        console.info(format!(
            "{passed}/{total} checks passed (optional tools missing or configuration issues)"
        ));
        Ok(())
    } else {
        Err(anyhow::anyhow!("Missing required tools: {}", missing.join(", ")))
    }
}
