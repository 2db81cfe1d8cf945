//! Merge command implementation

use std::path::Path;

use colored::Colorize;

use rulesync_core::{Outcome, SyncEngine};

use crate::error::{CliError, Result};

/// Run the merge command
///
/// Publishes `cwd`'s rules to the main location and fans them out to every
/// registered project. Per-project failures are reported but do not fail
/// the command; a wholly unusable source does.
pub fn run_merge(engine: &SyncEngine, cwd: &Path, json: bool) -> Result<Outcome> {
    if !json {
        println!(
            "{} Publishing rules to all registered projects...",
            "=>".blue().bold()
        );
    }

    let report = match engine.merge(cwd) {
        Ok(report) => report,
        Err(rulesync_core::Error::NotFound { path }) => {
            return Err(CliError::user(format!(
                "No rules directory at {}. Run `rulesync init` first.",
                path.display()
            )));
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        let output = serde_json::json!({
            "succeeded": report.succeeded,
            "failed": report.failed(),
            "failures": serde_json::to_value(&report.failures)?,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(Outcome::Completed);
    }

    if report.is_clean() {
        println!(
            "{} Synchronized {} project(s).",
            "OK".green().bold(),
            report.succeeded
        );
    } else {
        println!(
            "{} Synchronized {} of {} project(s):",
            "PARTIAL".yellow().bold(),
            report.succeeded,
            report.total()
        );
        for failure in &report.failures {
            println!(
                "   {} {}: {}",
                "!".yellow(),
                failure.project.display().to_string().cyan(),
                failure.reason
            );
        }
        println!();
        println!("Run {} to drop stale projects.", "rulesync clean".cyan());
    }

    Ok(Outcome::Completed)
}
