//! Clean command implementation

use colored::Colorize;

use rulesync_core::{Outcome, SyncEngine};

use crate::error::Result;

/// Run the clean command
///
/// Drops registry entries whose project directories are gone. Project
/// files themselves are never touched.
pub fn run_clean(engine: &mut SyncEngine) -> Result<Outcome> {
    println!(
        "{} Cleaning stale registry entries...",
        "=>".blue().bold()
    );

    let removed = engine.clean()?;
    if removed == 0 {
        println!(
            "{} Registry is clean. No stale projects found.",
            "OK".green().bold()
        );
    } else {
        println!(
            "{} Removed {} stale project(s) from the registry.",
            "OK".green().bold(),
            removed
        );
    }

    Ok(Outcome::Completed)
}
