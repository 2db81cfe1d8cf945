//! Sync command implementation

use std::path::Path;

use colored::Colorize;

use rulesync_core::{Outcome, SyncEngine};

use crate::error::{CliError, Result};

/// Run the sync command
///
/// Pulls the main ruleset into `cwd`, overwriting the project's rules
/// directory. Non-interactive by design.
pub fn run_sync(engine: &SyncEngine, cwd: &Path) -> Result<Outcome> {
    println!(
        "{} Syncing rules from the main location...",
        "=>".blue().bold()
    );

    match engine.sync(cwd) {
        Ok(()) => {
            let target = cwd.join(&engine.config().rules_dir_name);
            println!(
                "{} Rules synced to {}",
                "OK".green().bold(),
                target.display().to_string().cyan()
            );
            Ok(Outcome::Completed)
        }
        Err(rulesync_core::Error::NotFound { path }) => Err(CliError::user(format!(
            "Main ruleset location missing at {}. Run `rulesync init` first.",
            path.display()
        ))),
        Err(e) => Err(e.into()),
    }
}
