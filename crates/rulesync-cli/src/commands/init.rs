//! Init command implementation

use std::path::Path;

use colored::Colorize;

use rulesync_core::{Outcome, SyncEngine};

use crate::error::Result;

/// Run the init command
///
/// Copies the main ruleset into `cwd` and registers the project for future
/// merges. The engine drives any prompts; a declined prompt comes back as
/// [`Outcome::Cancelled`] and maps onto the cancelled exit code.
pub fn run_init(engine: &mut SyncEngine, cwd: &Path) -> Result<Outcome> {
    println!(
        "{} Initialising rules in this project...",
        "=>".blue().bold()
    );

    let target = cwd.join(&engine.config().rules_dir_name);
    match engine.init(cwd)? {
        Outcome::Cancelled => Ok(Outcome::Cancelled),
        Outcome::Completed => {
            println!(
                "{} Rules initialised in {}",
                "OK".green().bold(),
                target.display().to_string().cyan()
            );
            Ok(Outcome::Completed)
        }
    }
}
