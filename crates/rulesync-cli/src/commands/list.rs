//! List command implementation

use colored::Colorize;

use rulesync_core::{Outcome, SyncEngine};
use rulesync_fs::dir_exists;

use crate::error::Result;

/// Run the list command
///
/// Shows every registered project with a marker for whether its directory
/// still exists on disk.
pub fn run_list(engine: &SyncEngine, json: bool) -> Result<Outcome> {
    let entries = engine.projects();

    if json {
        let projects = entries
            .iter()
            .map(|entry| {
                let path = serde_json::to_value(&entry.path)?;
                Ok(serde_json::json!({
                    "path": path,
                    "added_at": entry.added_at,
                    "exists": dir_exists(&entry.path),
                }))
            })
            .collect::<Result<Vec<_>>>()?;
        let output = serde_json::json!({
            "projects": projects,
            "total": entries.len(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(Outcome::Completed);
    }

    if entries.is_empty() {
        println!(
            "No projects registered. Run {} in a project to register it.",
            "rulesync init".cyan()
        );
        return Ok(Outcome::Completed);
    }

    println!("{}", "Registered projects:".bold());
    for entry in entries {
        let marker = if dir_exists(&entry.path) {
            "+".green()
        } else {
            "!".red()
        };
        println!(
            "   {} {} {}",
            marker,
            entry.path.display().to_string().cyan(),
            format!("(added {})", entry.added_at.format("%Y-%m-%d")).dimmed()
        );
    }
    println!();
    println!("Total: {} project(s)", entries.len());

    Ok(Outcome::Completed)
}
