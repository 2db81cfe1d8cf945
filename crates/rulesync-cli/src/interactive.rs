//! Interactive prompts for CLI commands
//!
//! Implements the core [`Prompter`] seam with dialoguer so the sync engine
//! stays testable with scripted answers.

use std::path::Path;
use std::sync::OnceLock;

use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use regex::Regex;

use rulesync_core::{Prompter, SetupChoice};
use rulesync_fs::FileEntry;

/// Choices offered when the main ruleset location needs setup. Order is
/// significant: indices map onto [`SetupChoice`] variants.
const SETUP_OPTIONS: &[&str] = &[
    "Create an empty ruleset",
    "Fetch a ruleset from a git repository",
    "Cancel",
];

/// Terminal-backed prompter.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_error(e: dialoguer::Error) -> rulesync_core::Error {
    rulesync_core::Error::Prompt {
        message: e.to_string(),
    }
}

/// Loose shape check for git URLs and local paths. Reachability is the
/// fetcher's job; this only catches obvious typos before we get there.
fn looks_like_repo_url(input: &str) -> bool {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    let re = URL_RE.get_or_init(|| {
        Regex::new(r"^(https?://|git@|ssh://|git://|file://|/|\./|~/)\S+").expect("valid pattern")
    });
    re.is_match(input.trim())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, question: &str) -> rulesync_core::Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(prompt_error)
    }

    fn setup_choice(&self) -> rulesync_core::Result<SetupChoice> {
        let selection = Select::new()
            .with_prompt("The main ruleset location needs to be set up")
            .items(SETUP_OPTIONS)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        Ok(match selection {
            0 => SetupChoice::CreateEmpty,
            1 => SetupChoice::FetchRemote,
            _ => SetupChoice::Cancel,
        })
    }

    fn repo_url(&self, default: Option<&str>) -> rulesync_core::Result<String> {
        let mut input = Input::<String>::new().with_prompt("Git repository URL");
        if let Some(default) = default {
            input = input.default(default.to_string());
        }

        let url = input
            .validate_with(|value: &String| -> std::result::Result<(), &str> {
                if looks_like_repo_url(value) {
                    Ok(())
                } else {
                    Err("enter a git URL (https://, git@, ssh://) or a local path")
                }
            })
            .interact_text()
            .map_err(prompt_error)?;

        Ok(url.trim().to_string())
    }

    fn confirm_overwrite(&self, target: &Path, entries: &[FileEntry]) -> rulesync_core::Result<bool> {
        println!();
        println!(
            "{} already contains {} file(s) that will be overwritten:",
            target.display().to_string().cyan(),
            entries.len()
        );
        println!();
        println!("   {:<36} {:>10}  {}", "Name".bold(), "Size".bold(), "Modified".bold());
        for entry in entries {
            let modified = chrono::DateTime::<chrono::Local>::from(entry.modified);
            println!(
                "   {:<36} {:>10}  {}",
                entry.name,
                format_size(entry.size),
                modified.format("%Y-%m-%d %H:%M")
            );
        }
        println!();

        Confirm::new()
            .with_prompt("Continue and overwrite these files?")
            .default(false)
            .interact()
            .map_err(prompt_error)
    }
}
