//! rulesync CLI
//!
//! Keeps shared rule files in sync between a main location and any number
//! of registered projects.

mod cli;
mod commands;
mod error;
mod interactive;
mod logging;

use clap::Parser;
use colored::Colorize;

use rulesync_core::{AppPaths, Config, Outcome, SyncEngine};
use rulesync_git::GitFetcher;

use cli::{Cli, Commands};
use error::{CliError, Result};
use interactive::DialoguerPrompter;

fn main() {
    match run() {
        Ok(Outcome::Completed) => {}
        Ok(Outcome::Cancelled) => {
            println!("{}", "Operation cancelled.".yellow());
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            if let CliError::Core(rulesync_core::Error::RegistryPersistence { .. }) = &e {
                eprintln!(
                    "{}",
                    "Rules were copied, but the project could not be registered for future syncs."
                        .yellow()
                );
            }
            std::process::exit(1);
        }
    }
}

fn run() -> Result<Outcome> {
    let cli = Cli::parse();

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            println!("{} Shared ruleset synchronizer", "rulesync".green().bold());
            println!();
            println!("Run {} for available commands.", "rulesync --help".cyan());
            return Ok(Outcome::Completed);
        }
    };

    // Completions write to stdout and need no engine or app directories
    if let Commands::Completions { shell } = &command {
        commands::run_completions(*shell);
        return Ok(Outcome::Completed);
    }

    let config = Config::from_env();
    let paths = AppPaths::resolve(&config.app_name)?;
    paths.ensure(config.dir_mode)?;

    if let Err(e) = logging::init(&paths.log_dir, cli.verbose) {
        eprintln!(
            "{}: failed to set up logging: {}",
            "warning".yellow().bold(),
            e
        );
    }

    let mut engine = SyncEngine::new(
        config,
        &paths,
        Box::new(GitFetcher::new()),
        Box::new(DialoguerPrompter::new()),
    )?;

    let cwd = std::env::current_dir()?;

    match command {
        Commands::Init => commands::run_init(&mut engine, &cwd),
        Commands::Merge { json } => commands::run_merge(&engine, &cwd, json),
        Commands::Sync => commands::run_sync(&engine, &cwd),
        Commands::Clean => commands::run_clean(&mut engine),
        Commands::List { json } => commands::run_list(&engine, json),
        Commands::Completions { .. } => Ok(Outcome::Completed), // handled above
    }
}
