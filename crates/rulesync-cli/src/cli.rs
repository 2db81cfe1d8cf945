//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// rulesync - Keep shared rule files in sync across your projects
#[derive(Parser, Debug)]
#[command(name = "rulesync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Set up the current project with the shared ruleset
    ///
    /// Copies the main ruleset into the project's rules directory and
    /// registers the project so future merges reach it. When the main
    /// location is missing or holds no rule files, offers to create it
    /// empty or fetch it from a git repository first.
    ///
    /// Examples:
    ///   rulesync init          # Set up and register the current directory
    Init,

    /// Publish this project's rules to every registered project
    ///
    /// Copies the project's rules directory to the main location, then
    /// fans the result out to all registered projects. A project that
    /// fails is reported and the rest are still updated.
    Merge {
        /// Output the fan-out report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pull the main ruleset into the current project
    ///
    /// Overwrites the project's rules directory with the main location's
    /// content. Never prompts.
    Sync,

    /// Drop registry entries whose project directories no longer exist
    Clean,

    /// List registered projects
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// Outputs a completion script for your shell.
    ///
    /// Examples:
    ///   rulesync completions bash > ~/.local/share/bash-completion/completions/rulesync
    ///   rulesync completions zsh > ~/.zfunc/_rulesync
    ///   rulesync completions fish > ~/.config/fish/completions/rulesync.fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
