//! Operator I/O seam
//!
//! Interactive decisions reach the engine as plain data through this trait,
//! so the `init` flow is testable with a scripted implementation and the
//! terminal plumbing stays in the CLI crate.

use std::path::Path;

use rulesync_fs::FileEntry;

use crate::Result;

/// The three-way decision offered when the main location needs setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupChoice {
    /// Recreate the main location as an empty directory.
    CreateEmpty,
    /// Clone a remote ruleset into the main location.
    FetchRemote,
    /// Abort the operation.
    Cancel,
}

/// Prompts answered by the operator during interactive operations.
///
/// Every method blocks until an answer arrives; a failed I/O channel (not a
/// declined answer) surfaces as [`crate::Error::Prompt`].
pub trait Prompter {
    /// Ask a yes/no question. `Ok(false)` means the operator declined.
    fn confirm(&self, question: &str) -> Result<bool>;

    /// Offer the main-location setup decision.
    fn setup_choice(&self) -> Result<SetupChoice>;

    /// Ask for a repository URL, offering `default` when present.
    fn repo_url(&self, default: Option<&str>) -> Result<String>;

    /// Show what overwriting `target` would clobber and ask whether to
    /// proceed.
    fn confirm_overwrite(&self, target: &Path, entries: &[FileEntry]) -> Result<bool>;
}
