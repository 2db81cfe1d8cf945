//! Main-location setup against real git repositories
//!
//! `init` on an empty installation walks the operator through the setup
//! decision. These scenarios drive that flow against local repositories
//! built with git2, so no network or `git` binary is involved.

mod support;

use std::fs;

use rulesync_core::{Error, Outcome, SetupChoice};
use rulesync_test_utils::{TestSpace, seeded_remote};

use support::{ScriptedPrompter, engine_at};

/// Choosing "fetch" with a reachable repository installs the cloned ruleset
/// as the main location and hands it to the project.
#[test]
fn init_fetches_ruleset_from_local_remote() {
    let space = TestSpace::new();
    let docs = space.project("docs");
    let remote = space.root().join("ruleset-remote");
    fs::create_dir(&remote).unwrap();
    seeded_remote(&remote);

    let prompter = ScriptedPrompter::fetching(remote.to_str().unwrap());
    let prompts = prompter.prompts.clone();
    let mut engine = engine_at(&space.home(), prompter);

    assert_eq!(engine.init(&docs).unwrap(), Outcome::Completed);

    // Setup choice, URL, and the confirmation to replace the empty main dir.
    assert_eq!(prompts.get(), 3);
    space.assert_file_contains("home/data/.rules/general.md", "General rules");
    space.assert_file_contains("projects/docs/.rules/general.md", "General rules");
    assert_eq!(engine.projects().len(), 1);
}

/// An unreachable repository aborts setup before anything is removed.
#[test]
fn init_rejects_unreachable_remote_without_touching_main() {
    let space = TestSpace::new();
    let docs = space.project("docs");
    // Main location exists but holds no rule files, so setup is offered.
    space.write_file("home/data/.rules/notes.txt", "precious\n");
    let not_a_repo = space.root().join("not-a-repo");
    fs::create_dir(&not_a_repo).unwrap();

    let prompter = ScriptedPrompter::fetching(not_a_repo.to_str().unwrap());
    let prompts = prompter.prompts.clone();
    let mut engine = engine_at(&space.home(), prompter);

    match engine.init(&docs) {
        Err(Error::InvalidRepository { url }) => assert!(url.contains("not-a-repo")),
        other => panic!("expected InvalidRepository, got {other:?}"),
    }

    // The URL was rejected before the removal confirmation, so the existing
    // main location was never put at risk.
    assert_eq!(prompts.get(), 2);
    space.assert_file_contains("home/data/.rules/notes.txt", "precious");
    assert!(engine.projects().is_empty());
    space.assert_file_not_exists("projects/docs/.rules");
}

/// Cancelling at the setup decision leaves the installation untouched.
#[test]
fn cancelled_setup_leaves_no_registration() {
    let space = TestSpace::new();
    let docs = space.project("docs");

    let prompter = ScriptedPrompter {
        choice: SetupChoice::Cancel,
        ..ScriptedPrompter::completing()
    };
    let prompts = prompter.prompts.clone();
    let mut engine = engine_at(&space.home(), prompter);

    assert_eq!(engine.init(&docs).unwrap(), Outcome::Cancelled);

    assert_eq!(prompts.get(), 1);
    assert!(engine.projects().is_empty());
    space.assert_file_not_exists("projects/docs/.rules");
    space.assert_file_not_exists("home/config/registry.toml");
}
