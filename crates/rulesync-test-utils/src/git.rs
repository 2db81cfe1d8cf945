//! Local git repositories usable as clone sources.
//!
//! Built entirely through `git2` so tests never depend on a `git` binary or
//! the network.

use std::fs;
use std::path::Path;

/// Initialise a repository at `path` with one committed rule file
/// (`general.md`), making it a valid clone source.
///
/// # Panics
/// Panics if any git or filesystem operation fails.
pub fn seeded_remote(path: &Path) -> git2::Repository {
    let repo = git2::Repository::init(path)
        .unwrap_or_else(|e| panic!("seeded_remote: init failed at {}: {e}", path.display()));

    fs::write(path.join("general.md"), "# General rules\n")
        .unwrap_or_else(|e| panic!("seeded_remote: failed to write rule file: {e}"));

    {
        let mut index = repo
            .index()
            .unwrap_or_else(|e| panic!("seeded_remote: no index: {e}"));
        index
            .add_path(Path::new("general.md"))
            .unwrap_or_else(|e| panic!("seeded_remote: add_path failed: {e}"));
        index
            .write()
            .unwrap_or_else(|e| panic!("seeded_remote: index write failed: {e}"));
        let tree_id = index
            .write_tree()
            .unwrap_or_else(|e| panic!("seeded_remote: write_tree failed: {e}"));
        let tree = repo
            .find_tree(tree_id)
            .unwrap_or_else(|e| panic!("seeded_remote: find_tree failed: {e}"));
        let sig = git2::Signature::now("fixture", "fixture@example.com")
            .unwrap_or_else(|e| panic!("seeded_remote: signature failed: {e}"));
        repo.commit(Some("HEAD"), &sig, &sig, "seed ruleset", &tree, &[])
            .unwrap_or_else(|e| panic!("seeded_remote: commit failed: {e}"));
    }

    repo
}
