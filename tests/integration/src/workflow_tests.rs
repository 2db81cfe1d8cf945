//! Multi-project lifecycle scenarios
//!
//! These drive the engine against real directories end to end: one project
//! publishes rules, a second inherits them, a project disappears, and the
//! registry is pruned back to reality.

mod support;

use std::fs;

use rulesync_core::{Outcome, Registry};
use rulesync_fs::dir_exists;
use rulesync_test_utils::{TestSpace, write_rule};

use support::{ScriptedPrompter, engine_at};

/// One engine takes two projects through init, publish, inherit, loss of a
/// project, and registry cleanup.
#[test]
fn full_lifecycle_across_projects() {
    let space = TestSpace::new();
    let api = space.project("api");
    let web = space.project("web");

    let prompter = ScriptedPrompter::completing();
    let prompts = prompter.prompts.clone();
    let mut engine = engine_at(&space.home(), prompter);

    // First init bootstraps an empty main location: one setup choice plus
    // one confirmation to replace the pre-created directory.
    assert_eq!(engine.init(&api).unwrap(), Outcome::Completed);
    assert_eq!(prompts.get(), 2);
    assert!(dir_exists(&api.join(".rules")));
    assert_eq!(engine.projects().len(), 1);

    // The api project authors the first ruleset and publishes it.
    write_rule(&api.join(".rules"), "general.md", "# team rules v1\n");
    let report = engine.merge(&api).unwrap();
    assert_eq!(report.succeeded, 1);
    assert!(report.is_clean());
    space.assert_file_contains("home/data/.rules/general.md", "v1");

    // The second init finds a ready main location and asks nothing.
    assert_eq!(engine.init(&web).unwrap(), Outcome::Completed);
    assert_eq!(prompts.get(), 2);
    assert_eq!(
        fs::read_to_string(web.join(".rules/general.md")).unwrap(),
        "# team rules v1\n"
    );

    // A revision published from web reaches api through the fan-out.
    write_rule(&web.join(".rules"), "general.md", "# team rules v2\n");
    let report = engine.merge(&web).unwrap();
    assert_eq!(report.succeeded, 2);
    assert!(report.is_clean());
    assert_eq!(
        fs::read_to_string(api.join(".rules/general.md")).unwrap(),
        "# team rules v2\n"
    );

    // Losing a project degrades the fan-out without aborting it.
    fs::remove_dir_all(&api).unwrap();
    let report = engine.merge(&web).unwrap();
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed(), 1);
    assert!(report.failures[0].project.ends_with("api"));

    // Cleanup drops exactly the lost project.
    assert_eq!(engine.clean().unwrap(), 1);
    assert_eq!(engine.projects().len(), 1);
    assert!(engine.projects()[0].path.ends_with("web"));
}

/// Registration made by one engine is visible to the next; the reloaded
/// registry drives the fan-out.
#[test]
fn registry_survives_engine_restarts() {
    let space = TestSpace::new();
    let api = space.project("api");

    {
        let mut engine = engine_at(&space.home(), ScriptedPrompter::completing());
        assert_eq!(engine.init(&api).unwrap(), Outcome::Completed);
        write_rule(engine.main_path(), "general.md", "# canonical\n");
    }

    let engine = engine_at(&space.home(), ScriptedPrompter::completing());
    assert_eq!(engine.projects().len(), 1);
    assert!(engine.projects()[0].path.ends_with("api"));

    // Merging the project's still-empty rules keeps main's file (copies
    // never delete) and the fan-out hands it back to the project.
    let report = engine.merge(&api).unwrap();
    assert_eq!(report.succeeded, 1);
    assert_eq!(
        fs::read_to_string(api.join(".rules/general.md")).unwrap(),
        "# canonical\n"
    );
}

/// The registry on disk is plain versioned TOML, loadable on its own.
#[test]
fn registry_file_is_reloadable_toml() {
    let space = TestSpace::new();
    let docs = space.project("docs");

    let mut engine = engine_at(&space.home(), ScriptedPrompter::completing());
    assert_eq!(engine.init(&docs).unwrap(), Outcome::Completed);

    let registry_path = space.home().join("config/registry.toml");
    let content = fs::read_to_string(&registry_path).unwrap();
    assert!(content.contains("version = \"1.0\""), "got: {content}");
    assert!(content.contains("[[projects]]"), "got: {content}");

    let reloaded = Registry::load(registry_path).unwrap();
    assert_eq!(reloaded.len(), 1);
}
