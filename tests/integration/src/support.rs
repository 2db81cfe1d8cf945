//! Shared fixtures for the integration scenarios.

// Compiled once per test target; not every target uses every helper.
#![allow(dead_code)]

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use rulesync_core::{AppPaths, Config, Prompter, SetupChoice, SyncEngine};
use rulesync_fs::FileEntry;
use rulesync_git::GitFetcher;

/// Prompter with pre-scripted answers, for driving interactive flows
/// without a terminal.
pub struct ScriptedPrompter {
    pub choice: SetupChoice,
    pub confirm_answer: bool,
    pub overwrite_answer: bool,
    pub url: String,
    pub prompts: Rc<Cell<usize>>,
}

impl ScriptedPrompter {
    /// Answers that let every flow run to completion.
    pub fn completing() -> Self {
        Self {
            choice: SetupChoice::CreateEmpty,
            confirm_answer: true,
            overwrite_answer: true,
            url: String::new(),
            prompts: Rc::new(Cell::new(0)),
        }
    }

    /// Answers that set the main location up from `url`.
    pub fn fetching(url: &str) -> Self {
        Self {
            choice: SetupChoice::FetchRemote,
            url: url.to_string(),
            ..Self::completing()
        }
    }

    fn bump(&self) {
        self.prompts.set(self.prompts.get() + 1);
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, _question: &str) -> rulesync_core::Result<bool> {
        self.bump();
        Ok(self.confirm_answer)
    }

    fn setup_choice(&self) -> rulesync_core::Result<SetupChoice> {
        self.bump();
        Ok(self.choice)
    }

    fn repo_url(&self, default: Option<&str>) -> rulesync_core::Result<String> {
        self.bump();
        if self.url.is_empty() {
            Ok(default.unwrap_or_default().to_string())
        } else {
            Ok(self.url.clone())
        }
    }

    fn confirm_overwrite(
        &self,
        _target: &Path,
        _entries: &[FileEntry],
    ) -> rulesync_core::Result<bool> {
        self.bump();
        Ok(self.overwrite_answer)
    }
}

/// Build an engine rooted at `home` with a real git fetcher.
pub fn engine_at(home: &Path, prompter: ScriptedPrompter) -> SyncEngine {
    let paths = AppPaths::under_root(home);
    SyncEngine::new(
        Config::default(),
        &paths,
        Box::new(GitFetcher::new()),
        Box::new(prompter),
    )
    .unwrap()
}
