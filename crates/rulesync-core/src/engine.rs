//! Sync engine: init, merge, sync, and clean
//!
//! The engine owns the registry for the process lifetime and composes the
//! filesystem layer, the fetcher, and the prompter into the four user-facing
//! operations. Interactive flows return [`Outcome`] so cancellation stays
//! distinguishable from failure.

use std::path::{Path, PathBuf};

use rulesync_fs::{copy_dir, dir_exists, ensure_dir, has_rule_files, list_dir, remove_dir_all};
use rulesync_git::RulesetFetcher;
use serde::Serialize;

use crate::config::{AppPaths, Config};
use crate::prompt::{Prompter, SetupChoice};
use crate::registry::{ProjectEntry, Registry};
use crate::{Error, Result};

/// How an interactive operation ended, when it didn't fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation ran to completion.
    Completed,
    /// The operator backed out at a prompt; nothing further was touched.
    Cancelled,
}

/// One project the fan-out could not update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FanoutFailure {
    pub project: PathBuf,
    pub reason: String,
}

/// Aggregate result of a fan-out pass.
///
/// Fan-out never aborts early: every registered project is attempted, and
/// failures are collected here instead of raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanoutReport {
    /// Projects updated successfully.
    pub succeeded: usize,
    /// Projects that could not be updated, with the reason for each.
    pub failures: Vec<FanoutFailure>,
}

impl FanoutReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Orchestrates synchronization between the main ruleset location, the
/// current project, and every registered project.
///
/// Exactly one engine instance exists per process; it loads the registry at
/// construction and owns it until the process exits.
pub struct SyncEngine {
    config: Config,
    main_path: PathBuf,
    registry: Registry,
    fetcher: Box<dyn RulesetFetcher>,
    prompter: Box<dyn Prompter>,
}

impl SyncEngine {
    /// Construct the engine: create the application directories and the main
    /// location, then load the registry.
    ///
    /// A failure here means the installation itself is unusable, and the
    /// process should report it and exit rather than attempt any operation.
    pub fn new(
        config: Config,
        paths: &AppPaths,
        fetcher: Box<dyn RulesetFetcher>,
        prompter: Box<dyn Prompter>,
    ) -> Result<Self> {
        paths.ensure(config.dir_mode)?;

        let main_path = paths.rules_dir(&config.rules_dir_name);
        ensure_dir(&main_path, config.dir_mode)?;

        let registry = Registry::load(paths.registry_file(&config.registry_file_name))?;
        tracing::debug!(
            main = %main_path.display(),
            projects = registry.len(),
            "sync engine ready"
        );

        Ok(Self {
            config,
            main_path,
            registry,
            fetcher,
            prompter,
        })
    }

    /// The canonical ruleset directory.
    pub fn main_path(&self) -> &Path {
        &self.main_path
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tracked projects in insertion order.
    pub fn projects(&self) -> &[ProjectEntry] {
        self.registry.entries()
    }

    /// Establish rules in `cwd` from the main location.
    ///
    /// Walks the operator through main-location setup when it is empty or
    /// missing, warns before overwriting a non-empty target, copies the
    /// ruleset in, and registers `cwd` for future fan-out. Any declined
    /// prompt returns [`Outcome::Cancelled`] without further mutation.
    pub fn init(&mut self, cwd: &Path) -> Result<Outcome> {
        let target = cwd.join(&self.config.rules_dir_name);

        if self.needs_setup()? {
            if self.setup_main_location()? == Outcome::Cancelled {
                tracing::info!("init cancelled during main-location setup");
                return Ok(Outcome::Cancelled);
            }
        }

        if dir_exists(&target) {
            let entries = list_dir(&target)?;
            if !entries.is_empty() && !self.prompter.confirm_overwrite(&target, &entries)? {
                tracing::info!(target = %target.display(), "init cancelled at overwrite prompt");
                return Ok(Outcome::Cancelled);
            }
        }

        copy_dir(&self.main_path, &target)?;
        self.registry.add_project(cwd)?;
        tracing::info!(project = %cwd.display(), "project initialised and registered");

        Ok(Outcome::Completed)
    }

    /// Publish `cwd`'s rules as the new canonical ruleset, then fan out to
    /// every registered project.
    ///
    /// Fails up front with [`Error::NotFound`] when `cwd` has no rules
    /// subdirectory; nothing is mutated in that case. The fan-out itself
    /// never fails; its per-project results come back in the report.
    pub fn merge(&self, cwd: &Path) -> Result<FanoutReport> {
        let source = cwd.join(&self.config.rules_dir_name);
        if !dir_exists(&source) {
            return Err(Error::NotFound { path: source });
        }

        copy_dir(&source, &self.main_path)?;
        tracing::info!(source = %source.display(), "published rules to main location");

        Ok(self.fan_out())
    }

    /// Pull the canonical ruleset into `cwd`, overwriting its rules
    /// subdirectory. Never prompts.
    pub fn sync(&self, cwd: &Path) -> Result<()> {
        if !dir_exists(&self.main_path) {
            return Err(Error::NotFound {
                path: self.main_path.clone(),
            });
        }

        let target = cwd.join(&self.config.rules_dir_name);
        copy_dir(&self.main_path, &target)?;
        tracing::info!(target = %target.display(), "pulled rules from main location");

        Ok(())
    }

    /// Prune registry entries whose directories are gone. Returns the number
    /// removed. The projects' own files are never touched.
    pub fn clean(&mut self) -> Result<usize> {
        self.registry.clean()
    }

    /// Whether the main location must be set up before it can serve as a
    /// copy source: missing entirely, or holding no recognized rule files.
    fn needs_setup(&self) -> Result<bool> {
        if !dir_exists(&self.main_path) {
            return Ok(true);
        }
        Ok(!has_rule_files(&self.main_path, &self.config.rule_extension)?)
    }

    /// Bring the main location into a usable state: recreate it empty, clone
    /// a remote ruleset, or cancel; the operator decides.
    fn setup_main_location(&self) -> Result<Outcome> {
        match self.prompter.setup_choice()? {
            SetupChoice::Cancel => Ok(Outcome::Cancelled),

            SetupChoice::CreateEmpty => {
                if self.clear_main_location()? == Outcome::Cancelled {
                    return Ok(Outcome::Cancelled);
                }
                ensure_dir(&self.main_path, self.config.dir_mode)?;
                tracing::info!(main = %self.main_path.display(), "created empty main location");
                Ok(Outcome::Completed)
            }

            SetupChoice::FetchRemote => {
                let url = self
                    .prompter
                    .repo_url(self.config.default_repo_url.as_deref())?;

                // The URL must be validated before the existing directory is
                // removed; an invalid URL aborts with zero mutation.
                if !self.fetcher.is_valid_repo(&url) {
                    return Err(Error::InvalidRepository { url });
                }

                if self.clear_main_location()? == Outcome::Cancelled {
                    return Ok(Outcome::Cancelled);
                }

                if let Err(e) = self.fetcher.clone_into(&url, &self.main_path) {
                    self.fetcher.cleanup_on_failure(&self.main_path);
                    return Err(e.into());
                }
                tracing::info!(url = %url, "fetched ruleset into main location");
                Ok(Outcome::Completed)
            }
        }
    }

    /// Confirm and remove an existing main location. No-op when absent;
    /// declining the confirmation cancels the caller's whole flow.
    fn clear_main_location(&self) -> Result<Outcome> {
        if !dir_exists(&self.main_path) {
            return Ok(Outcome::Completed);
        }

        let question = format!(
            "Remove the existing main ruleset at {}?",
            self.main_path.display()
        );
        if !self.prompter.confirm(&question)? {
            return Ok(Outcome::Cancelled);
        }

        remove_dir_all(&self.main_path)?;
        Ok(Outcome::Completed)
    }

    /// Copy the main location into every registered project, one at a time.
    ///
    /// A missing project directory is reported as a failure but never
    /// unregistered here; pruning is `clean`'s job. A copy failure on one
    /// project must not keep the remaining projects from being attempted.
    fn fan_out(&self) -> FanoutReport {
        let mut report = FanoutReport::default();

        for project in self.registry.paths() {
            if !dir_exists(project) {
                tracing::warn!(project = %project.display(), "skipping project: directory is gone");
                report.failures.push(FanoutFailure {
                    project: project.to_path_buf(),
                    reason: "project directory no longer exists".to_string(),
                });
                continue;
            }

            let target = project.join(&self.config.rules_dir_name);
            match copy_dir(&self.main_path, &target) {
                Ok(()) => report.succeeded += 1,
                Err(e) => {
                    tracing::warn!(
                        project = %project.display(),
                        error = %e,
                        "sync failed for project"
                    );
                    report.failures.push(FanoutFailure {
                        project: project.to_path_buf(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            succeeded = report.succeeded,
            failed = report.failed(),
            "fan-out complete"
        );
        report
    }
}
