//! Ruleset fetching over git

use std::path::Path;

use git2::{Direction, Remote, Repository};

use crate::{Error, Result};

/// Fetches remote rulesets into a local directory.
///
/// The sync engine holds this as a trait object so its `Init` flow can be
/// exercised with a stub fetcher in tests.
pub trait RulesetFetcher {
    /// Check whether `url` designates a reachable repository.
    ///
    /// Never mutates anything; a `false` here must abort the caller's flow
    /// before any deletion or clone happens.
    fn is_valid_repo(&self, url: &str) -> bool;

    /// Clone the repository at `url` into `dest`.
    ///
    /// `dest` must not already contain a repository; callers remove any
    /// previous directory first.
    fn clone_into(&self, url: &str, dest: &Path) -> Result<()>;

    /// Best-effort removal of a partial clone left behind by a failed
    /// `clone_into`. Never fails; problems are logged and swallowed.
    fn cleanup_on_failure(&self, dest: &Path);
}

/// `RulesetFetcher` backed by libgit2.
#[derive(Debug, Default)]
pub struct GitFetcher;

impl GitFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl RulesetFetcher for GitFetcher {
    fn is_valid_repo(&self, url: &str) -> bool {
        let mut remote = match Remote::create_detached(url) {
            Ok(remote) => remote,
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "URL rejected as remote");
                return false;
            }
        };

        match remote.connect(Direction::Fetch) {
            Ok(()) => {
                let _ = remote.disconnect();
                true
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "remote not reachable");
                false
            }
        }
    }

    fn clone_into(&self, url: &str, dest: &Path) -> Result<()> {
        tracing::info!(url = %url, dest = %dest.display(), "cloning ruleset");

        Repository::clone(url, dest).map_err(|e| Error::CloneFailed {
            url: url.to_string(),
            message: e.message().to_string(),
        })?;

        Ok(())
    }

    fn cleanup_on_failure(&self, dest: &Path) {
        if !dest.exists() {
            return;
        }
        if let Err(e) = std::fs::remove_dir_all(dest) {
            tracing::warn!(
                path = %dest.display(),
                error = %e,
                "could not remove partial clone"
            );
        }
    }
}
