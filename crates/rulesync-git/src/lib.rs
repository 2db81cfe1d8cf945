//! Remote ruleset fetching for rulesync
//!
//! Validates and clones git-hosted rulesets into the main location. The
//! `RulesetFetcher` trait is the seam the sync engine consumes, so tests can
//! run the engine against a stub instead of a real remote.

pub mod error;
pub mod fetcher;

pub use error::{Error, Result};
pub use fetcher::{GitFetcher, RulesetFetcher};
