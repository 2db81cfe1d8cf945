//! Shared test utilities for the rulesync workspace.
//!
//! Provides standardised fixtures so crate test suites don't each grow their
//! own temp-directory plumbing. Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: local git repositories usable as clone sources
//! - [`space`]: [`TestSpace`] builder for home/project directory layouts

pub mod git;
pub mod space;

pub use git::seeded_remote;
pub use space::{TestSpace, write_rule};
