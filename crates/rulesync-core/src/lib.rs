//! Core orchestration layer for rulesync
//!
//! This crate ties the leaf crates together into the tool's actual behavior:
//!
//! - **Config / AppPaths**: one explicit configuration value object plus the
//!   platform directories derived from the application name
//! - **Registry**: the durable, deduplicated list of tracked project paths
//! - **Prompter**: the operator-I/O seam, so interactive decisions are data
//!   the engine switches on rather than UI calls inside business logic
//! - **SyncEngine**: the `init` / `merge` / `sync` / `clean` operations and
//!   the failure-isolated fan-out that backs `merge`
//!
//! # Architecture
//!
//! `rulesync-core` sits above the leaf crates and below the CLI:
//!
//! ```text
//!            CLI
//!             |
//!       rulesync-core
//!             |
//!       +-----+------+
//!       |            |
//!  rulesync-fs  rulesync-git
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod prompt;
pub mod registry;

pub use config::{AppPaths, Config};
pub use engine::{FanoutFailure, FanoutReport, Outcome, SyncEngine};
pub use error::{Error, Result};
pub use prompt::{Prompter, SetupChoice};
pub use registry::{ProjectEntry, Registry};
