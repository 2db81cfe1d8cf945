//! Logging setup for the CLI
//!
//! Every run appends to `rulesync.log` in the platform log directory at
//! debug level. The console only sees warnings unless `--verbose` raises
//! it; `RUST_LOG` overrides the console level either way.

use std::io;
use std::path::Path;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber: a file layer plus a console layer.
pub fn init(log_dir: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("rulesync.log"))?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_filter(LevelFilter::DEBUG);

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(console_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    tracing::debug!(verbose, "logging initialised");
    Ok(())
}
