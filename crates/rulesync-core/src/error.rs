//! Error types for rulesync-core

use std::path::PathBuf;

/// Result type for rulesync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rulesync-core operations
///
/// Operator cancellation is not represented here; cancellable operations
/// return [`crate::Outcome`] inside `Ok` so callers can tell intent from
/// failure by type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A directory required by the operation is missing
    #[error("Not found: {path}")]
    NotFound { path: PathBuf },

    /// The registry could not be written durably
    #[error("Could not persist registry at {path}: {source}")]
    RegistryPersistence {
        path: PathBuf,
        #[source]
        source: rulesync_fs::Error,
    },

    /// The fetcher rejected the URL before anything was mutated
    #[error("Not a reachable repository: {url}")]
    InvalidRepository { url: String },

    /// The operator I/O channel itself failed (not a declined answer)
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// Platform config/data directories could not be resolved
    #[error("Could not resolve a home directory for application paths")]
    NoHomeDirectory,

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from rulesync-fs
    #[error(transparent)]
    Fs(#[from] rulesync_fs::Error),

    /// Git error from rulesync-git
    #[error(transparent)]
    Git(#[from] rulesync_git::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}
