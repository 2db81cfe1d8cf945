//! Error types for rulesync-git

/// Result type for rulesync-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rulesync-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Clone of {url} failed: {message}")]
    CloneFailed { url: String, message: String },
}
