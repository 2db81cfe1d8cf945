//! Error types for rulesync-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from rulesync-core
    #[error(transparent)]
    Core(#[from] rulesync_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_displays_message_verbatim() {
        let error = CliError::user("nothing to merge");
        assert_eq!(format!("{}", error), "nothing to merge");
    }

    #[test]
    fn core_error_displays_transparently() {
        let error = CliError::from(rulesync_core::Error::InvalidRepository {
            url: "stub://x".to_string(),
        });
        assert!(format!("{}", error).contains("stub://x"));
    }

    #[test]
    fn json_error_displays_transparently() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = CliError::from(source);
        assert!(format!("{}", error).contains("EOF"));
    }
}
