//! Custom error types for the launcher
//!
//! This module provides a unified error type used throughout the
//! application. Every failure is terminal for the current invocation;
//! the CLI layer maps errors to an Alfred error item (`list`) or a
//! stderr line plus nonzero exit (`open`).

use thiserror::Error;

/// Main error type for launcher operations
#[derive(Error, Debug)]
pub enum LauncherError {
    /// The Cursor installation (app bundle, binary, or state store) is
    /// missing on disk
    #[error("{0}")]
    EnvironmentMissing(String),

    /// A local project path no longer exists
    #[error("specified path does not exist: {0}")]
    PathNotFound(String),

    /// The history key is absent from the state store
    #[error("no recently opened projects found")]
    NotFound,

    /// State-store access or query errors
    #[error("database query error: {0}")]
    Query(#[from] rusqlite::Error),

    /// The stored history blob is not valid JSON
    #[error("failed to parse JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// IO-related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Both launch tiers exhausted, or the bootstrap launch itself failed
    #[error("{0}")]
    LaunchFailed(String),
}

impl LauncherError {
    /// Create an environment error
    pub fn environment(msg: impl Into<String>) -> Self {
        Self::EnvironmentMissing(msg.into())
    }

    /// Create a launch error
    pub fn launch(msg: impl Into<String>) -> Self {
        Self::LaunchFailed(msg.into())
    }
}

/// Result type alias using LauncherError
pub type Result<T> = std::result::Result<T, LauncherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            LauncherError::NotFound.to_string(),
            "no recently opened projects found"
        );
    }

    #[test]
    fn test_path_not_found_message() {
        let err = LauncherError::PathNotFound("/tmp/gone".to_string());
        assert_eq!(err.to_string(), "specified path does not exist: /tmp/gone");
    }

    #[test]
    fn test_decode_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LauncherError::from(parse_err);
        assert!(matches!(err, LauncherError::Decode(_)));
        assert!(err.to_string().starts_with("failed to parse JSON:"));
    }
}
