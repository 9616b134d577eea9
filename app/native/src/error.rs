//! Error types for gitinbit.
//!
//! Each concern has its own error enum next to its code; this module gathers
//! them into the single error the CLI reports.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::content::ContentError;
use crate::state::StoreError;

/// Errors that end a CLI invocation.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum GitinbitError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Content could not be loaded.
    #[error("Content error: {0}")]
    ContentError(String),
    /// The store rejected an action.
    #[error("Store error: {0}")]
    StoreError(String),
    /// No post or page has the requested slug.
    #[error("No post or page with slug {0:?}")]
    NotFound(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<ConfigError> for GitinbitError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<ContentError> for GitinbitError {
    fn from(err: ContentError) -> Self { Self::ContentError(err.to_string()) }
}

impl From<StoreError> for GitinbitError {
    fn from(err: StoreError) -> Self { Self::StoreError(err.to_string()) }
}

impl From<std::io::Error> for GitinbitError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for GitinbitError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<String> for GitinbitError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arguments_display() {
        let err = GitinbitError::InvalidArguments("expected a number".to_string());
        assert_eq!(err.to_string(), "expected a number");
    }

    #[test]
    fn test_store_error_conversion() {
        let err: GitinbitError = StoreError::InvalidFontScale(2.0).into();
        let msg = err.to_string();
        assert!(msg.starts_with("Store error"));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: GitinbitError = ConfigError::NotFound.into();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GitinbitError = io_err.into();
        assert!(err.to_string().contains("IO error"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_not_found_display() {
        let err = GitinbitError::NotFound("/missing/".to_string());
        assert_eq!(err.to_string(), "No post or page with slug \"/missing/\"");
    }

    #[test]
    fn test_error_serializes_kind() {
        let json = serde_json::to_value(GitinbitError::ContentError("bad".to_string())).unwrap();
        assert_eq!(json["kind"], "ContentError");
        assert_eq!(json["message"], "bad");
    }
}
