//! Error types for the chatdocs CLI.
//!
//! This module defines a unified error enum covering every failure class in
//! the application. Service-call faults are typed at the boundary so the
//! caller's decision to treat them as fatal is explicit, and each class maps
//! to its own process exit code.

use thiserror::Error;

/// Unified error type for the chatdocs CLI.
///
/// All fallible functions in the application return `Result<T, AppError>`.
/// We never panic — errors must be represented and propagated.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (interactive input/output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The vector store could not be reached
    #[error("Vector store unavailable: {0}")]
    StoreUnavailable(String),

    /// The requested collection does not exist in the store
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// The store answered but the response was unusable
    #[error("Vector store error: {0}")]
    Store(String),

    /// Chat-completion endpoint errors
    #[error("Completion request failed: {0}")]
    Completion(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl AppError {
    /// Process exit code for this failure class.
    ///
    /// Normal termination (including the missing-credential early return)
    /// exits 0; each fault class gets its own non-zero code so scripts can
    /// distinguish a dead store from a bad completion call.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Io(_) => 1,
            AppError::Config(_) => 2,
            AppError::StoreUnavailable(_) => 3,
            AppError::CollectionNotFound(_) => 4,
            AppError::Store(_) => 5,
            AppError::Completion(_) => 6,
            AppError::Serialization(_) => 7,
        }
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_exit_codes_are_nonzero_and_distinct() {
        let errors = [
            AppError::Io(std::io::Error::other("io")),
            AppError::Config("config".to_string()),
            AppError::StoreUnavailable("down".to_string()),
            AppError::CollectionNotFound("missing".to_string()),
            AppError::Store("bad response".to_string()),
            AppError::Completion("api".to_string()),
            AppError::Serialization("json".to_string()),
        ];

        let codes: HashSet<u8> = errors.iter().map(|e| e.exit_code()).collect();
        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains(&0));
    }

    #[test]
    fn test_display_messages() {
        let err = AppError::CollectionNotFound("documents_collection".to_string());
        assert_eq!(
            err.to_string(),
            "Collection not found: documents_collection"
        );

        let err = AppError::Completion("401 Unauthorized".to_string());
        assert!(err.to_string().contains("401 Unauthorized"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
