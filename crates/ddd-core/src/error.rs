//! Unified error handling for ddd-core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for ddd-core operations.
///
/// This enum wraps all possible errors that can occur while planning or
/// executing a scaffold, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum ScaffoldError {
    /// Errors from the domain layer (invalid names, invalid plans).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (template, filesystem, guard failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ScaffoldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in ddd".into(),
                "Re-run with -vvv and include the log when reporting it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether this error came from a destination guard.
    pub fn is_target_exists(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::TargetExists { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn domain_errors_keep_their_category() {
        let err: ScaffoldError = DomainError::InvalidName {
            kind: "entity",
            name: "".into(),
            reason: "must not be empty".into(),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn target_exists_is_detected() {
        let err: ScaffoldError = ApplicationError::TargetExists {
            path: PathBuf::from("app/domain/entities/product_entity.py"),
        }
        .into();

        assert!(err.is_target_exists());
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
