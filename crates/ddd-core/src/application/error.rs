//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Naming and plan errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Template file is not present in the active store.
    #[error("Template not found: {template}")]
    TemplateNotFound { template: String },

    /// Template rendering failed.
    #[error("Template rendering failed for {template}: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A destination guarded by the command already exists.
    #[error("{path} already exists")]
    TargetExists { path: PathBuf },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { template } => vec![
                format!("No template file named {}", template),
                "Try: ddd list-templates to see available templates".into(),
                "Or point --templates at a directory that contains it".into(),
            ],
            Self::RenderingFailed { reason, .. } => vec![
                format!("Renderer said: {}", reason),
                "Blocks use [% %] and variables use [[ ]]".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::TargetExists { path } => vec![
                format!("Nothing was written because {} exists", path.display()),
                "Remove it or pick a different name".into(),
                "Use --simulate to preview the generated code".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::TargetExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::RenderingFailed { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
