// ============================================================================
// domain/error.rs - NAME AND PLAN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep a copy)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid {kind} name '{name}': {reason}")]
    InvalidName {
        kind: &'static str,
        name: String,
        reason: String,
    },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Duplicate destination in plan: {path}")]
    DuplicateDestination { path: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Plan for '{command}' has no write steps")]
    EmptyPlan { command: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { kind, .. } => vec![
                format!("Use a Python identifier as the {} name", kind),
                "Letters, digits and underscores only, not starting with a digit".into(),
                "Example: ddd create-entity apps/shop Product".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("Path '{}' is absolute", path),
                "Pass the app path relative to the project root".into(),
                "Use --root to point at a different project".into(),
            ],
            _ => vec!["This is likely a bug in the command definitions".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Validation
            }
            Self::DuplicateDestination { .. } | Self::EmptyPlan { .. } => ErrorCategory::Internal,
        }
    }
}
