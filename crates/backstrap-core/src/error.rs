//! Unified error handling for Backstrap Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Backstrap Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BackstrapError {
    /// Errors from the domain layer (invalid options, inconsistent structure).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, installer).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl BackstrapError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Compatibility => ErrorCategory::Compatibility,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Check if this error is retryable.
    ///
    /// Composition is pure, so anything that failed on the outside (a write,
    /// the package manager) can be retried as is.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(
                ApplicationError::FilesystemError { .. }
                    | ApplicationError::InstallFailed { .. }
                    | ApplicationError::InstallTimedOut { .. }
            )
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Configuration,
    /// A collaborator outside the process failed (package manager).
    External,
    Internal,
}

/// Convenient result type alias.
pub type BackstrapResult<T> = Result<T, BackstrapError>;
