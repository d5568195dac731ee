//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// The package manager exited unsuccessfully or could not be started.
    #[error("`{command}` failed: {reason}")]
    InstallFailed { command: String, reason: String },

    /// The package manager did not finish in time and was killed.
    #[error("`{command}` timed out after {after_secs}s")]
    InstallTimedOut { command: String, after_secs: u64 },

    /// Shared adapter state was poisoned by a panicking thread.
    #[error("Internal lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or pass a different output directory with --output".into(),
            ],
            Self::InstallFailed { .. } => vec![
                "Check that node and npm are installed and on PATH".into(),
                "The project files were written; run `npm install` inside the project".into(),
                "Or rerun with --skip-install".into(),
            ],
            Self::InstallTimedOut { .. } => vec![
                "The project files were written; run `npm install` inside the project".into(),
                "Raise install.timeout_secs in the config file".into(),
            ],
            Self::LockPoisoned => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::InstallFailed { .. } | Self::InstallTimedOut { .. } => ErrorCategory::External,
        }
    }
}
