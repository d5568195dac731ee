//! CLI error handling.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use backstrap_core::error::BackstrapError;

pub use backstrap_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

type BoxedSource = Box<dyn Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A value in the configuration could not be used.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// `config get` with a key that does not exist.
    #[error("Unknown configuration key '{key}'")]
    UnknownConfigKey { key: String },

    /// The configuration file `init` would write is already there.
    #[error("Configuration already exists at {path}")]
    ConfigExists { path: PathBuf },

    /// An error propagated from `backstrap-core` or an adapter.
    #[error(transparent)]
    Core(#[from] BackstrapError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The user declined the confirmation prompt.
    #[error("Operation cancelled")]
    Cancelled,

    /// Feature not compiled in (interactive mode without the feature flag).
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => vec![
                format!(
                    "Check your config file: {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Check BACKSTRAP__* environment variables".into(),
                "Run 'backstrap config list' to see the merged configuration".into(),
            ],

            Self::UnknownConfigKey { .. } => vec![
                "Keys are dotted paths such as defaults.language or install.enabled".into(),
                "Run 'backstrap config list' to see every key".into(),
            ],

            Self::ConfigExists { .. } => vec![
                "Use --force to overwrite it".into(),
                "Use --config FILE to write somewhere else".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],

            Self::Cancelled => vec!["No changes were made".into()],

            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{feature}' feature is not available in this build"),
                format!("Install with the feature enabled: cargo install backstrap-cli --features {feature}"),
                "Pass the options as flags instead, see 'backstrap new --help'".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::UnknownConfigKey { .. } => ErrorCategory::NotFound,
            Self::ConfigExists { .. } => ErrorCategory::UserError,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Compatibility => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::External | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
            Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "\u{2717}".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "\u{2192}".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(),
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`].
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert `io::Error` results into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backstrap_core::{application::ApplicationError, domain::DomainError};
    use std::io;

    fn core(err: impl Into<BackstrapError>) -> CliError {
        CliError::Core(err.into())
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn invalid_name_is_user_error() {
        let err = core(DomainError::InvalidProjectName {
            name: "a/b".into(),
            reason: "contains '/'".into(),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn orm_on_document_store_is_user_error() {
        let err = core(DomainError::OrmWithDocumentStore {
            orm: "typeorm".into(),
        });
        assert_eq!(err.exit_code(), 2);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn existing_project_is_user_error() {
        let err = core(ApplicationError::ProjectExists {
            path: PathBuf::from("/tmp/x"),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn install_failure_is_internal() {
        let err = core(ApplicationError::InstallFailed {
            command: "npm install express".into(),
            reason: "exit status: 1".into(),
        });
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn unknown_key_is_not_found() {
        assert_eq!(CliError::UnknownConfigKey { key: "x".into() }.exit_code(), 3);
    }

    #[test]
    fn config_error_is_configuration() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn io_error_is_internal() {
        let err: CliError = io::Error::other("e").into();
        assert_eq!(err.exit_code(), 1);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header_and_suggestions() {
        let err = CliError::ConfigExists {
            path: PathBuf::from("/tmp/x.toml"),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error: Configuration already exists at /tmp/x.toml"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--force"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_and_omits_hint() {
        let err = CliError::ConfigError {
            message: "bad".into(),
            source: Some(Box::new(io::Error::other("root cause"))),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: root cause"));
        assert!(!s.contains("--verbose"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        match cli {
            Err(CliError::IoError { message, .. }) => assert_eq!(message, "reading config"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
