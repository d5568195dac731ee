// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("unknown {field}: '{value}'")]
    UnknownValue { field: &'static str, value: String },

    // ========================================================================
    // Compatibility Errors (409-level equivalent)
    // ========================================================================
    #[error("ORM '{orm}' cannot be used with MongoDB; MongoDB always uses its document mapper")]
    OrmWithDocumentStore { orm: String },

    #[error("ORM '{orm}' requires a relational database")]
    OrmWithoutDatabase { orm: String },

    // ========================================================================
    // Structure Errors (internal inconsistencies)
    // ========================================================================
    #[error("Project structure is empty")]
    EmptyStructure,

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Avoid path separators and shell characters such as / \\ : * ? \" < > | ; & $".into(),
                "Examples: my-backend, api_server, shop2".into(),
            ],
            Self::UnknownValue { field, .. } => vec![
                format!("Check the value given for {}", field),
                "Use --help to list the accepted values".into(),
            ],
            Self::OrmWithDocumentStore { .. } => vec![
                "MongoDB projects use mongoose models; drop the ORM option".into(),
                "Or pick mysql, postgresql or sqlite to use an ORM".into(),
            ],
            Self::OrmWithoutDatabase { .. } => vec![
                "Backstrap only generates ORM models alongside a database connection".into(),
                "Choose a relational database (mysql, postgresql, sqlite) for the ORM".into(),
                "Or use --orm none".into(),
            ],
            _ => vec![
                "This appears to be a bug in Backstrap".into(),
                "Please report it with the options you used".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::UnknownValue { .. } => {
                ErrorCategory::Validation
            }
            Self::OrmWithDocumentStore { .. } | Self::OrmWithoutDatabase { .. } => {
                ErrorCategory::Compatibility
            }
            Self::EmptyStructure
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orm_with_mongodb_is_compatibility_error() {
        let err = DomainError::OrmWithDocumentStore {
            orm: "sequelize".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Compatibility);
        assert!(err.suggestions().iter().any(|s| s.contains("mongoose")));
    }

    #[test]
    fn orm_without_database_explains_the_restriction() {
        let err = DomainError::OrmWithoutDatabase {
            orm: "typeorm".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Compatibility);
        let suggestions = err.suggestions();
        assert!(suggestions[0].contains("only generates ORM models alongside a database"));
        assert!(suggestions.iter().any(|s| s.contains("--orm none")));
    }

    #[test]
    fn structure_errors_are_internal() {
        assert_eq!(DomainError::EmptyStructure.category(), ErrorCategory::Internal);
        assert_eq!(
            DomainError::DuplicatePath { path: "a".into() }.category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn invalid_name_is_validation_error() {
        let err = DomainError::InvalidProjectName {
            name: "bad/name".into(),
            reason: "contains '/'".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("bad/name"));
    }
}
