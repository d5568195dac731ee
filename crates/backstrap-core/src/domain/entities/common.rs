use super::DomainError;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem path guaranteed to be relative.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if path is absolute (use `try_new` for fallible).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            !path.is_absolute(),
            "RelativePath cannot be absolute: {:?}",
            path
        );
        Self(path)
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.to_str().unwrap_or("")
    }

    /// Every proper ancestor, shallowest first (`src`, `src/config` for
    /// `src/config/db.ts`).
    pub fn ancestors(&self) -> Vec<RelativePath> {
        let mut dirs: Vec<RelativePath> = self
            .0
            .ancestors()
            .skip(1)
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| Self(p.to_path_buf()))
            .collect();
        dirs.reverse();
        dirs
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

// ── ProjectName ──────────────────────────────────────────────────────────────

/// npm refuses package names longer than this.
pub const MAX_PROJECT_NAME_LEN: usize = 214;

const PATH_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];
const SHELL_CHARS: &[char] = &[
    ';', '&', '$', '`', '\'', '!', '(', ')', '{', '}', '[', ']', '#', '~',
];

/// A validated project name. Doubles as the project directory name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let name = raw.into();
        let invalid = |reason: String| DomainError::InvalidProjectName {
            name: name.clone(),
            reason,
        };

        if name.trim().is_empty() {
            return Err(invalid("name cannot be empty".into()));
        }
        if name == "." || name == ".." {
            return Err(invalid("name cannot be a relative directory".into()));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'".into()));
        }
        if name.starts_with('-') {
            return Err(invalid("name cannot start with '-'".into()));
        }
        if name.len() > MAX_PROJECT_NAME_LEN {
            return Err(invalid(format!(
                "name is longer than {} bytes",
                MAX_PROJECT_NAME_LEN
            )));
        }
        if let Some(c) = name
            .chars()
            .find(|c| PATH_CHARS.contains(c) || SHELL_CHARS.contains(c))
        {
            return Err(invalid(format!("contains '{}'", c)));
        }
        if name.chars().any(char::is_control) {
            return Err(invalid("contains control characters".into()));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `name` field of `package.json`: lower-cased, whitespace runs
    /// collapsed into a single `-`.
    pub fn package_name(&self) -> String {
        self.0
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
