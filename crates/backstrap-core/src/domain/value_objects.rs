//! Domain value objects: LanguageVariant, Framework, Database, Orm.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO generation logic. Per-database knowledge lives in
//! `databases.rs`; file layout lives in `layout.rs`. This file's only job is
//! to define the types, their string representations, and their `FromStr`
//! parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Follow the compiler: every exhaustive `match` in the planner, the
//!    template library and the resolver will point at what is missing

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── LanguageVariant ──────────────────────────────────────────────────────────

/// Whether the generated project is TypeScript (`Typed`) or plain
/// JavaScript (`Untyped`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageVariant {
    Typed,
    Untyped,
}

impl LanguageVariant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Typed => "typescript",
            Self::Untyped => "javascript",
        }
    }

    /// Source file extension, without the leading dot.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Typed => "ts",
            Self::Untyped => "js",
        }
    }

    pub const fn is_typed(&self) -> bool {
        matches!(self, Self::Typed)
    }
}

impl fmt::Display for LanguageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "typescript" | "ts" | "typed" => Ok(Self::Typed),
            "javascript" | "js" | "untyped" => Ok(Self::Untyped),
            other => Err(DomainError::UnknownValue {
                field: "language",
                value: other.to_string(),
            }),
        }
    }
}

// ── Framework ─────────────────────────────────────────────────────────────────

/// The HTTP framework the generated server is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// Express: one module builds the app and binds the server.
    Express,
    /// Hono: app construction (`app`) is separate from server binding (`index`).
    Hono,
}

impl Framework {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Express => "express",
            Self::Hono => "hono",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Express => "Express",
            Self::Hono => "Hono",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "express" | "expressjs" => Ok(Self::Express),
            "hono" => Ok(Self::Hono),
            other => Err(DomainError::UnknownValue {
                field: "framework",
                value: other.to_string(),
            }),
        }
    }
}

// ── Database ──────────────────────────────────────────────────────────────────

/// The database the generated project connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    MongoDb,
    MySql,
    PostgreSql,
    Sqlite,
    None,
}

impl Database {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MongoDb => "mongodb",
            Self::MySql => "mysql",
            Self::PostgreSql => "postgresql",
            Self::Sqlite => "sqlite",
            Self::None => "none",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::MongoDb => "MongoDB",
            Self::MySql => "MySQL",
            Self::PostgreSql => "PostgreSQL",
            Self::Sqlite => "SQLite",
            Self::None => "none",
        }
    }

    /// Relational databases are the only ones an ORM can be layered on.
    pub const fn is_relational(&self) -> bool {
        matches!(self, Self::MySql | Self::PostgreSql | Self::Sqlite)
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Database {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            "mysql" => Ok(Self::MySql),
            "postgresql" | "postgres" | "pg" => Ok(Self::PostgreSql),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "none" | "" => Ok(Self::None),
            other => Err(DomainError::UnknownValue {
                field: "database",
                value: other.to_string(),
            }),
        }
    }
}

// ── Orm ───────────────────────────────────────────────────────────────────────

/// Object-relational mapper layered over a relational database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orm {
    None,
    Sequelize,
    TypeOrm,
}

impl Orm {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sequelize => "sequelize",
            Self::TypeOrm => "typeorm",
        }
    }
}

impl fmt::Display for Orm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "sequelize" => Ok(Self::Sequelize),
            "typeorm" => Ok(Self::TypeOrm),
            other => Err(DomainError::UnknownValue {
                field: "orm",
                value: other.to_string(),
            }),
        }
    }
}
