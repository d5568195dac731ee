//! File plan: the ordered `(path, role)` pairs a project is made of.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::domain::{
    entities::{
        common::RelativePath,
        options::{ModelMapping, Store},
    },
    value_objects::{Framework, LanguageVariant},
};

/// Which of the framework's entry modules a file is.
///
/// Each variant belongs to exactly one framework; obtain them through
/// [`EntryModule::of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryModule {
    /// Builds the Express app and binds the server.
    ExpressServer,
    /// Builds the Hono app without listening.
    HonoApp,
    /// Binds the Hono app to a port.
    HonoServer,
}

impl EntryModule {
    /// Entry modules of `framework`, in plan order.
    pub const fn of(framework: Framework) -> &'static [EntryModule] {
        match framework {
            Framework::Express => &[Self::ExpressServer],
            Framework::Hono => &[Self::HonoApp, Self::HonoServer],
        }
    }

    pub const fn source(&self) -> SourceModule {
        match self {
            Self::ExpressServer | Self::HonoServer => SourceModule::Index,
            Self::HonoApp => SourceModule::App,
        }
    }
}

/// Functional category of a planned file, together with what its renderer
/// needs to know beyond the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileRole {
    EntryPoint(EntryModule),
    Config,
    DbConnector(Store),
    Controller,
    Route,
    Model(ModelMapping),
    EnvFile,
    Manifest,
    CompilerConfig,
}

impl FileRole {
    pub const fn kind(&self) -> RoleKind {
        match self {
            Self::EntryPoint(_) => RoleKind::EntryPoint,
            Self::Config => RoleKind::Config,
            Self::DbConnector(_) => RoleKind::DbConnector,
            Self::Controller => RoleKind::Controller,
            Self::Route => RoleKind::Route,
            Self::Model(_) => RoleKind::Model,
            Self::EnvFile => RoleKind::EnvFile,
            Self::Manifest => RoleKind::Manifest,
            Self::CompilerConfig => RoleKind::CompilerConfig,
        }
    }
}

impl Serialize for FileRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.kind().serialize(serializer)
    }
}

/// Payload-free role, for reporting and set comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKind {
    EntryPoint,
    Config,
    DbConnector,
    Controller,
    Model,
    Route,
    Manifest,
    EnvFile,
    CompilerConfig,
}

impl RoleKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EntryPoint => "entry point",
            Self::Config => "config",
            Self::DbConnector => "db connector",
            Self::Controller => "controller",
            Self::Model => "model",
            Self::Route => "route",
            Self::Manifest => "manifest",
            Self::EnvFile => "env file",
            Self::CompilerConfig => "compiler config",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Source modules ───────────────────────────────────────────────────────────

/// Every source module a generated project can contain.
///
/// The planner derives file paths from this table and templates derive
/// import specifiers from it, so the two always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceModule {
    Index,
    App,
    Config,
    Db,
    Controller,
    Route,
    Model,
}

impl SourceModule {
    /// Path from the project root without extension.
    pub const fn stem(&self) -> &'static str {
        match self {
            Self::Index => "src/index",
            Self::App => "src/app",
            Self::Config => "src/config/config",
            Self::Db => "src/config/db",
            Self::Controller => "src/controllers/example.controller",
            Self::Route => "src/routes/example.routes",
            Self::Model => "src/models/example.model",
        }
    }

    pub fn path(&self, variant: LanguageVariant) -> RelativePath {
        RelativePath::new(format!("{}.{}", self.stem(), variant.extension()))
    }
}

// ── Plan ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePlanEntry {
    pub path: RelativePath,
    pub role: FileRole,
}

impl FilePlanEntry {
    pub fn new(path: impl Into<RelativePath>, role: FileRole) -> Self {
        Self {
            path: path.into(),
            role,
        }
    }
}

/// Ordered list of files to generate. Order is the write order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilePlan {
    entries: Vec<FilePlanEntry>,
}

impl FilePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<RelativePath>, role: FileRole) {
        self.entries.push(FilePlanEntry::new(path, role));
    }

    pub fn entries(&self) -> &[FilePlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn kinds(&self) -> Vec<RoleKind> {
        self.entries.iter().map(|e| e.role.kind()).collect()
    }

    pub fn find(&self, kind: RoleKind) -> Option<&FilePlanEntry> {
        self.entries.iter().find(|e| e.role.kind() == kind)
    }

    pub fn contains(&self, kind: RoleKind) -> bool {
        self.find(kind).is_some()
    }
}

impl<'a> IntoIterator for &'a FilePlan {
    type Item = &'a FilePlanEntry;
    type IntoIter = std::slice::Iter<'a, FilePlanEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
