//! The `ProjectOptions` record and its typestate builder.
//!
//! `ProjectOptions` is the validated set of choices driving generation. Once
//! one exists, every cross-field rule already holds: in particular the
//! (database, orm) pair is stored as a [`Persistence`] value in which an ORM
//! on top of MongoDB cannot be represented.
//!
//! # Typestate builder
//!
//! The project name is the only field without a sensible default, so the
//! builder starts in the `NoName` state and only exposes `build()` once a
//! name has been parsed.
//!
//! # Domain purity
//!
//! No `tracing` here; observability belongs to the application layer.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    databases::{self, ConfigField, DatabaseDescriptor},
    entities::common::ProjectName,
    error::DomainError,
    value_objects::{Database, Framework, LanguageVariant, Orm},
};

// ── Persistence ───────────────────────────────────────────────────────────────

/// Relational engines an ORM can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlEngine {
    MySql,
    PostgreSql,
    Sqlite,
}

impl SqlEngine {
    pub const fn database(&self) -> Database {
        match self {
            Self::MySql => Database::MySql,
            Self::PostgreSql => Database::PostgreSql,
            Self::Sqlite => Database::Sqlite,
        }
    }

    pub fn descriptor(&self) -> &'static DatabaseDescriptor {
        match self {
            Self::MySql => &databases::MYSQL,
            Self::PostgreSql => &databases::POSTGRESQL,
            Self::Sqlite => &databases::SQLITE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlOrm {
    Sequelize,
    TypeOrm,
}

/// The validated (database, orm) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persistence {
    None,
    /// MongoDB through mongoose.
    Document,
    Relational {
        engine: SqlEngine,
        orm: Option<SqlOrm>,
    },
}

impl Persistence {
    /// Combine the raw user choices, rejecting pairs that make no sense.
    pub fn from_choices(database: Database, orm: Orm) -> Result<Self, DomainError> {
        let sql_orm = match orm {
            Orm::None => None,
            Orm::Sequelize => Some(SqlOrm::Sequelize),
            Orm::TypeOrm => Some(SqlOrm::TypeOrm),
        };

        let engine = match database {
            Database::MongoDb if sql_orm.is_some() => {
                return Err(DomainError::OrmWithDocumentStore {
                    orm: orm.to_string(),
                });
            }
            Database::MongoDb => return Ok(Self::Document),
            Database::None if sql_orm.is_some() => {
                return Err(DomainError::OrmWithoutDatabase {
                    orm: orm.to_string(),
                });
            }
            Database::None => return Ok(Self::None),
            Database::MySql => SqlEngine::MySql,
            Database::PostgreSql => SqlEngine::PostgreSql,
            Database::Sqlite => SqlEngine::Sqlite,
        };

        Ok(Self::Relational {
            engine,
            orm: sql_orm,
        })
    }

    pub const fn database(&self) -> Database {
        match self {
            Self::None => Database::None,
            Self::Document => Database::MongoDb,
            Self::Relational { engine, .. } => engine.database(),
        }
    }

    pub const fn orm(&self) -> Orm {
        match self {
            Self::Relational {
                orm: Some(SqlOrm::Sequelize),
                ..
            } => Orm::Sequelize,
            Self::Relational {
                orm: Some(SqlOrm::TypeOrm),
                ..
            } => Orm::TypeOrm,
            _ => Orm::None,
        }
    }

    /// What the database connector module talks to, if there is one.
    pub const fn store(&self) -> Option<Store> {
        match *self {
            Self::None => None,
            Self::Document => Some(Store::Mongoose),
            Self::Relational { engine, orm: None } => Some(Store::Native(engine)),
            Self::Relational {
                engine,
                orm: Some(SqlOrm::Sequelize),
            } => Some(Store::Sequelize(engine)),
            Self::Relational {
                engine,
                orm: Some(SqlOrm::TypeOrm),
            } => Some(Store::TypeOrm(engine)),
        }
    }

    /// How the example model is mapped, if a model is generated at all.
    pub const fn model_mapping(&self) -> Option<ModelMapping> {
        match self {
            Self::Document => Some(ModelMapping::Mongoose),
            Self::Relational {
                orm: Some(SqlOrm::Sequelize),
                ..
            } => Some(ModelMapping::Sequelize),
            Self::Relational {
                orm: Some(SqlOrm::TypeOrm),
                ..
            } => Some(ModelMapping::TypeOrm),
            _ => None,
        }
    }
}

/// The persistence mapping a connector talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Store {
    Mongoose,
    /// Raw driver, no mapping layer.
    Native(SqlEngine),
    Sequelize(SqlEngine),
    TypeOrm(SqlEngine),
}

impl Store {
    pub fn descriptor(&self) -> &'static DatabaseDescriptor {
        match self {
            Self::Mongoose => &databases::MONGODB,
            Self::Native(engine) | Self::Sequelize(engine) | Self::TypeOrm(engine) => {
                engine.descriptor()
            }
        }
    }

    /// The config fields this store's connector reads.
    pub fn fields(&self) -> &'static [ConfigField] {
        self.descriptor().fields_for(*self)
    }

    /// ORM stores connect through one URL; raw drivers take discrete fields.
    pub const fn uses_url(&self) -> bool {
        matches!(self, Self::Sequelize(_) | Self::TypeOrm(_))
    }
}

/// How the generated example model is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelMapping {
    Mongoose,
    Sequelize,
    TypeOrm,
}

// ── Aggregate root ────────────────────────────────────────────────────────────

/// Validated generation options.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectOptions {
    name: ProjectName,
    variant: LanguageVariant,
    framework: Framework,
    use_mvc: bool,
    persistence: Persistence,
    install_extras: bool,
}

impl ProjectOptions {
    pub fn builder() -> OptionsBuilder<NoName> {
        OptionsBuilder::new()
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }
    pub const fn variant(&self) -> LanguageVariant {
        self.variant
    }
    pub const fn framework(&self) -> Framework {
        self.framework
    }
    pub const fn use_mvc(&self) -> bool {
        self.use_mvc
    }
    pub const fn persistence(&self) -> Persistence {
        self.persistence
    }
    pub const fn database(&self) -> Database {
        self.persistence.database()
    }
    pub const fn orm(&self) -> Orm {
        self.persistence.orm()
    }
    pub const fn store(&self) -> Option<Store> {
        self.persistence.store()
    }
    pub const fn model_mapping(&self) -> Option<ModelMapping> {
        self.persistence.model_mapping()
    }

    /// Ecosystem extras only exist for Express; the flag is ignored for Hono.
    pub const fn install_extras(&self) -> bool {
        self.install_extras && matches!(self.framework, Framework::Express)
    }
}

impl fmt::Display for ProjectOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} + {}", self.name, self.variant, self.framework)?;
        if self.database() != Database::None {
            write!(f, ", {}", self.database())?;
        }
        if self.orm() != Orm::None {
            write!(f, " via {}", self.orm())?;
        }
        if self.use_mvc {
            f.write_str(", mvc")?;
        }
        f.write_str(")")
    }
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: no project name yet.
pub struct NoName;

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`ProjectOptions`].
///
/// `N` is either [`NoName`] or [`ProjectName`]; `build()` only exists for the
/// latter.
pub struct OptionsBuilder<N> {
    name: N,
    variant: LanguageVariant,
    framework: Framework,
    use_mvc: bool,
    database: Database,
    orm: Orm,
    install_extras: bool,
}

impl OptionsBuilder<NoName> {
    pub fn new() -> Self {
        Self {
            name: NoName,
            variant: LanguageVariant::Untyped,
            framework: Framework::Express,
            use_mvc: true,
            database: Database::None,
            orm: Orm::None,
            install_extras: false,
        }
    }

    /// Parse and set the project name.
    pub fn name(self, raw: impl Into<String>) -> Result<OptionsBuilder<ProjectName>, DomainError> {
        let name = ProjectName::parse(raw)?;
        Ok(OptionsBuilder {
            name,
            variant: self.variant,
            framework: self.framework,
            use_mvc: self.use_mvc,
            database: self.database,
            orm: self.orm,
            install_extras: self.install_extras,
        })
    }
}

impl Default for OptionsBuilder<NoName> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> OptionsBuilder<N> {
    pub fn variant(mut self, variant: LanguageVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn framework(mut self, framework: Framework) -> Self {
        self.framework = framework;
        self
    }

    pub fn mvc(mut self, use_mvc: bool) -> Self {
        self.use_mvc = use_mvc;
        self
    }

    pub fn database(mut self, database: Database) -> Self {
        self.database = database;
        self
    }

    pub fn orm(mut self, orm: Orm) -> Self {
        self.orm = orm;
        self
    }

    pub fn extras(mut self, install_extras: bool) -> Self {
        self.install_extras = install_extras;
        self
    }
}

impl OptionsBuilder<ProjectName> {
    /// Validate cross-field rules and produce the options record.
    pub fn build(self) -> Result<ProjectOptions, DomainError> {
        let persistence = Persistence::from_choices(self.database, self.orm)?;
        Ok(ProjectOptions {
            name: self.name,
            variant: self.variant,
            framework: self.framework,
            use_mvc: self.use_mvc,
            persistence,
            install_extras: self.install_extras,
        })
    }
}
