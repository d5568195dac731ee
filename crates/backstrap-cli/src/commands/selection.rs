//! Turning flags and configuration defaults into `ProjectOptions`.

use std::path::Path;

use backstrap_core::domain::{
    Database, Framework, LanguageVariant, Orm, ProjectOptions,
};
use tracing::debug;

use crate::{
    cli::{DatabaseArg, FrameworkArg, Language, OrmArg, ProjectArgs},
    config::Defaults,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Every answer needed for a project except its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub variant: LanguageVariant,
    pub framework: Framework,
    pub use_mvc: bool,
    pub database: Database,
    pub orm: Orm,
    pub extras: bool,
}

impl Selection {
    /// Parse the `defaults` section of the configuration.
    pub fn from_defaults(defaults: &Defaults) -> CliResult<Self> {
        Ok(Self {
            variant: parse_default("defaults.language", &defaults.language)?,
            framework: parse_default("defaults.framework", &defaults.framework)?,
            use_mvc: defaults.mvc,
            database: parse_default("defaults.database", &defaults.database)?,
            orm: parse_default("defaults.orm", &defaults.orm)?,
            extras: defaults.extras,
        })
    }

    /// Apply command-line flags on top. A defaulted ORM is dropped when the
    /// chosen database cannot carry one; an explicit `--orm` is kept so the
    /// mismatch is reported.
    pub fn with_flags(mut self, args: &ProjectArgs) -> Self {
        if let Some(language) = args.language {
            self.variant = convert_language(language);
        }
        if let Some(framework) = args.framework {
            self.framework = convert_framework(framework);
        }
        if let Some(database) = args.database {
            self.database = convert_database(database);
        }
        match args.orm {
            Some(orm) => self.orm = convert_orm(orm),
            None if !self.database.is_relational() => self.orm = Orm::None,
            None => {}
        }
        if let Some(mvc) = args.mvc_flag() {
            self.use_mvc = mvc;
        }
        if let Some(extras) = args.extras_flag() {
            self.extras = extras;
        }
        self
    }

    /// Defaults, then flags.
    pub fn resolve(defaults: &Defaults, args: &ProjectArgs) -> CliResult<Self> {
        let selection = Self::from_defaults(defaults)?.with_flags(args);
        debug!(?selection, "Options resolved");
        Ok(selection)
    }

    /// Validate the name and the combination.
    pub fn into_options(self, name: &str) -> CliResult<ProjectOptions> {
        let options = ProjectOptions::builder()
            .name(name)
            .map_err(|e| CliError::Core(e.into()))?
            .variant(self.variant)
            .framework(self.framework)
            .mvc(self.use_mvc)
            .database(self.database)
            .orm(self.orm)
            .extras(self.extras)
            .build()
            .map_err(|e| CliError::Core(e.into()))?;
        Ok(options)
    }
}

/// Print the configuration block shown before writing and in `plan`.
pub fn show_options(options: &ProjectOptions, root: Option<&Path>, out: &OutputManager) -> CliResult<()> {
    const W: usize = 10;
    out.header("Configuration")?;
    out.field("Project", options.name().as_str(), W)?;
    out.field("Language", options.variant().as_str(), W)?;
    out.field("Framework", options.framework().label(), W)?;
    out.field(
        "Structure",
        if options.use_mvc() { "mvc" } else { "minimal" },
        W,
    )?;
    out.field("Database", options.database().label(), W)?;
    if options.orm() != Orm::None {
        out.field("ORM", options.orm().as_str(), W)?;
    }
    if options.framework() == Framework::Express {
        out.field("Extras", if options.install_extras() { "yes" } else { "no" }, W)?;
    }
    if let Some(root) = root {
        out.field("Location", &root.display().to_string(), W)?;
    }
    out.print("")?;
    Ok(())
}

fn parse_default<T>(key: &str, raw: &str) -> CliResult<T>
where
    T: std::str::FromStr<Err = backstrap_core::domain::DomainError>,
{
    raw.parse().map_err(|e: backstrap_core::domain::DomainError| CliError::ConfigError {
        message: format!("{key}: {e}"),
        source: Some(Box::new(e)),
    })
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_language(language: Language) -> LanguageVariant {
    match language {
        Language::JavaScript => LanguageVariant::Untyped,
        Language::TypeScript => LanguageVariant::Typed,
    }
}

fn convert_framework(framework: FrameworkArg) -> Framework {
    match framework {
        FrameworkArg::Express => Framework::Express,
        FrameworkArg::Hono => Framework::Hono,
    }
}

fn convert_database(database: DatabaseArg) -> Database {
    match database {
        DatabaseArg::MongoDb => Database::MongoDb,
        DatabaseArg::MySql => Database::MySql,
        DatabaseArg::PostgreSql => Database::PostgreSql,
        DatabaseArg::Sqlite => Database::Sqlite,
        DatabaseArg::None => Database::None,
    }
}

fn convert_orm(orm: OrmArg) -> Orm {
    match orm {
        OrmArg::None => Orm::None,
        OrmArg::Sequelize => Orm::Sequelize,
        OrmArg::TypeOrm => Orm::TypeOrm,
    }
}
