//! Interactive option selection.
//!
//! Asks, in order: language, framework, MVC layout, database, ORM (only for
//! relational databases) and the Express extras (only for Express). Each
//! question starts on the value already chosen by flags or configuration.

use dialoguer::{Confirm, Select, theme::ColorfulTheme};
use tracing::debug;

use backstrap_core::domain::{Database, Framework, LanguageVariant, Orm};

use crate::{
    commands::Selection,
    error::{CliError, CliResult},
};

const LANGUAGES: [LanguageVariant; 2] = [LanguageVariant::Untyped, LanguageVariant::Typed];
const FRAMEWORKS: [Framework; 2] = [Framework::Express, Framework::Hono];
const DATABASES: [Database; 5] = [
    Database::None,
    Database::MongoDb,
    Database::MySql,
    Database::PostgreSql,
    Database::Sqlite,
];
const ORMS: [Orm; 3] = [Orm::None, Orm::Sequelize, Orm::TypeOrm];

/// Ask every question, starting from `initial`.
pub fn ask(initial: Selection) -> CliResult<Selection> {
    let theme = ColorfulTheme::default();
    let mut answers = initial;

    answers.variant = choose(&theme, "Language", &LANGUAGES, initial.variant, |v| {
        match v {
            LanguageVariant::Untyped => "JavaScript",
            LanguageVariant::Typed => "TypeScript",
        }
    })?;

    answers.framework = choose(&theme, "Framework", &FRAMEWORKS, initial.framework, |f| f.label())?;

    answers.use_mvc = confirm(
        &theme,
        "Use the MVC layout (controllers, routes, models)?",
        initial.use_mvc,
    )?;

    answers.database = choose(&theme, "Database", &DATABASES, initial.database, |d| match d {
        Database::None => "None",
        other => other.label(),
    })?;

    answers.orm = if answers.database.is_relational() {
        choose(&theme, "ORM", &ORMS, initial.orm, |o| match o {
            Orm::None => "None (raw driver)",
            Orm::Sequelize => "Sequelize",
            Orm::TypeOrm => "TypeORM",
        })?
    } else {
        Orm::None
    };

    answers.extras = if answers.framework == Framework::Express {
        confirm(
            &theme,
            "Add Express extras (rate limit, sessions, JWT, validator)?",
            initial.extras,
        )?
    } else {
        false
    };

    debug!(?answers, "Interactive selection complete");
    Ok(answers)
}

fn choose<T: Copy + PartialEq>(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[T],
    current: T,
    label: impl Fn(&T) -> &'static str,
) -> CliResult<T> {
    let labels: Vec<&str> = items.iter().map(&label).collect();
    let default = items.iter().position(|i| *i == current).unwrap_or(0);

    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()
        .map_err(prompt_error)?;

    Ok(items[index])
}

fn confirm(theme: &ColorfulTheme, prompt: &str, default: bool) -> CliResult<bool> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(prompt_error)
}

fn prompt_error(err: dialoguer::Error) -> CliError {
    match err {
        dialoguer::Error::IO(source) if source.kind() == std::io::ErrorKind::Interrupted => {
            CliError::Cancelled
        }
        dialoguer::Error::IO(source) => CliError::IoError {
            message: "interactive prompt failed".into(),
            source,
        },
    }
}
