//! Per-database descriptor registry.
//!
//! This is the single source of truth for everything the generated project
//! needs to know about a database: driver package, environment variable
//! names, config property names and their defaults. The config template, the
//! `.env` template and the connector template all read the same
//! [`ConfigField`] lists from here.
//!
//! # Adding a database
//!
//! 1. Add the `Database` variant in `value_objects.rs`
//! 2. Add a `DatabaseDescriptor` static and list it in `DATABASE_REGISTRY`
//! 3. Map it in `descriptor()` and `SqlEngine::descriptor()`

use crate::domain::{entities::options::Store, value_objects::Database};

/// How a config value is read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `process.env.X || 'default'`
    Text,
    /// `Number(process.env.X) || default`
    Number,
}

/// One connection setting shared by config, `.env` and connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigField {
    /// Property name on the exported `config` object.
    pub key: &'static str,
    /// Environment variable the property is read from.
    pub env: &'static str,
    /// Value written to `.env` and used as the fallback.
    pub default: &'static str,
    pub kind: FieldKind,
    /// Option name the raw driver expects (`host`, `user`, ...).
    pub option: &'static str,
}

/// Static knowledge about one database.
#[derive(Debug)]
pub struct DatabaseDescriptor {
    pub database: Database,
    /// Human-readable name used in log lines of generated code.
    pub label: &'static str,
    /// npm package of the raw driver.
    pub driver_package: &'static str,
    /// Fields consumed by the raw driver.
    pub driver_fields: &'static [ConfigField],
    /// Single connection value consumed by mapping layers (mongoose, ORMs).
    pub connection_field: ConfigField,
}

impl DatabaseDescriptor {
    /// The fields a given store reads from `config`.
    pub fn fields_for(&'static self, store: Store) -> &'static [ConfigField] {
        match store {
            Store::Native(_) => self.driver_fields,
            Store::Mongoose | Store::Sequelize(_) | Store::TypeOrm(_) => {
                std::slice::from_ref(&self.connection_field)
            }
        }
    }
}

const fn text(key: &'static str, env: &'static str, default: &'static str, option: &'static str) -> ConfigField {
    ConfigField {
        key,
        env,
        default,
        kind: FieldKind::Text,
        option,
    }
}

const MONGODB_URI: ConfigField = text(
    "mongodbUri",
    "MONGODB_URI",
    "mongodb://localhost:27017/mydatabase",
    "uri",
);

const SQLITE_PATH: ConfigField = text("sqlitePath", "SQLITE_PATH", "./database.sqlite", "filename");

pub static MONGODB: DatabaseDescriptor = DatabaseDescriptor {
    database: Database::MongoDb,
    label: "MongoDB",
    driver_package: "mongoose",
    driver_fields: &[MONGODB_URI],
    connection_field: MONGODB_URI,
};

pub static MYSQL: DatabaseDescriptor = DatabaseDescriptor {
    database: Database::MySql,
    label: "MySQL",
    driver_package: "mysql2",
    driver_fields: &[
        text("mysqlHost", "MYSQL_HOST", "localhost", "host"),
        text("mysqlUser", "MYSQL_USER", "root", "user"),
        text("mysqlPassword", "MYSQL_PASSWORD", "", "password"),
        text("mysqlDatabase", "MYSQL_DATABASE", "mydatabase", "database"),
    ],
    connection_field: text(
        "mysqlUri",
        "MYSQL_URI",
        "mysql://root:@localhost:3306/mydatabase",
        "url",
    ),
};

pub static POSTGRESQL: DatabaseDescriptor = DatabaseDescriptor {
    database: Database::PostgreSql,
    label: "PostgreSQL",
    driver_package: "pg",
    driver_fields: &[
        text("pgUser", "PGUSER", "postgres", "user"),
        text("pgHost", "PGHOST", "localhost", "host"),
        text("pgDatabase", "PGDATABASE", "mydatabase", "database"),
        text("pgPassword", "PGPASSWORD", "", "password"),
        ConfigField {
            key: "pgPort",
            env: "PGPORT",
            default: "5432",
            kind: FieldKind::Number,
            option: "port",
        },
    ],
    connection_field: text(
        "pgUri",
        "PG_URI",
        "postgres://postgres:@localhost:5432/mydatabase",
        "url",
    ),
};

pub static SQLITE: DatabaseDescriptor = DatabaseDescriptor {
    database: Database::Sqlite,
    label: "SQLite",
    driver_package: "sqlite3",
    driver_fields: &[SQLITE_PATH],
    connection_field: SQLITE_PATH,
};

pub static DATABASE_REGISTRY: &[&DatabaseDescriptor] = &[&MONGODB, &MYSQL, &POSTGRESQL, &SQLITE];

/// Look up the descriptor for a database. `Database::None` has none.
pub fn descriptor(database: Database) -> Option<&'static DatabaseDescriptor> {
    match database {
        Database::MongoDb => Some(&MONGODB),
        Database::MySql => Some(&MYSQL),
        Database::PostgreSql => Some(&POSTGRESQL),
        Database::Sqlite => Some(&SQLITE),
        Database::None => None,
    }
}
