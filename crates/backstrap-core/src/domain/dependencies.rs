//! Dependency resolver: packages and npm scripts for a set of options.

use crate::domain::{
    entities::{
        file_plan::SourceModule,
        manifest::DependencyManifest,
        options::{ProjectOptions, SqlEngine, Store},
    },
    value_objects::{Framework, LanguageVariant},
};

const EXPRESS_EXTRAS: &[&str] = &[
    "express-rate-limit",
    "express-session",
    "jsonwebtoken",
    "express-validator",
];

// express-validator ships its own types.
const EXPRESS_EXTRAS_TYPES: &[&str] = &[
    "@types/express-rate-limit",
    "@types/express-session",
    "@types/jsonwebtoken",
];

/// Resolve the manifest for `options`. Pure and deterministic.
pub fn resolve(options: &ProjectOptions) -> DependencyManifest {
    let variant = options.variant();
    let typed = variant.is_typed();
    let mut m = DependencyManifest::new();

    m.runtime(&["dotenv"]).dev(&["nodemon"]);

    match options.framework() {
        Framework::Express => {
            m.runtime(&["express"]);
            if options.install_extras() {
                m.runtime(EXPRESS_EXTRAS);
            }
        }
        Framework::Hono => {
            m.runtime(&["hono", "@hono/node-server"]);
        }
    }

    if let Some(store) = options.store() {
        m.runtime(&[store.descriptor().driver_package]);
        match store {
            Store::Sequelize(engine) => {
                m.runtime(&["sequelize"]).dev(&["sequelize-cli"]);
                if engine == SqlEngine::PostgreSql {
                    m.runtime(&["pg-hstore"]);
                }
            }
            Store::TypeOrm(_) => {
                m.runtime(&["typeorm", "reflect-metadata"]);
            }
            Store::Mongoose | Store::Native(_) => {}
        }
    }

    if typed {
        m.dev(&["typescript", "@types/node", "ts-node"]);
        if options.framework() == Framework::Express {
            m.dev(&["@types/express"]);
            if options.install_extras() {
                m.dev(EXPRESS_EXTRAS_TYPES);
            }
        }
    }

    add_scripts(&mut m, variant);
    m
}

fn add_scripts(m: &mut DependencyManifest, variant: LanguageVariant) {
    let entry = SourceModule::Index.path(variant);
    match variant {
        LanguageVariant::Typed => {
            m.script("start", "node dist/index.js")
                .script(
                    "dev",
                    format!("nodemon --watch \"src/**/*.ts\" --exec \"ts-node\" {entry}"),
                )
                .script("build", "tsc");
        }
        LanguageVariant::Untyped => {
            m.script("start", format!("node {entry}"))
                .script("dev", format!("nodemon {entry}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::manifest::DependencyKind,
        value_objects::{Database, Orm},
    };

    fn opts(
        variant: LanguageVariant,
        framework: Framework,
        db: Database,
        orm: Orm,
        extras: bool,
    ) -> ProjectOptions {
        ProjectOptions::builder()
            .name("demo")
            .unwrap()
            .variant(variant)
            .framework(framework)
            .database(db)
            .orm(orm)
            .extras(extras)
            .build()
            .unwrap()
    }

    #[test]
    fn untyped_express_has_base_packages_and_no_build() {
        let m = resolve(&opts(
            LanguageVariant::Untyped,
            Framework::Express,
            Database::None,
            Orm::None,
            false,
        ));
        assert_eq!(m.dependencies(), vec!["dotenv", "express"]);
        assert_eq!(m.dev_dependencies(), vec!["nodemon"]);
        assert_eq!(m.script_command("start"), Some("node src/index.js"));
        assert_eq!(m.script_command("dev"), Some("nodemon src/index.js"));
        assert!(m.script_command("build").is_none());
    }

    #[test]
    fn build_script_iff_typed() {
        for variant in [LanguageVariant::Typed, LanguageVariant::Untyped] {
            let m = resolve(&opts(variant, Framework::Hono, Database::None, Orm::None, false));
            assert_eq!(m.script_command("build").is_some(), variant.is_typed());
        }
    }

    #[test]
    fn typed_scripts() {
        let m = resolve(&opts(
            LanguageVariant::Typed,
            Framework::Express,
            Database::None,
            Orm::None,
            false,
        ));
        assert_eq!(m.script_command("start"), Some("node dist/index.js"));
        assert_eq!(
            m.script_command("dev"),
            Some("nodemon --watch \"src/**/*.ts\" --exec \"ts-node\" src/index.ts")
        );
        assert_eq!(m.script_command("build"), Some("tsc"));
    }

    #[test]
    fn sequelize_on_postgres_adds_hstore_and_cli() {
        let m = resolve(&opts(
            LanguageVariant::Typed,
            Framework::Express,
            Database::PostgreSql,
            Orm::Sequelize,
            false,
        ));
        for pkg in ["pg", "sequelize", "pg-hstore"] {
            assert_eq!(m.kind_of(pkg), Some(DependencyKind::Runtime), "{pkg}");
        }
        for pkg in ["sequelize-cli", "typescript", "@types/node", "ts-node", "@types/express"] {
            assert_eq!(m.kind_of(pkg), Some(DependencyKind::Dev), "{pkg}");
        }
    }

    #[test]
    fn sequelize_on_mysql_skips_hstore() {
        let m = resolve(&opts(
            LanguageVariant::Untyped,
            Framework::Express,
            Database::MySql,
            Orm::Sequelize,
            false,
        ));
        assert!(m.contains("mysql2"));
        assert!(!m.contains("pg-hstore"));
    }

    #[test]
    fn typeorm_brings_reflect_metadata() {
        let m = resolve(&opts(
            LanguageVariant::Typed,
            Framework::Hono,
            Database::Sqlite,
            Orm::TypeOrm,
            false,
        ));
        assert!(m.contains("sqlite3"));
        assert!(m.contains("typeorm"));
        assert!(m.contains("reflect-metadata"));
        assert!(!m.contains("@types/express"));
    }

    #[test]
    fn mongodb_uses_mongoose() {
        let m = resolve(&opts(
            LanguageVariant::Untyped,
            Framework::Express,
            Database::MongoDb,
            Orm::None,
            false,
        ));
        assert!(m.contains("mongoose"));
        assert!(!m.contains("sequelize"));
    }

    #[test]
    fn extras_only_for_express() {
        let express = resolve(&opts(
            LanguageVariant::Typed,
            Framework::Express,
            Database::None,
            Orm::None,
            true,
        ));
        for pkg in EXPRESS_EXTRAS {
            assert!(express.contains(pkg));
        }
        assert_eq!(
            express.kind_of("@types/jsonwebtoken"),
            Some(DependencyKind::Dev)
        );

        let hono = resolve(&opts(
            LanguageVariant::Typed,
            Framework::Hono,
            Database::None,
            Orm::None,
            true,
        ));
        assert!(!hono.contains("jsonwebtoken"));
    }

    #[test]
    fn resolution_is_deterministic() {
        let o = opts(
            LanguageVariant::Typed,
            Framework::Express,
            Database::PostgreSql,
            Orm::TypeOrm,
            true,
        );
        assert_eq!(resolve(&o), resolve(&o));
    }
}
