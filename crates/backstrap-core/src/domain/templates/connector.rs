//! `src/config/db.<ext>`: the database connector.
//!
//! Every variant exports `connectDB`, an async function the entry point
//! awaits before listening.

use super::{Source, imports::import_path};
use crate::domain::{
    databases::ConfigField,
    entities::{
        file_plan::SourceModule,
        options::{SqlEngine, Store},
    },
    value_objects::LanguageVariant,
};

pub fn connector(variant: LanguageVariant, store: Store) -> String {
    let desc = store.descriptor();
    let fields = store.fields();
    let config_import = import_path(SourceModule::Db, SourceModule::Config, variant);

    let mut src = Source::new();
    match store {
        Store::Mongoose => {
            let uri = desc.connection_field.key;
            src.line("import mongoose from 'mongoose';")
                .line(format!("import {{ config }} from '{config_import}';"))
                .blank()
                .line("export const connectDB = async () => {")
                .line(format!("    await mongoose.connect(config.{uri});"))
                .line(format!("    console.log('{} connected');", desc.label))
                .line("};");
        }
        Store::Native(SqlEngine::MySql) => {
            src.line("import mysql from 'mysql2/promise';")
                .line(format!("import {{ config }} from '{config_import}';"))
                .blank()
                .line("export const pool = mysql.createPool({")
                .lines(driver_options(fields))
                .line("});")
                .blank()
                .line("export const connectDB = async () => {")
                .line("    const connection = await pool.getConnection();")
                .line("    connection.release();")
                .line(format!("    console.log('{} connected');", desc.label))
                .line("};");
        }
        Store::Native(SqlEngine::PostgreSql) => {
            src.line("import pg from 'pg';")
                .line(format!("import {{ config }} from '{config_import}';"))
                .blank()
                .line("export const pool = new pg.Pool({")
                .lines(driver_options(fields))
                .line("});")
                .blank()
                .line("export const connectDB = async () => {")
                .line("    const client = await pool.connect();")
                .line("    client.release();")
                .line(format!("    console.log('{} connected');", desc.label))
                .line("};");
        }
        Store::Native(SqlEngine::Sqlite) => {
            let (promise, err) = match variant {
                LanguageVariant::Typed => ("new Promise<void>", "err: Error | null"),
                LanguageVariant::Untyped => ("new Promise", "err"),
            };
            src.line("import sqlite3 from 'sqlite3';")
                .line(format!("import {{ config }} from '{config_import}';"))
                .blank()
                .line(format!("export const db = new sqlite3.Database(config.{});", desc.connection_field.key))
                .blank()
                .line("export const connectDB = async () => {")
                .line(format!("    await {promise}((resolve, reject) => {{"))
                .line(format!(
                    "        db.get('SELECT 1', ({err}) => (err ? reject(err) : resolve()));"
                ))
                .line("    });")
                .line(format!("    console.log('{} connected');", desc.label))
                .line("};");
        }
        Store::Sequelize(engine) => {
            let field = desc.connection_field.key;
            src.line("import { Sequelize } from 'sequelize';")
                .line(format!("import {{ config }} from '{config_import}';"))
                .blank();
            match engine {
                SqlEngine::Sqlite => {
                    src.line("export const sequelize = new Sequelize({")
                        .line("    dialect: 'sqlite',")
                        .line(format!("    storage: config.{field},"))
                        .line("    logging: false,")
                        .line("});");
                }
                SqlEngine::MySql | SqlEngine::PostgreSql => {
                    src.line(format!(
                        "export const sequelize = new Sequelize(config.{field}, {{ logging: false }});"
                    ));
                }
            }
            src.blank()
                .line("export const connectDB = async () => {")
                .line("    await sequelize.authenticate();")
                .line("    await sequelize.sync();")
                .line(format!("    console.log('{} connected through Sequelize');", desc.label))
                .line("};");
        }
        Store::TypeOrm(engine) => {
            let field = desc.connection_field.key;
            if variant.is_typed() {
                src.line("import 'reflect-metadata';");
            }
            src.line("import { DataSource } from 'typeorm';")
                .line(format!("import {{ config }} from '{config_import}';"))
                .blank()
                .line("export const AppDataSource = new DataSource({")
                .line(format!("    type: '{}',", typeorm_type(engine)));
            match engine {
                SqlEngine::Sqlite => src.line(format!("    database: config.{field},")),
                SqlEngine::MySql | SqlEngine::PostgreSql => {
                    src.line(format!("    url: config.{field},"))
                }
            };
            src.line(format!("    entities: [{}],", typeorm_entities(variant)))
                .line("    synchronize: true,")
                .line("});")
                .blank()
                .line("export const connectDB = async () => {")
                .line("    await AppDataSource.initialize();")
                .line(format!("    console.log('{} connected through TypeORM');", desc.label))
                .line("};");
        }
    }
    src.finish()
}

fn driver_options(fields: &[ConfigField]) -> Vec<String> {
    fields
        .iter()
        .map(|f| format!("    {}: config.{},", f.option, f.key))
        .collect()
}

const fn typeorm_type(engine: SqlEngine) -> &'static str {
    match engine {
        SqlEngine::MySql => "mysql",
        SqlEngine::PostgreSql => "postgres",
        SqlEngine::Sqlite => "sqlite",
    }
}

fn typeorm_entities(variant: LanguageVariant) -> &'static str {
    match variant {
        // Resolves to src/models under ts-node and dist/models after tsc.
        LanguageVariant::Typed => "__dirname + '/../models/*.{js,ts}'",
        // ES modules have no __dirname; resolved from the project root.
        LanguageVariant::Untyped => "'src/models/*.js'",
    }
}
