//! `src/config/config.<ext>` and `.env`.
//!
//! Both are rendered from the same [`ConfigField`] slice, so every property
//! the config module reads has a matching line in `.env`.

use super::Source;
use crate::domain::databases::{ConfigField, FieldKind};

pub const DEFAULT_PORT: u16 = 3000;

/// Config module. `fields` is empty when no database is selected.
pub fn config_module(fields: &[ConfigField]) -> String {
    let mut src = Source::new();
    src.line("import dotenv from 'dotenv';")
        .blank()
        .line("dotenv.config();")
        .blank()
        .line("export const config = {")
        .line(format!(
            "    port: Number(process.env.PORT) || {},",
            DEFAULT_PORT
        ));
    for field in fields {
        src.line(format!("    {}: {},", field.key, env_read(field)));
    }
    src.line("};").finish()
}

fn env_read(field: &ConfigField) -> String {
    match field.kind {
        FieldKind::Text => format!("process.env.{} || '{}'", field.env, field.default),
        FieldKind::Number => format!("Number(process.env.{}) || {}", field.env, field.default),
    }
}

/// `.env` file: `PORT` first, then one line per field.
pub fn env_file(fields: &[ConfigField]) -> String {
    let mut src = Source::new();
    src.line(format!("PORT={}", DEFAULT_PORT));
    for field in fields {
        src.line(format!("{}={}", field.env, field.default));
    }
    src.finish()
}
