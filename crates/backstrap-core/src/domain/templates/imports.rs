//! Import specifiers between generated modules.
//!
//! Convention, per language variant:
//! - `Typed`: no extension (`../config/db`). The TypeScript compiler emits
//!   CommonJS and resolves the bare path itself.
//! - `Untyped`: explicit `.js` (`../config/db.js`). Native ES modules do not
//!   resolve extensionless specifiers.

use crate::domain::{entities::file_plan::SourceModule, value_objects::LanguageVariant};

/// Relative import specifier for `to`, as written inside `from`.
pub fn import_path(from: SourceModule, to: SourceModule, variant: LanguageVariant) -> String {
    let from_parts: Vec<&str> = from.stem().split('/').collect();
    let to_parts: Vec<&str> = to.stem().split('/').collect();
    let from_dir = &from_parts[..from_parts.len() - 1];
    let to_dir = &to_parts[..to_parts.len() - 1];

    let common = from_dir
        .iter()
        .zip(to_dir)
        .take_while(|(a, b)| a == b)
        .count();
    let ups = from_dir.len() - common;

    let mut spec = if ups == 0 {
        "./".to_string()
    } else {
        "../".repeat(ups)
    };
    spec.push_str(&to_parts[common..].join("/"));

    match variant {
        LanguageVariant::Typed => spec,
        LanguageVariant::Untyped => spec + ".js",
    }
}
