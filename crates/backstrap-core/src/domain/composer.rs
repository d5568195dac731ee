//! Composition engine: plan, render, resolve.

use crate::domain::{
    dependencies, layout,
    entities::{
        composition::{Composition, RenderedFile},
        file_plan::{EntryModule, FileRole},
        manifest::DependencyManifest,
        options::ProjectOptions,
    },
    templates::{config, connector, entry, mvc, package},
};

/// Produce every file and the dependency manifest for `options`.
///
/// Pure: the same options always yield byte-identical output.
pub fn compose(options: &ProjectOptions) -> Composition {
    let manifest = dependencies::resolve(options);
    let files = layout::plan(options)
        .entries()
        .iter()
        .map(|entry| RenderedFile {
            path: entry.path.clone(),
            role: entry.role,
            content: render(entry.role, options, &manifest),
        })
        .collect();

    Composition { files, manifest }
}

/// Render one role. Exhaustive: every role has exactly one renderer.
pub fn render(role: FileRole, options: &ProjectOptions, manifest: &DependencyManifest) -> String {
    let variant = options.variant();
    let store = options.store();
    let fields = store.map(|s| s.fields()).unwrap_or(&[]);

    match role {
        FileRole::EntryPoint(module) => match module {
            EntryModule::ExpressServer => {
                entry::express_server(variant, options.use_mvc(), store.is_some())
            }
            EntryModule::HonoApp => entry::hono_app(variant, options.use_mvc()),
            EntryModule::HonoServer => entry::hono_server(variant, store.is_some()),
        },
        FileRole::Config => config::config_module(fields),
        FileRole::EnvFile => config::env_file(fields),
        FileRole::DbConnector(store) => connector::connector(variant, store),
        FileRole::Controller => mvc::controller(variant, options.framework()),
        FileRole::Route => mvc::route(variant, options.framework()),
        FileRole::Model(mapping) => mvc::model(variant, mapping),
        FileRole::Manifest => package::package_json(options.name(), variant, manifest),
        FileRole::CompilerConfig => package::tsconfig(),
    }
}
