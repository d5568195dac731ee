//! Layout planner: which files a project gets, and where.

use crate::domain::{
    entities::{
        file_plan::{EntryModule, FilePlan, FileRole, SourceModule},
        options::ProjectOptions,
    },
};

pub const ENV_FILE: &str = ".env";
pub const PACKAGE_JSON: &str = "package.json";
pub const TSCONFIG: &str = "tsconfig.json";

/// Plan the files for `options`. Pure and total.
///
/// Order: config, `.env`, entry modules, connector, MVC files, compiler
/// config, manifest.
pub fn plan(options: &ProjectOptions) -> FilePlan {
    let variant = options.variant();
    let mut plan = FilePlan::new();

    plan.push(SourceModule::Config.path(variant), FileRole::Config);
    plan.push(ENV_FILE, FileRole::EnvFile);

    for module in EntryModule::of(options.framework()) {
        plan.push(module.source().path(variant), FileRole::EntryPoint(*module));
    }

    if let Some(store) = options.store() {
        plan.push(SourceModule::Db.path(variant), FileRole::DbConnector(store));
    }

    if options.use_mvc() {
        plan.push(SourceModule::Controller.path(variant), FileRole::Controller);
        plan.push(SourceModule::Route.path(variant), FileRole::Route);
        if let Some(mapping) = options.model_mapping() {
            plan.push(SourceModule::Model.path(variant), FileRole::Model(mapping));
        }
    }

    if variant.is_typed() {
        plan.push(TSCONFIG, FileRole::CompilerConfig);
    }
    plan.push(PACKAGE_JSON, FileRole::Manifest);

    plan
}
