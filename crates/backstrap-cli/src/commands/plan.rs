//! `backstrap plan`: show the files, packages and scripts a project would
//! get, without touching the filesystem.

use serde_json::{Value, json};

use backstrap_core::domain::{Composition, ProjectOptions, compose};

use crate::{
    cli::{PlanArgs, PlanFormat},
    commands::{Selection, show_options},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: PlanArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = Selection::resolve(&config.defaults, &args.project)?.into_options(&args.name)?;
    let composition = compose(&options);

    match args.format {
        PlanFormat::Table => print_table(&options, &composition, &output),
        PlanFormat::Json => {
            let rendered = serde_json::to_string_pretty(&to_json(&options, &composition))
                .map_err(|e| CliError::IoError {
                    message: "failed to render plan".into(),
                    source: e.into(),
                })?;
            output.data(&rendered)?;
            Ok(())
        }
    }
}

fn print_table(
    options: &ProjectOptions,
    composition: &Composition,
    out: &OutputManager,
) -> CliResult<()> {
    show_options(options, None, out)?;

    out.header("Files")?;
    let width = composition
        .files
        .iter()
        .map(|f| f.path.as_str().len())
        .max()
        .unwrap_or(0);
    for file in &composition.files {
        out.field(file.path.as_str(), &file.role.kind().to_string(), width)?;
    }

    let manifest = &composition.manifest;
    out.print("")?;
    out.header("Dependencies")?;
    out.print(&format!("  {}", manifest.dependencies().join(" ")))?;
    let dev = manifest.dev_dependencies();
    if !dev.is_empty() {
        out.header("Dev dependencies")?;
        out.print(&format!("  {}", dev.join(" ")))?;
    }

    out.print("")?;
    out.header("Scripts")?;
    let width = manifest.scripts().keys().map(String::len).max().unwrap_or(0);
    for (name, command) in manifest.scripts() {
        out.field(name, command, width)?;
    }
    Ok(())
}

fn to_json(options: &ProjectOptions, composition: &Composition) -> Value {
    let manifest = &composition.manifest;
    json!({
        "name": options.name().as_str(),
        "package": options.name().package_name(),
        "language": options.variant().as_str(),
        "framework": options.framework().as_str(),
        "mvc": options.use_mvc(),
        "database": options.database().as_str(),
        "orm": options.orm().as_str(),
        "extras": options.install_extras(),
        "files": composition
            .files
            .iter()
            .map(|f| json!({ "path": f.path, "role": f.role }))
            .collect::<Vec<_>>(),
        "dependencies": manifest.dependencies(),
        "devDependencies": manifest.dev_dependencies(),
        "scripts": manifest.scripts(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use backstrap_core::domain::{Database, Framework, LanguageVariant, Orm};

    #[test]
    fn json_lists_files_and_packages() {
        let options = ProjectOptions::builder()
            .name("Shop Api")
            .unwrap()
            .variant(LanguageVariant::Typed)
            .framework(Framework::Express)
            .database(Database::MongoDb)
            .orm(Orm::None)
            .build()
            .unwrap();
        let value = to_json(&options, &compose(&options));

        assert_eq!(value["package"], "shop-api");
        assert_eq!(value["mvc"], true);
        let paths: Vec<&str> = value["files"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["path"].as_str().unwrap())
            .collect();
        assert!(paths.contains(&"src/models/example.model.ts"));
        assert!(paths.contains(&"tsconfig.json"));
        assert!(
            value["dependencies"]
                .as_array()
                .unwrap()
                .iter()
                .any(|d| d == "mongoose")
        );
        assert_eq!(value["scripts"]["build"], "tsc");
    }
}
