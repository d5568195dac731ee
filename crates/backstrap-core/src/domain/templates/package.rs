//! `package.json` and `tsconfig.json`.

use serde_json::{Map, Value, json};

use crate::domain::{
    entities::{common::ProjectName, file_plan::SourceModule, manifest::DependencyManifest},
    value_objects::LanguageVariant,
};

pub const INITIAL_VERSION: &str = "1.0.0";

/// The package manifest. Dependency tables start empty; the installer
/// fills them in.
pub fn package_json(
    name: &ProjectName,
    variant: LanguageVariant,
    manifest: &DependencyManifest,
) -> String {
    let mut root = Map::new();
    root.insert("name".into(), Value::String(name.package_name()));
    root.insert("version".into(), Value::String(INITIAL_VERSION.into()));
    root.insert(
        "main".into(),
        Value::String(SourceModule::Index.path(variant).to_string()),
    );
    if !variant.is_typed() {
        root.insert("type".into(), Value::String("module".into()));
    }

    let scripts: Map<String, Value> = manifest
        .scripts()
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    root.insert("scripts".into(), Value::Object(scripts));
    root.insert("dependencies".into(), json!({}));
    root.insert("devDependencies".into(), json!({}));

    format!("{:#}\n", Value::Object(root))
}

pub fn tsconfig() -> String {
    let config = json!({
        "compilerOptions": {
            "target": "ES2020",
            "module": "commonjs",
            "rootDir": "src",
            "outDir": "dist",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "experimentalDecorators": true,
            "emitDecoratorMetadata": true
        },
        "include": ["src/**/*"]
    });
    format!("{:#}\n", config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> DependencyManifest {
        let mut m = DependencyManifest::new();
        m.script("start", "node src/index.js")
            .script("dev", "nodemon src/index.js");
        m
    }

    #[test]
    fn package_json_fields_in_order() {
        let name = ProjectName::parse("My App").unwrap();
        let out = package_json(&name, LanguageVariant::Untyped, &manifest());
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["name"], "my-app");
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["main"], "src/index.js");
        assert_eq!(value["type"], "module");
        assert_eq!(value["scripts"]["dev"], "nodemon src/index.js");
        assert_eq!(value["dependencies"], json!({}));

        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec!["name", "version", "main", "type", "scripts", "dependencies", "devDependencies"]
        );
    }

    #[test]
    fn typed_package_is_commonjs() {
        let name = ProjectName::parse("api").unwrap();
        let out = package_json(&name, LanguageVariant::Typed, &manifest());
        let value: Value = serde_json::from_str(&out).unwrap();
        assert!(value.get("type").is_none());
        assert_eq!(value["main"], "src/index.ts");
    }

    #[test]
    fn tsconfig_enables_decorators() {
        let value: Value = serde_json::from_str(&tsconfig()).unwrap();
        assert_eq!(value["compilerOptions"]["experimentalDecorators"], true);
        assert_eq!(value["compilerOptions"]["outDir"], "dist");
    }
}
