//! End-to-end scaffolding against the in-memory and local filesystems.

use std::path::{Path, PathBuf};

use backstrap_adapters::{LocalFilesystem, MemoryFilesystem};
use backstrap_core::prelude::*;

fn express_mysql_sequelize() -> ProjectOptions {
    ProjectOptions::builder()
        .name("orders")
        .unwrap()
        .variant(LanguageVariant::Untyped)
        .framework(Framework::Express)
        .database(Database::MySql)
        .orm(Orm::Sequelize)
        .build()
        .unwrap()
}

#[test]
fn writes_every_planned_file_under_project_root() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));
    let options = express_mysql_sequelize();

    let report = service.scaffold(&options, "/work").unwrap();

    assert_eq!(report.root, PathBuf::from("/work/orders"));
    assert!(!report.installed);
    for file in &report.files {
        assert!(
            fs.read_file(&report.root.join(file)).is_some(),
            "{} missing",
            file.display()
        );
    }
    assert_eq!(fs.list_files().len(), report.files.len());

    for dir in ["src", "src/config", "src/controllers", "src/routes", "src/models"] {
        assert!(fs.exists(&Path::new("/work/orders").join(dir)), "{dir} missing");
    }
}

#[test]
fn written_contents_match_composition() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));
    let options = express_mysql_sequelize();

    let preview = service.preview(&options);
    service.write(&options, "/work").unwrap();

    for file in &preview.files {
        let on_disk = fs
            .read_file(&Path::new("/work/orders").join(file.path.as_path()))
            .unwrap();
        assert_eq!(on_disk, file.content, "{}", file.path);
    }

    let env = fs.read_file(Path::new("/work/orders/.env")).unwrap();
    assert!(env.starts_with("PORT=3000\n"));
    assert!(env.contains("MYSQL_URI="));
}

#[test]
fn second_scaffold_into_same_root_is_refused() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));
    let options = express_mysql_sequelize();

    service.scaffold(&options, "/work").unwrap();
    let before = fs.list_files();

    let err = service.scaffold(&options, "/work").unwrap_err();
    assert!(matches!(
        err,
        BackstrapError::Application(ApplicationError::ProjectExists { .. })
    ));
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert_eq!(fs.list_files(), before);
}

#[test]
fn failed_write_leaves_nothing_behind() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/work")).unwrap();
    fs.fail_writes_to("/work/orders/package.json");

    let service = ScaffoldService::new(Box::new(fs.clone()));
    let err = service.scaffold(&express_mysql_sequelize(), "/work").unwrap_err();

    assert!(err.is_retryable());
    assert!(!fs.exists(Path::new("/work/orders")));
    assert!(fs.list_files().is_empty());
    assert!(fs.exists(Path::new("/work")));
}

#[test]
fn local_filesystem_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let options = ProjectOptions::builder()
        .name("edge-api")
        .unwrap()
        .variant(LanguageVariant::Typed)
        .framework(Framework::Hono)
        .mvc(false)
        .build()
        .unwrap();

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let report = service.scaffold(&options, tmp.path()).unwrap();

    let root = tmp.path().join("edge-api");
    assert_eq!(report.root, root);
    assert!(root.join("src/index.ts").is_file());
    assert!(root.join("src/app.ts").is_file());
    assert!(root.join("tsconfig.json").is_file());
    assert!(!root.join("src/controllers").exists());

    let pkg = std::fs::read_to_string(root.join("package.json")).unwrap();
    assert!(pkg.contains("\"name\": \"edge-api\""));
}
