//! Integration tests for the `backstrap` binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's configuration file and environment.
fn backstrap(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("backstrap");
    cmd.current_dir(dir)
        .env("BACKSTRAP_CONFIG", dir.join("no-such-config.toml"))
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn help_lists_commands() {
    let temp = TempDir::new().unwrap();
    backstrap(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("plan"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    backstrap(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_writes_default_project() {
    let temp = TempDir::new().unwrap();
    backstrap(temp.path())
        .args(["new", "my-api", "--yes", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next steps"))
        .stdout(predicate::str::contains("npm install dotenv express"))
        .stdout(predicate::str::contains("npm install --save-dev nodemon"));

    let root = temp.path().join("my-api");
    for file in [
        "package.json",
        ".env",
        "src/index.js",
        "src/config/config.js",
        "src/controllers/example.controller.js",
        "src/routes/example.routes.js",
    ] {
        assert!(root.join(file).is_file(), "{file} missing");
    }
    assert!(!root.join("src/models").exists());

    let pkg = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(pkg.contains("\"type\": \"module\""));
    assert!(pkg.contains("\"dependencies\": {}"));
}

#[test]
fn new_honours_output_dir_and_options() {
    let temp = TempDir::new().unwrap();
    backstrap(temp.path())
        .args([
            "new",
            "shop",
            "-y",
            "--skip-install",
            "-o",
            "apps",
            "--lang",
            "ts",
            "--db",
            "postgres",
            "--orm",
            "typeorm",
        ])
        .assert()
        .success();

    let root = temp.path().join("apps/shop");
    assert!(root.join("tsconfig.json").is_file());
    assert!(root.join("src/models/example.model.ts").is_file());
    let env = fs::read_to_string(root.join(".env")).unwrap();
    assert!(env.starts_with("PORT=3000\n"));
    assert!(env.contains("PG_URI="));
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    backstrap(temp.path())
        .args(["new", "preview", "--dry-run", "--db", "mongodb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("src/config/db.js"))
        .stdout(predicate::str::contains("npm install --save-dev nodemon"));

    assert!(!temp.path().join("preview").exists());
}

#[test]
fn quiet_new_prints_nothing() {
    let temp = TempDir::new().unwrap();
    backstrap(temp.path())
        .args(["-q", "new", "silent", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("silent/package.json").is_file());
}

#[test]
fn shell_metacharacters_in_name_exit_2() {
    let temp = TempDir::new().unwrap();
    for name in ["a(b)", "~home", "-rf"] {
        backstrap(temp.path())
            .args(["new", "--yes", "--skip-install", "--", name])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid project name"));
    }
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn invalid_project_name_exits_2() {
    let temp = TempDir::new().unwrap();
    backstrap(temp.path())
        .args(["new", "bad;name", "-y", "--skip-install"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn orm_with_mongodb_exits_2() {
    let temp = TempDir::new().unwrap();
    backstrap(temp.path())
        .args(["new", "x", "-y", "--db", "mongodb", "--orm", "sequelize"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("MongoDB"));

    assert!(!temp.path().join("x").exists());
}

#[test]
fn existing_project_is_refused() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("taken")).unwrap();
    fs::write(temp.path().join("taken/keep.txt"), "mine").unwrap();

    backstrap(temp.path())
        .args(["new", "taken", "-y", "--skip-install"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        fs::read_to_string(temp.path().join("taken/keep.txt")).unwrap(),
        "mine"
    );
}

#[test]
fn unknown_flag_value_exits_2() {
    let temp = TempDir::new().unwrap();
    backstrap(temp.path())
        .args(["new", "x", "--framework", "koa"])
        .assert()
        .code(2);
}

#[test]
fn plan_json_describes_project() {
    let temp = TempDir::new().unwrap();
    let assert = backstrap(temp.path())
        .args([
            "plan",
            "edge",
            "--framework",
            "hono",
            "--no-mvc",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let plan: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(plan["framework"], "hono");
    let paths: Vec<&str> = plan["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["path"].as_str().unwrap())
        .collect();
    assert!(paths.contains(&"src/app.js"));
    assert!(!paths.iter().any(|p| p.contains("controllers")));
    assert!(!temp.path().join("edge").exists());
}

#[test]
fn plan_table_lists_scripts() {
    let temp = TempDir::new().unwrap();
    backstrap(temp.path())
        .args(["plan", "api", "--lang", "typescript"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/index.ts"))
        .stdout(predicate::str::contains("Scripts"))
        .stdout(predicate::str::contains("tsc"));
}

#[test]
fn environment_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    backstrap(temp.path())
        .env("BACKSTRAP__DEFAULTS__LANGUAGE", "typescript")
        .args(["config", "get", "defaults.language"])
        .assert()
        .success()
        .stdout("typescript\n");
}

#[test]
fn config_file_defaults_apply_to_new() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("backstrap.toml");
    fs::write(
        &config,
        "[defaults]\nframework = \"hono\"\nmvc = false\n\n[install]\nenabled = false\n",
    )
    .unwrap();

    backstrap(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["new", "edge", "-y"])
        .assert()
        .success();

    let root = temp.path().join("edge");
    assert!(root.join("src/app.js").is_file());
    assert!(!root.join("src/controllers").exists());
    assert!(!root.join("node_modules").exists());
}

#[test]
fn unknown_config_key_exits_3() {
    let temp = TempDir::new().unwrap();
    backstrap(temp.path())
        .args(["config", "get", "defaults.nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn bad_config_value_exits_4() {
    let temp = TempDir::new().unwrap();
    backstrap(temp.path())
        .env("BACKSTRAP__DEFAULTS__DATABASE", "oracle")
        .args(["new", "x", "-y", "--skip-install"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("defaults.database"));
}

#[test]
fn init_writes_config_once() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("conf/backstrap.toml");

    backstrap(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success();
    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains("[defaults]"));
    assert!(written.contains("[install]"));

    backstrap(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn config_path_reports_explicit_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    backstrap(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn shell_completions() {
    let temp = TempDir::new().unwrap();
    backstrap(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backstrap"));
}
