//! Tests for error handling, suggestions and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ddd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ddd").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".xdg"))
        .env("HOME", dir.path())
        .env("NO_COLOR", "1")
        .env_remove("DDD_TEMPLATES_DIR");
    cmd
}

#[test]
fn test_error_invalid_entity_name() {
    let temp = TempDir::new().unwrap();
    ddd(&temp)
        .args(["create-entity", "apps/shop", "my entity"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid entity name"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!temp.path().join("apps").exists());
}

#[test]
fn test_error_name_with_separator() {
    let temp = TempDir::new().unwrap();
    ddd(&temp)
        .args(["create-repository", "apps/shop", "shop/Product"])
        .assert()
        .code(2);
}

#[test]
fn test_error_missing_templates_directory() {
    let temp = TempDir::new().unwrap();
    ddd(&temp)
        .args(["--templates", "nope", "create-entity", "apps/shop", "Product"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_error_template_missing_from_directory() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("tpl/entity")).unwrap();

    ddd(&temp)
        .args(["--templates", "tpl", "create-entity", "apps/shop", "Product"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Template not found"));
}

#[test]
fn test_error_bad_template_id() {
    let temp = TempDir::new().unwrap();
    ddd(&temp)
        .args(["show-template", "exceptions.py"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<dir>/<file>"));
}

#[test]
fn test_error_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    ddd(&temp)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_error_broken_config_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("bad.toml"), "[defaults\nstyle=").unwrap();

    ddd(&temp)
        .args(["--config", "bad.toml", "list-templates"])
        .assert()
        .code(4);
}

#[test]
fn test_usage_error_exit_code() {
    let temp = TempDir::new().unwrap();
    ddd(&temp)
        .args(["create-entity", "apps/shop"])
        .assert()
        .code(2);
}
