#![allow(deprecated)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn todoz_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("todoz"));
    cmd.env("TODOZ_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("TODOZ_LOG");
    cmd
}

#[test]
fn test_buy_milk_workflow() {
    let home = TempDir::new().unwrap();

    // 1. Empty list
    todoz_cmd(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos here yet."))
        .stdout(predicate::str::contains("0 remaining"));

    // 2. Add
    todoz_cmd(&home)
        .args(["add", "Buy", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo added: Buy milk"))
        .stdout(predicate::str::contains("1 remaining"));

    // 3. Complete it
    todoz_cmd(&home)
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo completed (1): Buy milk"));

    // 4. Active filter hides it
    todoz_cmd(&home)
        .args(["list", "active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos here yet."))
        .stdout(predicate::str::contains("Buy milk").not());

    // 5. Completed filter shows it
    todoz_cmd(&home)
        .args(["list", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [✓] Buy milk"));

    // 6. Clear
    todoz_cmd(&home)
        .args(["clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 completed todo"));

    let stored = fs::read_to_string(home.path().join("todos.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(value, serde_json::json!([]));
}

#[test]
fn test_edit_and_delete() {
    let home = TempDir::new().unwrap();

    todoz_cmd(&home).args(["add", "first"]).assert().success();
    todoz_cmd(&home).args(["add", "second"]).assert().success();

    todoz_cmd(&home)
        .args(["edit", "2", "first", "edited"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo updated (2): first edited"));

    todoz_cmd(&home)
        .args(["edit", "2", "first edited"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"));

    todoz_cmd(&home)
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo deleted (1): second"));

    todoz_cmd(&home)
        .args(["ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [ ] first edited"))
        .stdout(predicate::str::contains("second").not());
}

#[test]
fn test_unknown_reference_is_a_warning_not_a_failure() {
    let home = TempDir::new().unwrap();
    todoz_cmd(&home).args(["add", "only"]).assert().success();

    todoz_cmd(&home)
        .args(["done", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No todo matches 7"));
}

#[test]
fn test_invalid_reference_fails() {
    let home = TempDir::new().unwrap();
    todoz_cmd(&home)
        .args(["done", "milk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid todo reference: milk"));
}

#[test]
fn test_corrupted_store_starts_empty() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("todos.json"), "this is not json").unwrap();

    todoz_cmd(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos here yet."));
}

#[test]
fn test_config_default_filter_and_storage_key() {
    let home = TempDir::new().unwrap();

    todoz_cmd(&home)
        .args(["config", "default-filter", "active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set default-filter = active"));

    todoz_cmd(&home).args(["add", "open task"]).assert().success();
    todoz_cmd(&home).args(["add", "done task"]).assert().success();
    todoz_cmd(&home).args(["done", "1"]).assert().success();

    todoz_cmd(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("open task"))
        .stdout(predicate::str::contains("done task").not());

    todoz_cmd(&home)
        .args(["config", "storage-key", "work"])
        .assert()
        .success();

    todoz_cmd(&home)
        .args(["path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("work.json"));

    todoz_cmd(&home)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-key = work"))
        .stdout(predicate::str::contains("default-filter = active"));
}

#[test]
fn test_bad_config_value_fails() {
    let home = TempDir::new().unwrap();
    todoz_cmd(&home)
        .args(["config", "default-filter", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown filter"));
}
