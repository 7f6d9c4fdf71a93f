use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn boardrank(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("boardrank").unwrap();
    cmd.current_dir(dir)
        .env("BOARDRANK_HOME", dir.join("global"))
        .env_remove("BOARDRANK_LOG");
    cmd
}

fn run_ok(dir: &Path, args: &[&str]) -> String {
    let output = boardrank(dir).args(args).output().unwrap();
    assert!(
        output.status.success(),
        "{:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{:?} not in output:\n{}", needle, haystack))
}

#[test]
fn key_commands_print_keys() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path();

    assert_eq!(run_ok(dir, &["key", "between", "1", "9"]), "5\n");
    assert_eq!(run_ok(dir, &["key", "between", "-", "-"]), "V\n");
    assert_eq!(run_ok(dir, &["key", "between", "a", "b"]), "aV\n");
    assert_eq!(run_ok(dir, &["key", "after", "z"]), "zV\n");
    assert_eq!(run_ok(dir, &["key", "before", "V"]), "U\n");
    assert_eq!(run_ok(dir, &["key", "spaced", "3"]), "F\nU\nj\n");
}

#[test]
fn generator_errors_exit_nonzero() {
    let dir = tempfile::tempdir().unwrap();

    boardrank(dir.path())
        .args(["key", "between", "b", "a"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Invalid range"));

    boardrank(dir.path())
        .args(["key", "spaced", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn create_nested_records_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path();

    boardrank(dir)
        .args(["create", "Work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created board 1: Work"));
    run_ok(dir, &["create", "1", "Todo"]);
    run_ok(dir, &["n", "1.1", "Write", "docs"]);

    let listing = run_ok(dir, &[]);
    assert!(listing.contains("1. Work"));
    assert!(listing.contains("1.1. Todo"));
    assert!(listing.contains("1.1.1. Write docs"));

    let boards_only = run_ok(dir, &["ls", "--depth", "1"]);
    assert!(!boards_only.contains("Todo"));

    assert!(dir.join(".boardrank").join("data.json").exists());
}

#[test]
fn move_changes_listing_order() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path();
    run_ok(dir, &["create", "Work"]);
    run_ok(dir, &["create", "1", "Todo"]);
    for title in ["alpha", "beta", "gamma"] {
        run_ok(dir, &["create", "1.1", title]);
    }

    run_ok(dir, &["mv", "1.1.3", "--first"]);
    let listing = run_ok(dir, &["list", "1.1"]);
    assert!(position(&listing, "gamma") < position(&listing, "alpha"));

    run_ok(dir, &["move", "1.1.1", "--at", "3"]);
    let listing = run_ok(dir, &["list", "1.1"]);
    assert!(position(&listing, "beta") < position(&listing, "gamma"));
    assert!(position(&listing, "alpha") < position(&listing, "gamma"));
}

#[test]
fn move_into_another_list() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path();
    run_ok(dir, &["create", "Work"]);
    run_ok(dir, &["create", "1", "Todo"]);
    run_ok(dir, &["create", "1", "Done"]);
    run_ok(dir, &["create", "1.1", "ship"]);

    run_ok(dir, &["mv", "1.1.1", "--to", "1.2"]);
    let listing = run_ok(dir, &["list", "1.2"]);
    assert!(listing.contains("1.2.1. ship"));
}

#[test]
fn import_then_reorder() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path();
    let file = dir.join("boards.txt");
    std::fs::write(&file, "first\n\n  second  \nthird\n").unwrap();

    boardrank(dir)
        .args(["import", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 boards"));

    run_ok(dir, &["reorder", "--order", "3,1,2"]);
    let listing = run_ok(dir, &[]);
    assert!(position(&listing, "third") < position(&listing, "first"));
    assert!(position(&listing, "first") < position(&listing, "second"));

    boardrank(dir)
        .args(["reorder", "--order", "1,1,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("listed twice"));
}

#[test]
fn delete_removes_descendants() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path();
    run_ok(dir, &["create", "Work"]);
    run_ok(dir, &["create", "1", "Todo"]);
    run_ok(dir, &["create", "1.1", "task"]);

    boardrank(dir)
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(and 2 nested)"));
    assert_eq!(run_ok(dir, &[]), "No records found.\n");
}

#[test]
fn unknown_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    boardrank(dir.path())
        .args(["delete", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn global_scope_is_separate() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path();
    run_ok(dir, &["-g", "create", "Personal"]);

    assert_eq!(run_ok(dir, &["list"]), "No records found.\n");
    assert!(run_ok(dir, &["list", "--global"]).contains("Personal"));
    assert!(dir.join("global").join("data.json").exists());
}

#[test]
fn doctor_on_clean_store() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path();
    run_ok(dir, &["create", "Work"]);
    boardrank(dir)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("No ordering problems found"));
}

#[test]
fn config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path();

    let defaults = run_ok(dir, &["config"]);
    assert!(defaults.contains("max-key-len = 24"));
    assert!(defaults.contains("auto-rebalance = true"));

    run_ok(dir, &["config", "max-key-len", "6"]);
    assert!(run_ok(dir, &["config", "max-key-len"]).contains("max-key-len = 6"));

    boardrank(dir)
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn init_creates_project_store() {
    let dir = tempfile::tempdir().unwrap();
    boardrank(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized store"));
    assert!(dir.path().join(".boardrank").is_dir());
}
