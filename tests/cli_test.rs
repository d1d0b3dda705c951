/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary with `HOME` pointed at a temporary directory.
/// None of them reach the interactive picker.
mod common;

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use common::{FinderHomeBuilder, realistic_home};
use predicates::prelude::*;

fn findit(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_findit"));
    cmd.env("HOME", home).env_remove("FINDIT_LOG");
    cmd
}

#[test]
fn test_cli_no_command_shows_help_message() {
    let home = FinderHomeBuilder::new().build();
    findit(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    let home = FinderHomeBuilder::new().build();
    findit(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Index local projects"))
        .stdout(predicate::str::contains("find"))
        .stdout(predicate::str::contains("workspace"));
}

#[test]
fn test_cli_version_flag() {
    let home = FinderHomeBuilder::new().build();
    findit(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    let home = FinderHomeBuilder::new().build();
    findit(home.path()).arg("invalid-command").assert().failure().code(2);
}

#[test]
fn test_cli_index_without_config() {
    let home = FinderHomeBuilder::new().build();
    findit(home.path())
        .arg("index")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error: Error loading config"))
        .stderr(predicate::str::contains("Run 'findit config' to set the config"));
}

#[test]
fn test_cli_config_with_root() {
    let home = FinderHomeBuilder::new().build();

    findit(home.path())
        .args(["config", "--root", "code"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config saved"));

    let config = fs::read_to_string(home.path().join(".project-finder/config.json")).unwrap();
    assert!(config.contains("\"rootDir\": \"code\""));
}

#[test]
fn test_cli_config_already_exists() {
    let home = FinderHomeBuilder::new().with_config("Desktop").build();

    findit(home.path())
        .args(["config", "--root", "Documents"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config already exists"));

    let config = fs::read_to_string(home.path().join(".project-finder/config.json")).unwrap();
    assert!(config.contains("Desktop"));
}

#[test]
fn test_cli_index_writes_projects_snapshot() {
    let home = realistic_home();

    findit(home.path())
        .arg("index")
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 7 projects"));

    let snapshot =
        fs::read_to_string(home.path().join(".project-finder/projects.json")).unwrap();
    assert!(snapshot.contains("\"isDir\": true"));
    assert!(!snapshot.contains("node_modules"));
    assert!(!snapshot.contains(".venv"));
}

#[test]
fn test_cli_index_missing_root() {
    let home = FinderHomeBuilder::new().with_raw_config(r#"{"rootDir": "NoSuchDir"}"#).build();

    findit(home.path()).arg("index").assert().code(5).stderr(predicate::str::contains("NoSuchDir"));
    assert!(!home.path().join(".project-finder/projects.json").exists());
}

#[test]
fn test_cli_find_without_snapshot() {
    let home = FinderHomeBuilder::new().with_config("Desktop").build();

    findit(home.path())
        .args(["find", "alpha"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Try running 'findit index' first"));
}

#[test]
fn test_cli_find_with_empty_snapshot() {
    let home = FinderHomeBuilder::new()
        .with_config("Desktop")
        .with_snapshot("projects.json", "")
        .build();

    findit(home.path()).args(["find", "alpha"]).assert().code(4);
}

#[test]
fn test_cli_find_with_corrupt_snapshot() {
    let home = FinderHomeBuilder::new()
        .with_config("Desktop")
        .with_snapshot("projects.json", "[{\"name\": ")
        .build();

    findit(home.path())
        .args(["find", "alpha"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("malformed JSON"));
}

#[test]
fn test_cli_find_no_matches() {
    let home = realistic_home();
    findit(home.path()).arg("index").assert().success();

    findit(home.path())
        .args(["find", "zzz"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No projects found"));
}

#[test]
fn test_cli_find_code_and_tmux_conflict() {
    let home = realistic_home();
    findit(home.path()).args(["find", "alpha", "-c", "-t"]).assert().failure().code(2);
}

#[test]
fn test_cli_find_workspace_conflicts_with_query() {
    let home = realistic_home();
    findit(home.path()).args(["find", "alpha", "-w", "client"]).assert().failure().code(2);
}

#[test]
fn test_cli_workspace_index_and_find() {
    let home = realistic_home();

    findit(home.path())
        .args(["workspace", "index"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 2 workspaces"));

    findit(home.path())
        .args(["find", "-w", "zzz"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No workspaces found"));
}

#[test]
fn test_cli_workspace_find_without_snapshot() {
    let home = FinderHomeBuilder::new().with_config("Desktop").build();

    findit(home.path())
        .args(["workspace", "find", "client"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Try running 'findit workspace index' first"));
}

#[test]
fn test_cli_workspace_init() {
    let home = FinderHomeBuilder::new().with_config("Desktop").build();

    findit(home.path())
        .args(["workspace", "init", "client"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created workspace: ~/Desktop/workspaces/client.code-workspace",
        ));

    let file = home.path().join("Desktop/workspaces/client.code-workspace");
    let content: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(file).unwrap()).unwrap();
    assert_eq!(content, serde_json::json!({"folders": [], "settings": {}}));

    findit(home.path())
        .args(["workspace", "init", "client"])
        .assert()
        .code(9)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_cli_workspace_init_invalid_name() {
    let home = FinderHomeBuilder::new().with_config("Desktop").build();

    findit(home.path()).args(["workspace", "init", "../escape"]).assert().code(2);
    findit(home.path()).args(["workspace", "init", "a/b"]).assert().code(2);
    assert!(!home.path().join("Desktop/workspaces").exists());
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let home = realistic_home();

    findit(home.path())
        .args(["index", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG").or(predicate::str::contains("INFO")));
}
