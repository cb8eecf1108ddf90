use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

fn dirlist() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dirlist"))
}

#[test]
fn shows_help() {
    dirlist()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("メタデータ一覧"));
}

#[test]
fn reports_version() {
    dirlist()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dirlist"));
}

#[test]
fn requires_a_root_argument() {
    dirlist().assert().failure();
}

#[test]
fn rejects_a_plain_file_as_root() {
    let mut workspace = TempWorkspace::new("smoke_file_root");
    let file = workspace.create_file("plain.txt", "data").clone();

    dirlist()
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Selected path is not a directory"));
}

#[test]
fn rejects_a_missing_root() {
    let workspace = TempWorkspace::new("smoke_missing_root");
    let ghost = workspace.path().join("no-such-dir");

    dirlist()
        .arg(&ghost)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Selected path is not a directory"));
}

#[test]
fn banner_goes_to_stderr_and_quiet_silences_it() {
    let mut workspace = TempWorkspace::new("smoke_banner");
    workspace.create_file("a.txt", "x");

    dirlist()
        .arg(workspace.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("dirlist v"));

    dirlist()
        .arg("--quiet")
        .arg(workspace.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("dirlist v").not());
}
