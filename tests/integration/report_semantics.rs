use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

fn dirlist() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dirlist"))
}

fn run_json(args: &[&str], root: &Path) -> Value {
    let assert = dirlist().args(args).args(["--format", "json"]).arg(root).assert().success();
    serde_json::from_slice(&assert.get_output().stdout).expect("valid json")
}

fn entry_named<'a>(value: &'a Value, suffix: &str) -> &'a Value {
    value["entries"]
        .as_array()
        .expect("entries array")
        .iter()
        .find(|entry| entry["path"].as_str().is_some_and(|p| p.ends_with(suffix)))
        .unwrap_or_else(|| panic!("no entry ending with {suffix}"))
}

#[test]
fn flat_directories_show_dash_dates_and_blank_hash() {
    let mut workspace = TempWorkspace::new("sem_flat");
    workspace.create_file("a.txt", "hello");
    workspace.create_dir("sub");

    let value = run_json(&[], workspace.path());

    let folder = entry_named(&value, "sub");
    assert_eq!(folder["type"], "Folder");
    assert_eq!(folder["created"], "-");
    assert_eq!(folder["modified"], "-");
    assert_eq!(folder["size"], "-");
    assert_eq!(folder["hash"], "", "hash column stays blank without --hash");

    let file = entry_named(&value, "a.txt");
    assert_eq!(file["type"], "Document");
    assert_eq!(file["hash"], "-", "files without --hash show a dash");
    assert_ne!(file["created"], "-", "files carry real dates");
    assert_ne!(file["modified"], "-");
    assert_eq!(file["size"], "5.0 Bytes");
}

#[test]
fn hash_flag_digests_files_and_dashes_folders() {
    let mut workspace = TempWorkspace::new("sem_hash");
    workspace.create_file("empty.bin", "");
    workspace.create_dir("sub");

    let value = run_json(&["--hash"], workspace.path());

    assert_eq!(entry_named(&value, "empty.bin")["hash"], EMPTY_SHA256);
    assert_eq!(entry_named(&value, "sub")["hash"], "-", "folders show a dash when hashing");
}

#[test]
fn recursive_listing_dates_directories_and_descends() {
    let mut workspace = TempWorkspace::new("sem_recursive");
    workspace.create_file("sub/inner.txt", "nested");

    let value = run_json(&["--recursive"], workspace.path());

    let folder = entry_named(&value, "sub");
    assert_eq!(folder["type"], "Folder");
    assert_ne!(folder["created"], "-", "recursive folders carry real dates");
    assert_ne!(folder["modified"], "-");
    assert_eq!(folder["size"], "-", "folders never report a size");

    let nested = entry_named(&value, "inner.txt");
    assert_eq!(nested["type"], "Document");
}

#[test]
fn flat_listing_stays_at_the_top_level() {
    let mut workspace = TempWorkspace::new("sem_flat_only");
    workspace.create_file("sub/inner.txt", "nested");

    let value = run_json(&[], workspace.path());
    let entries = value["entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 1, "only the immediate child is listed");
    assert_eq!(entries[0]["type"], "Folder");
}

#[test]
fn extensionless_files_land_in_the_folder_category() {
    let mut workspace = TempWorkspace::new("sem_noext");
    workspace.create_file("Makefile", "all:\n");

    let value = run_json(&[], workspace.path());
    let entry = entry_named(&value, "Makefile");
    assert_eq!(entry["type"], "Folder", "empty extension maps to the first table rule");
    assert_ne!(entry["size"], "-", "it is still a file with a real size");
}

#[test]
fn unknown_extensions_fall_back_to_unknown() {
    let mut workspace = TempWorkspace::new("sem_unknown");
    workspace.create_file("mystery.zzz", "???");

    let value = run_json(&[], workspace.path());
    assert_eq!(entry_named(&value, "mystery.zzz")["type"], "Unknown");
}

#[test]
fn sort_orders_records_by_the_requested_key() {
    let mut workspace = TempWorkspace::new("sem_sort");
    workspace.create_file("big.bin", &"x".repeat(2048));
    workspace.create_file("small.bin", "x");

    let value = run_json(&["--sort", "size:desc"], workspace.path());
    let entries = value["entries"].as_array().expect("entries array");
    assert!(entries[0]["path"].as_str().unwrap().ends_with("big.bin"));
    assert!(entries[1]["path"].as_str().unwrap().ends_with("small.bin"));
    assert_eq!(entries[0]["size"], "2.0 KB");
}

#[test]
fn sorted_runs_are_byte_identical() {
    let workspace = TempWorkspace::new("sem_idempotent").with_mixed_entries();

    let first = dirlist()
        .args(["--format", "json", "--sort", "path"])
        .arg(workspace.path())
        .assert()
        .success();
    let second = dirlist()
        .args(["--format", "json", "--sort", "path"])
        .arg(workspace.path())
        .assert()
        .success();

    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}

#[cfg(unix)]
#[test]
fn dangling_symlinks_are_dropped_and_reported_with_keep_going() {
    let mut workspace = TempWorkspace::new("sem_dangling");
    workspace.create_file("real.txt", "x");
    std::os::unix::fs::symlink(workspace.path().join("ghost"), workspace.path().join("dangling"))
        .expect("create dangling symlink");

    let value = run_json(&[], workspace.path());
    assert_eq!(value["entries"].as_array().unwrap().len(), 1, "the dangling link is dropped");
    assert!(value.get("skipped").is_none());

    let assert = dirlist()
        .args(["--format", "json", "--keep-going"])
        .arg(workspace.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("[warn]"));
    let kept: Value = serde_json::from_slice(&assert.get_output().stdout).expect("valid json");
    assert_eq!(kept["skipped"].as_array().unwrap().len(), 1);
}
