use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

fn dirlist() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dirlist"))
}

#[test]
fn table_output_prints_headers_and_summary() {
    let workspace = TempWorkspace::new("fmt_table").with_mixed_entries();

    let assert = dirlist().arg(workspace.path()).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    for header in ["Type", "Path", "Creation Date", "Modification Date", "Size", "Hash (SHA-256)"]
    {
        assert!(stdout.contains(header), "missing column header {header}");
    }
    assert!(stdout.contains("---"), "summary is separated from the listing");
    assert!(stdout.contains("4 files, 1 folders (5 entries)"));
}

#[test]
fn csv_quotes_only_the_path_column() {
    let mut workspace = TempWorkspace::new("fmt_csv");
    workspace.create_file("we, the files.txt", "x");

    let assert =
        dirlist().args(["--format", "csv"]).arg(workspace.path()).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("type,path,created,modified,size,hash"));
    let row = lines.next().expect("one data row");
    assert!(row.starts_with("Document,\""), "path cell is quoted: {row}");
    assert!(row.contains("we, the files.txt"));
}

#[test]
fn tsv_separates_with_tabs_and_never_quotes() {
    let mut workspace = TempWorkspace::new("fmt_tsv");
    workspace.create_file("we, the files.txt", "x");

    let assert =
        dirlist().args(["--format", "tsv"]).arg(workspace.path()).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(stdout.starts_with("type\tpath\tcreated\tmodified\tsize\thash\n"));
    assert!(stdout.contains("we, the files.txt\t"), "comma-bearing path stays unquoted");
    assert!(!stdout.contains('"'));
}

#[test]
fn json_document_carries_version_entries_and_summary() {
    let workspace = TempWorkspace::new("fmt_json").with_mixed_entries();

    let assert =
        dirlist().args(["--format", "json"]).arg(workspace.path()).assert().success();
    let value: Value = serde_json::from_slice(&assert.get_output().stdout).expect("valid json");

    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(value["entries"].as_array().unwrap().len(), 5);
    assert_eq!(value["summary"]["files"], 4);
    assert_eq!(value["summary"]["folders"], 1);
    assert_eq!(value["summary"]["entries"], 5);
}

#[test]
fn output_flag_writes_the_report_to_a_file() {
    let mut workspace = TempWorkspace::new("fmt_output");
    workspace.create_file("data/a.txt", "hello");
    let root = workspace.path().join("data");
    let report = workspace.path().join("report.csv");

    dirlist()
        .args(["--format", "csv", "--output"])
        .arg(&report)
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&report).expect("report file written");
    assert!(written.starts_with("type,path,created,modified,size,hash"));
    assert!(written.contains("a.txt"));
}

#[test]
fn custom_types_table_overrides_categories() {
    let mut workspace = TempWorkspace::new("fmt_types");
    workspace.create_file("data/sample.qqq", "payload");
    let table = workspace.create_file("types.json", r#"{"Custom": [".qqq"]}"#).clone();

    let assert = dirlist()
        .args(["--format", "json", "--types"])
        .arg(&table)
        .arg(workspace.path().join("data"))
        .assert()
        .success();
    let value: Value = serde_json::from_slice(&assert.get_output().stdout).expect("valid json");

    assert_eq!(value["entries"][0]["type"], "Custom");
}
