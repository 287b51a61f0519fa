// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{ModelBuilder, TableBuilder, TempWorkspace};

fn decompose_inp() -> Command {
    Command::new(env!("CARGO_BIN_EXE_decompose-inp"))
}

#[test]
fn help_shows_usage() {
    decompose_inp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--trailing-run"));
}

#[test]
fn version_is_printed() {
    decompose_inp().arg("--version").assert().success().stdout(predicate::str::contains("decompose-inp"));
}

#[test]
fn json_summary_lists_created_includes() {
    let ws = TempWorkspace::new("cli-json");
    let model = ModelBuilder::new().properties(&[101, 205, 999]).write_json(&ws, "model.json");
    let table = TableBuilder::new().range("Body", 100, 199).range("Chassis", 200, 299).write(&ws, "numbering.csv");

    let output = decompose_inp()
        .arg(&model)
        .arg("--table")
        .arg(&table)
        .args(["--summary", "json", "--no-progress"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["created"], serde_json::json!(["Body", "Chassis"]));
    assert_eq!(summary["total_properties"], 3);
    assert_eq!(summary["unmatched"][0]["id"], 999);
}

#[test]
fn text_summary_is_the_default() {
    let ws = TempWorkspace::new("cli-text");
    let model = ModelBuilder::new().properties(&[101]).write_json(&ws, "model.json");
    let table = TableBuilder::new().range("Body", 100, 199).write(&ws, "numbering.csv");

    decompose_inp()
        .arg(&model)
        .arg("-t")
        .arg(&table)
        .arg("--no-progress")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 1 properties grouped into 1 includes"));
}

#[test]
fn config_file_supplies_the_table() {
    let ws = TempWorkspace::new("cli-config");
    let model = ModelBuilder::new().properties(&[101]).write_json(&ws, "model.json");
    ws.write_file("tables/numbering.txt", "Body,100,199\n");
    let config = ws.write_file(
        "decompose.yaml",
        "table: tables/numbering.txt\nlayout:\n  delimiter: ','\n  min_column: 1\n  max_column: 2\nprogress: false\n",
    );

    decompose_inp().arg(&model).arg("--config").arg(&config).args(["--summary", "none"]).assert().success();
    assert!(ws.read_file("model.json").contains("\"INCLUDE\""));
}

#[test]
fn missing_model_is_critical() {
    let ws = TempWorkspace::new("cli-missing");
    let table = TableBuilder::new().range("Body", 100, 199).write(&ws, "numbering.csv");

    decompose_inp()
        .arg(ws.path().join("absent.json"))
        .arg("--table")
        .arg(&table)
        .assert()
        .failure()
        .stderr(predicate::str::contains("critical:"))
        .stderr(predicate::str::contains("failed to load model"));
}

#[test]
fn unsupported_model_extension_is_rejected() {
    let ws = TempWorkspace::new("cli-ext");
    let model = ws.write_file("model.inp", "*NODE\n");
    let table = TableBuilder::new().range("Body", 100, 199).write(&ws, "numbering.csv");

    decompose_inp()
        .arg(&model)
        .arg("--table")
        .arg(&table)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported model format"));
}

#[test]
fn dry_run_keeps_the_model() {
    let ws = TempWorkspace::new("cli-dry");
    let model = ModelBuilder::new().properties(&[101]).write_json(&ws, "model.json");
    let table = TableBuilder::new().range("Body", 100, 199).write(&ws, "numbering.csv");
    let before = ws.read_file("model.json");

    decompose_inp()
        .arg(&model)
        .arg("--table")
        .arg(&table)
        .args(["--dry-run", "--no-progress", "--summary", "none"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert_eq!(ws.read_file("model.json"), before);
}
