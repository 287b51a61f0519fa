// tests/integration/end_to_end.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use decompose_inp::{app, cli::Args, config::Config};
use decompose_inp_infra::{InMemoryModel, ModelDocument};
use decompose_inp_shared_kernel::{EntityId, EntityKind};

use crate::common::{ModelBuilder, TableBuilder, TempWorkspace};

fn config(model: &Path, table: &Path, extra: &[&str]) -> Config {
    let mut argv = vec![
        "decompose-inp".to_string(),
        model.display().to_string(),
        "--table".to_string(),
        table.display().to_string(),
        "--no-progress".to_string(),
    ];
    argv.extend(extra.iter().map(|s| (*s).to_string()));
    Config::from_args(Args::try_parse_from(argv).unwrap()).unwrap()
}

fn ids(list: &[EntityId]) -> Vec<i64> {
    list.iter().map(|id| id.value()).collect()
}

fn body_chassis(ws: &TempWorkspace) -> (PathBuf, PathBuf) {
    let model = ModelBuilder::new()
        .properties(&[101, 150, 999, 205, 210])
        .shared_element(7, &[150, 205])
        .write_json(ws, "model.json");
    let table = TableBuilder::new().range("Body", 100, 199).range("Chassis", 200, 299).write(ws, "numbering.csv");
    (model, table)
}

#[test]
fn model_is_split_into_includes() {
    let ws = TempWorkspace::new("e2e-split");
    let (model, table) = body_chassis(&ws);

    let report = app::run(&config(&model, &table, &[])).unwrap();
    assert_eq!(report.groups.len(), 2);
    assert_eq!(report.created.len(), 2);
    assert_eq!(report.unmatched.len(), 1);
    assert_eq!(report.unmatched[0].id, EntityId::new(999));

    let saved = InMemoryModel::load(&model).unwrap();
    let include = EntityKind::include();
    let body = saved.group("Body", &include).unwrap();
    assert_eq!(body.id, Some(EntityId::new(100)));
    assert_eq!(ids(&body.properties), vec![101, 150]);

    let chassis = saved.group("Chassis", &include).unwrap();
    assert_eq!(chassis.id, Some(EntityId::new(200)));
    assert_eq!(ids(&chassis.properties), vec![205, 210]);
    // Element 7 references both ranges and belongs to both includes.
    assert_eq!(ids(&chassis.elements), vec![2050, 2100, 7]);
    assert_eq!(ids(&body.elements), vec![1010, 1500, 7]);

    for group in &report.groups {
        let record = saved.group(&group.name, &include).unwrap();
        let reported: Vec<EntityId> = group.elements.iter().map(|e| e.id).collect();
        assert_eq!(record.elements, reported, "summary and saved model disagree for {}", group.name);
    }

    let grouped: Vec<_> = saved.groups().iter().flat_map(|g| ids(&g.properties)).collect();
    assert!(!grouped.contains(&999));
}

#[test]
fn second_run_reuses_existing_includes() {
    let ws = TempWorkspace::new("e2e-rerun");
    let (model, table) = body_chassis(&ws);

    app::run(&config(&model, &table, &[])).unwrap();
    let first: ModelDocument = serde_json::from_str(&fs::read_to_string(&model).unwrap()).unwrap();

    let report = app::run(&config(&model, &table, &[])).unwrap();
    assert!(report.created.is_empty());
    let second: ModelDocument = serde_json::from_str(&fs::read_to_string(&model).unwrap()).unwrap();
    assert_eq!(first.groups, second.groups);
}

#[test]
fn group_of_another_kind_is_not_reused() {
    let ws = TempWorkspace::new("e2e-kind");
    let model = ModelBuilder::new().properties(&[101]).group("Body", "SET", Some(100)).write_json(&ws, "model.json");
    let table = TableBuilder::new().range("Body", 100, 199).write(&ws, "numbering.csv");

    let report = app::run(&config(&model, &table, &[])).unwrap();
    assert_eq!(report.created.len(), 1);

    let saved = InMemoryModel::load(&model).unwrap();
    assert!(saved.group("Body", &EntityKind::new("SET")).unwrap().properties.is_empty());
    assert_eq!(ids(&saved.group("Body", &EntityKind::include()).unwrap().properties), vec![101]);
}

#[test]
fn drop_policy_leaves_the_final_run_out() {
    let ws = TempWorkspace::new("e2e-drop");
    let (model, table) = body_chassis(&ws);
    let output = ws.path().join("out.json");
    let output_arg = output.display().to_string();

    let report = app::run(&config(&model, &table, &["--trailing-run", "drop", "-o", &output_arg])).unwrap();
    assert_eq!(report.dropped.len(), 2);

    let saved = InMemoryModel::load(&output).unwrap();
    assert!(saved.group("Chassis", &EntityKind::include()).is_none());
    assert!(saved.group("Body", &EntityKind::include()).is_some());
}

#[test]
fn malformed_rows_do_not_stop_the_run() {
    let ws = TempWorkspace::new("e2e-malformed");
    let model = ModelBuilder::new().properties(&[101, 205]).write_json(&ws, "model.json");
    let table = TableBuilder::new().raw("Broken", "abc", "").range("Chassis", 200, 299).write(&ws, "numbering.csv");

    let report = app::run(&config(&model, &table, &[])).unwrap();
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.unmatched.len(), 1);
    assert_eq!(report.unmatched[0].id, EntityId::new(101));
}

#[test]
fn failed_run_leaves_the_model_untouched() {
    let ws = TempWorkspace::new("e2e-failure");
    let model = ModelBuilder::new().properties(&[101, 205]).write_json(&ws, "model.json");
    // Both includes would get id 100.
    let table = TableBuilder::new().range("Body", 100, 199).range("Chassis", 100, 299).write(&ws, "numbering.csv");
    let before = fs::read_to_string(&model).unwrap();

    let err = app::run(&config(&model, &table, &[])).unwrap_err();
    let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
    assert!(chain.iter().any(|c| c.contains("already used by INCLUDE 'Body'")), "{chain:?}");
    assert_eq!(fs::read_to_string(&model).unwrap(), before);
}

#[test]
fn dry_run_writes_nothing() {
    let ws = TempWorkspace::new("e2e-dry");
    let (model, table) = body_chassis(&ws);
    let before = fs::read_to_string(&model).unwrap();

    let report = app::run(&config(&model, &table, &["--dry-run"])).unwrap();
    assert_eq!(report.groups.len(), 2);
    assert_eq!(fs::read_to_string(&model).unwrap(), before);
}

#[test]
fn yaml_model_and_table_round_trip() {
    let ws = TempWorkspace::new("e2e-yaml");
    let document = ModelBuilder::new().properties(&[101, 205]).build();
    let model = ws.write_file("model.yaml", &serde_yaml::to_string(&document).unwrap());
    let table = ws.write_file(
        "numbering.yaml",
        "- name: Body\n  min: 100\n  max: 199\n- name: Chassis\n  min: \"200\"\n  max: \"299\"\n",
    );

    let report = app::run(&config(&model, &table, &[])).unwrap();
    assert_eq!(report.groups.len(), 2);

    let saved = InMemoryModel::load(&model).unwrap();
    assert_eq!(saved.groups().len(), 2);
    assert_eq!(saved.document().properties, document.properties);
}
