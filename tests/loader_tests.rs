use std::fs;

use serde_json::json;
use visuals_rs::DashboardError;
use visuals_rs::core::{LoadStatus, load_document, load_table};

#[test]
fn missing_table_file_yields_empty_two_column_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    let loaded = load_table(&dir.path().join("data.csv")).expect("load");

    assert_eq!(loaded.status, LoadStatus::MissingOrEmpty);
    assert_eq!(loaded.source_name, "data.csv");
    assert_eq!(loaded.value.columns(), ["Category", "Value"]);
    assert_eq!(loaded.value.len(), 0);
}

#[test]
fn zero_length_table_file_yields_empty_two_column_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("data.csv");
    fs::write(&path, "").expect("write");

    let loaded = load_table(&path).expect("load");
    assert!(!loaded.is_loaded());
    assert_eq!(loaded.value.columns(), ["Category", "Value"]);
    assert!(loaded.value.is_empty());
}

#[test]
fn directory_path_is_treated_as_missing_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    let loaded = load_table(dir.path()).expect("load");
    assert_eq!(loaded.status, LoadStatus::MissingOrEmpty);
}

#[test]
fn table_file_is_parsed_with_header_and_extra_columns() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("data.csv");
    fs::write(&path, "Category,Value,Note\nA,1,x\nA,2,y\nB,3,z\n").expect("write");

    let loaded = load_table(&path).expect("load");
    assert!(loaded.is_loaded());
    assert_eq!(loaded.value.columns(), ["Category", "Value", "Note"]);
    assert_eq!(loaded.value.len(), 3);

    let preview = loaded.value.head(2);
    assert_eq!(preview.total_rows, 3);
    assert_eq!(preview.rows, vec![vec!["A", "1", "x"], vec!["A", "2", "y"]]);
}

#[test]
fn header_only_table_is_loaded_but_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("data.csv");
    fs::write(&path, "Category,Value\n").expect("write");

    let loaded = load_table(&path).expect("load");
    assert!(loaded.is_loaded());
    assert!(loaded.value.is_empty());
}

#[test]
fn table_missing_required_column_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("data.csv");
    fs::write(&path, "Kind,Value\nA,1\n").expect("write");

    let err = load_table(&path).expect_err("must reject missing Category");
    assert!(matches!(err, DashboardError::MalformedTable(_)));
    assert!(format!("{err}").contains("`Category`"));
}

#[test]
fn table_with_ragged_row_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("data.csv");
    fs::write(&path, "Category,Value\nA,1\nB\n").expect("write");

    let err = load_table(&path).expect_err("must reject ragged row");
    assert!(matches!(err, DashboardError::Csv(_)));
}

#[test]
fn missing_document_yields_empty_data_list() {
    let dir = tempfile::tempdir().expect("temp dir");
    let loaded = load_document(&dir.path().join("data.json")).expect("load");

    assert_eq!(loaded.status, LoadStatus::MissingOrEmpty);
    assert_eq!(loaded.source_name, "data.json");
    assert_eq!(loaded.value.as_value(), &json!({ "data": [] }));
}

#[test]
fn zero_length_document_yields_empty_data_list() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("data.json");
    fs::write(&path, "").expect("write");

    let loaded = load_document(&path).expect("load");
    assert!(!loaded.is_loaded());
    assert_eq!(loaded.value.as_value(), &json!({ "data": [] }));
}

#[test]
fn nested_document_is_kept_verbatim() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("data.json");
    let raw = json!({
        "meta": { "source": "survey", "tags": ["a", "b"] },
        "data": [{ "value": "5", "label": "first" }, { "value": 7 }]
    });
    fs::write(&path, raw.to_string()).expect("write");

    let loaded = load_document(&path).expect("load");
    assert!(loaded.is_loaded());
    assert_eq!(loaded.value.as_value(), &raw);
    assert_eq!(loaded.value.records().len(), 2);
}

#[test]
fn invalid_document_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("data.json");
    fs::write(&path, "{ \"data\": [").expect("write");

    let err = load_document(&path).expect_err("must reject broken json");
    assert!(matches!(err, DashboardError::Json(_)));
}
