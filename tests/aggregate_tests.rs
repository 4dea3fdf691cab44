use visuals_rs::core::{
    StructuredDocument, TabularDataset, distinct_categories, filter_by_category, head_values,
    value_counts,
};
use serde_json::json;

fn sample_table() -> TabularDataset {
    TabularDataset::from_pairs([("A", "1"), ("A", "2"), ("B", "3")])
}

#[test]
fn value_counts_groups_rows_by_category() {
    let counts = value_counts(&sample_table());

    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get("A"), Some(2));
    assert_eq!(counts.get("B"), Some(1));
    assert_eq!(counts.get("C"), None);
    assert_eq!(counts.total(), 3);
}

#[test]
fn value_counts_orders_by_count_then_first_occurrence() {
    let table = TabularDataset::from_pairs([
        ("C", "1"),
        ("B", "1"),
        ("A", "1"),
        ("A", "1"),
        ("B", "1"),
    ]);
    let counts = value_counts(&table);
    let labels = counts.labels().collect::<Vec<_>>();
    assert_eq!(labels, vec!["B", "A", "C"]);
}

#[test]
fn value_counts_skips_blank_categories() {
    let table = TabularDataset::from_pairs([("", "1"), ("A", "2")]);
    let counts = value_counts(&table);
    assert_eq!(counts.entries(), [("A".to_owned(), 1)]);
}

#[test]
fn value_counts_of_empty_table_is_empty() {
    assert!(value_counts(&TabularDataset::empty()).is_empty());
}

#[test]
fn distinct_categories_keep_first_occurrence_order() {
    let table = TabularDataset::from_pairs([("B", "1"), ("A", "2"), ("B", "3"), ("C", "4")]);
    assert_eq!(distinct_categories(&table), vec!["B", "A", "C"]);
}

#[test]
fn filter_by_category_keeps_row_order_and_positions() {
    let table = sample_table();
    let rows = filter_by_category(&table, "A");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].position(), 0);
    assert_eq!(rows[1].position(), 1);
    let values = rows.iter().map(|row| row.value()).collect::<Vec<_>>();
    assert_eq!(values, vec![Some(1.0), Some(2.0)]);

    assert!(filter_by_category(&table, "Z").is_empty());
}

#[test]
fn document_values_coerce_failures_to_none() {
    let document = StructuredDocument::new(json!({
        "data": [{ "value": "5" }, { "value": "x" }, { "value": "7" }]
    }));
    let values = document.coerced_values();
    assert_eq!(values, vec![Some(5.0), None, Some(7.0)]);
    assert_eq!(head_values(&values, 2), vec![Some(5.0), None]);
}

#[test]
fn document_records_missing_value_or_not_objects_become_none() {
    let document = StructuredDocument::new(json!({
        "data": [{ "other": 1 }, 3, { "value": null }, { "value": 2.5 }]
    }));
    assert_eq!(document.coerced_values(), vec![None, None, None, Some(2.5)]);
}

#[test]
fn document_without_data_list_has_no_records() {
    assert!(!StructuredDocument::new(json!({ "items": [1] })).has_records());
    assert!(!StructuredDocument::new(json!({ "data": "nope" })).has_records());
    assert!(!StructuredDocument::new(json!([1, 2])).has_records());
    assert!(!StructuredDocument::default().has_records());
}

#[test]
fn head_values_never_overruns() {
    assert_eq!(head_values(&[Some(1.0)], 5), vec![Some(1.0)]);
    assert!(head_values(&[], 3).is_empty());
}
