//! Integration tests for chartpdf-table crate.
//!
//! These tests drive the public loading and cleaning path with the shared
//! CSV fixtures.

use chartpdf_common::test_utils::{init_test_logging, table_fixtures};
use chartpdf_table::{Cell, SourceFormat, Table};

#[test]
fn test_sales_series() {
    init_test_logging();

    let table = Table::load("sales.csv", table_fixtures::sales_csv().as_bytes())
        .unwrap()
        .cleaned();
    let series = table.series().unwrap();

    assert_eq!(series.x_name, "month");
    assert_eq!(series.y_name, "sales");
    assert_eq!(series.labels, vec!["Jan", "Feb", "Mar", "Apr", "May"]);
    assert_eq!(series.values, vec![120.0, 95.0, 143.0, 110.0, 160.0]);
    assert!(!series.has_numeric_x());
}

#[test]
fn test_sparse_rows_are_dropped() {
    let mut table = Table::load("sparse.csv", table_fixtures::sparse_csv().as_bytes()).unwrap();
    assert_eq!(table.len(), 4);

    assert_eq!(table.drop_incomplete(), 2);
    let series = table.series().unwrap();
    assert_eq!(series.labels, vec!["North", "East"]);
    assert_eq!(series.values, vec![300.0, 180.0]);
}

#[test]
fn test_numeric_x_detected() {
    let table = Table::load("m.CSV", table_fixtures::measurements_csv().as_bytes()).unwrap();
    let series = table.series().unwrap();
    assert_eq!(series.x_numeric.as_deref(), Some(&[1.0, 2.0, 3.5, 5.0, 7.25][..]));
}

#[test]
fn test_heatmap_columns_from_sales() {
    let table = Table::load("sales.csv", table_fixtures::sales_csv().as_bytes()).unwrap();
    let names: Vec<_> = table
        .numeric_columns()
        .into_iter()
        .map(|column| column.name)
        .collect();
    assert_eq!(names, vec!["sales", "returns"]);
}

#[test]
fn test_textual_values_rejected() {
    let table = Table::load("t.csv", table_fixtures::textual_values_csv().as_bytes()).unwrap();
    let err = table.series().unwrap_err();
    assert!(err.is_client_error());
}

#[test]
fn test_single_column_rejected() {
    let table = Table::load("one.csv", table_fixtures::single_column_csv().as_bytes()).unwrap();
    assert_eq!(table.rows()[0], vec![Cell::Number(1.0)]);
    assert!(table.series().is_err());
}

#[test]
fn test_non_csv_names_use_workbook_reader() {
    assert_eq!(SourceFormat::from_file_name("upload.bin"), SourceFormat::Xlsx);
    let err = Table::load("upload.bin", table_fixtures::sales_csv().as_bytes()).unwrap_err();
    assert!(err.to_string().contains("workbook"));
}

#[test]
fn test_xlsx_workbook_loaded_and_cleaned() {
    let mut table = Table::load("book.xlsx", table_fixtures::sales_xlsx()).unwrap();
    assert_eq!(table.headers(), ["month", "sales"]);
    assert_eq!(table.len(), 3);

    assert_eq!(table.drop_incomplete(), 1);
    let series = table.series().unwrap();
    assert_eq!(series.labels, vec!["Jan", "Mar"]);
    assert_eq!(series.values, vec![10.0, 7.5]);
}

#[test]
fn test_xlsx_read_through_explicit_format() {
    let table = Table::from_spreadsheet(table_fixtures::sales_xlsx(), SourceFormat::Xlsx)
        .unwrap()
        .cleaned();
    assert_eq!(table.rows()[1], vec![Cell::Text("Mar".to_string()), Cell::Number(7.5)]);
}

#[test]
fn test_all_rows_incomplete() {
    let table = Table::load("gaps.csv", table_fixtures::incomplete_csv().as_bytes())
        .unwrap()
        .cleaned();
    assert!(table.is_empty());

    let err = table.series().unwrap_err();
    assert!(err.is_client_error());
    assert!(err.to_string().contains("No complete rows to chart"));
}
