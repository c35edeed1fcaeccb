// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;
use supply_plan_domain::RowIndex;
use tempfile::TempDir;

use crate::{Cell, Column, CsvSheet, PersistenceError, Sheet};

#[test]
fn test_open_missing_file_starts_empty() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let sheet: CsvSheet = CsvSheet::open(&dir.path().join("plan.csv")).unwrap();
    assert_eq!(sheet.last_row(), 0);
}

#[test]
fn test_open_reads_ragged_rows() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("plan.csv");
    std::fs::write(&path, ",,,,,,,Урал\n,,123,10\n").unwrap();

    let sheet: CsvSheet = CsvSheet::open(&path).unwrap();

    assert_eq!(sheet.get(Cell::REGION), "Урал");
    assert_eq!(sheet.read(RowIndex::FIRST_DATA, Column::Sku), "123");
    assert_eq!(sheet.read(RowIndex::FIRST_DATA, Column::Quantity), "10");
}

#[test]
fn test_changes_survive_reload() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("plan.csv");

    let mut sheet: CsvSheet = CsvSheet::open(&path).unwrap();
    sheet.set(Cell::REGION, "Казань").unwrap();
    sheet
        .write(RowIndex::new(4), Column::OperationId, "op, with comma")
        .unwrap();

    let reloaded: CsvSheet = CsvSheet::open(&path).unwrap();
    assert_eq!(reloaded.get(Cell::REGION), "Казань");
    assert_eq!(
        reloaded.read(RowIndex::new(4), Column::OperationId),
        "op, with comma"
    );
    assert_eq!(reloaded.last_row(), 4);
    assert_eq!(reloaded.read(RowIndex::new(3), Column::OperationId), "");
}

#[test]
fn test_clear_column_is_persisted() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("plan.csv");
    std::fs::write(&path, "h1,h2\nv1,v2\nw1,w2\n").unwrap();

    let mut sheet: CsvSheet = CsvSheet::open(&path).unwrap();
    sheet.clear_column(1, 2).unwrap();

    let reloaded: CsvSheet = CsvSheet::open(&path).unwrap();
    assert_eq!(
        reloaded.rows(),
        vec![
            vec![String::from("h1"), String::from("h2")],
            vec![String::new(), String::from("v2")],
            vec![String::new(), String::from("w2")],
        ]
    );
}

#[test]
fn test_invalid_cell_is_not_written() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("plan.csv");

    let mut sheet: CsvSheet = CsvSheet::open(&path).unwrap();
    let result: Result<(), PersistenceError> = sheet.set(Cell { row: 1, column: 0 }, "x");

    assert!(matches!(result, Err(PersistenceError::InvalidCell { .. })));
    assert!(!path.exists());
    assert_eq!(sheet.path(), path.as_path());
}
