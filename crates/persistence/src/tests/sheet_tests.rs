// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use supply_plan_domain::RowIndex;

use crate::{Cell, Column, MemorySheet, PersistenceError, Sheet};

fn create_test_sheet() -> MemorySheet {
    MemorySheet::from_rows(vec![
        vec![String::new(); 7]
            .into_iter()
            .chain([String::from("Урал")])
            .collect(),
        vec![
            String::from("1"),
            String::from("A"),
            String::from("123"),
            String::from("10"),
            String::from("op"),
        ],
        vec![String::new(), String::new(), String::from("456")],
    ])
}

#[test]
fn test_unwritten_cells_read_empty() {
    let sheet: MemorySheet = MemorySheet::new();
    assert_eq!(sheet.get(Cell { row: 5, column: 5 }), "");
    assert_eq!(sheet.get(Cell { row: 0, column: 1 }), "");
    assert_eq!(sheet.last_row(), 0);
    assert!(sheet.rows().is_empty());
}

#[test]
fn test_planning_area_ends_at_the_debug_column() {
    assert_eq!(Cell::LAST_COLUMN, 9);
    assert_eq!(Cell::DEBUG.column, Cell::LAST_COLUMN);
}

#[test]
fn test_region_cell_is_h1() {
    let sheet: MemorySheet = create_test_sheet();
    assert_eq!(sheet.get(Cell::REGION), "Урал");
}

#[test]
fn test_set_grows_grid() {
    let mut sheet: MemorySheet = MemorySheet::new();
    sheet.set(Cell { row: 3, column: 9 }, "x").unwrap();

    assert_eq!(sheet.get(Cell { row: 3, column: 9 }), "x");
    assert_eq!(sheet.last_row(), 3);
    assert_eq!(sheet.rows().len(), 3);
    assert_eq!(sheet.rows()[2].len(), 9);
}

#[test]
fn test_set_rejects_zero_address() {
    let mut sheet: MemorySheet = MemorySheet::new();
    let result: Result<(), PersistenceError> = sheet.set(Cell { row: 0, column: 2 }, "x");
    assert!(matches!(
        result,
        Err(PersistenceError::InvalidCell { row: 0, column: 2 })
    ));
}

#[test]
fn test_read_and_write_by_column() {
    let mut sheet: MemorySheet = create_test_sheet();
    let row: RowIndex = RowIndex::FIRST_DATA;

    assert_eq!(sheet.read(row, Column::Sku), "123");
    assert_eq!(sheet.read(row, Column::Quantity), "10");

    sheet.write(row, Column::Timeslot, "Selected timeslot: t").unwrap();
    assert_eq!(
        sheet.get(Cell { row: 2, column: 9 }),
        "Selected timeslot: t"
    );
}

#[test]
fn test_clear_column_keeps_header_and_inputs() {
    let mut sheet: MemorySheet = create_test_sheet();
    sheet.set(Cell { row: 1, column: 1 }, "Cluster ID").unwrap();

    sheet.clear_column(Column::ClusterId.index(), 2).unwrap();
    sheet.clear_column(Column::OperationId.index(), 2).unwrap();

    assert_eq!(sheet.get(Cell { row: 1, column: 1 }), "Cluster ID");
    assert_eq!(sheet.read(RowIndex::FIRST_DATA, Column::ClusterId), "");
    assert_eq!(sheet.read(RowIndex::FIRST_DATA, Column::OperationId), "");
    assert_eq!(sheet.read(RowIndex::FIRST_DATA, Column::ClusterName), "A");
    assert_eq!(sheet.read(RowIndex::new(3), Column::Sku), "456");
}

#[test]
fn test_last_row_ignores_trailing_blank_rows() {
    let mut sheet: MemorySheet = create_test_sheet();
    sheet.set(Cell { row: 6, column: 1 }, "").unwrap();
    assert_eq!(sheet.last_row(), 3);
}

#[test]
fn test_output_columns_and_headers() {
    let indices: Vec<u32> = Column::OUTPUTS.iter().map(|c| c.index()).collect();
    assert_eq!(indices, vec![1, 2, 5, 6, 7]);
    assert!(Column::OUTPUTS.iter().all(|c| c.header().is_some()));
    assert_eq!(Column::Sku.header(), None);
    assert_eq!(Column::Timeslot.index(), 9);
    assert_eq!(Cell::DEBUG, Cell { row: 1, column: 9 });
}
