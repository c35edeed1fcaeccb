// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row-oriented cell store the workflow reads inputs from and writes
//! progress to.

use supply_plan_domain::RowIndex;

use crate::error::PersistenceError;
use crate::layout::{Cell, Column};

/// A grid of text cells addressed by 1-based row and column.
///
/// Reads of cells that were never written return an empty string.
pub trait Sheet: Send + Sync {
    /// Returns the text of `cell`.
    fn get(&self, cell: Cell) -> String;

    /// Writes `value` into `cell`, growing the grid as needed.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidCell` for a zero row or column, or
    /// a storage error if the write cannot be persisted.
    fn set(&mut self, cell: Cell, value: &str) -> Result<(), PersistenceError>;

    /// Empties `column` from `from_row` down to the last row.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the change cannot be persisted.
    fn clear_column(&mut self, column: u32, from_row: u32) -> Result<(), PersistenceError>;

    /// Returns the last row holding any non-empty cell, or `0` if none.
    fn last_row(&self) -> u32;

    /// Returns a copy of every row, trimmed to the last non-empty row.
    fn rows(&self) -> Vec<Vec<String>>;

    /// Reads a data-row cell.
    fn read(&self, row: RowIndex, column: Column) -> String {
        self.get(Cell {
            row: row.value(),
            column: column.index(),
        })
    }

    /// Writes a data-row cell.
    ///
    /// # Errors
    ///
    /// See [`Sheet::set`].
    fn write(&mut self, row: RowIndex, column: Column, value: &str) -> Result<(), PersistenceError> {
        self.set(
            Cell {
                row: row.value(),
                column: column.index(),
            },
            value,
        )
    }
}

/// A sheet held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySheet {
    grid: Vec<Vec<String>>,
}

impl MemorySheet {
    /// Creates an empty sheet.
    #[must_use]
    pub const fn new() -> Self {
        Self { grid: Vec::new() }
    }

    /// Creates a sheet whose first rows hold `rows`.
    #[must_use]
    pub const fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { grid: rows }
    }

    fn slot(cell: Cell) -> Result<(usize, usize), PersistenceError> {
        let invalid = || PersistenceError::InvalidCell {
            row: cell.row,
            column: cell.column,
        };
        let row: usize = usize::try_from(cell.row.checked_sub(1).ok_or_else(invalid)?)
            .map_err(|_| invalid())?;
        let column: usize = usize::try_from(cell.column.checked_sub(1).ok_or_else(invalid)?)
            .map_err(|_| invalid())?;
        Ok((row, column))
    }
}

impl Sheet for MemorySheet {
    fn get(&self, cell: Cell) -> String {
        Self::slot(cell)
            .ok()
            .and_then(|(row, column)| self.grid.get(row)?.get(column).cloned())
            .unwrap_or_default()
    }

    fn set(&mut self, cell: Cell, value: &str) -> Result<(), PersistenceError> {
        let (row, column): (usize, usize) = Self::slot(cell)?;
        if self.grid.len() <= row {
            self.grid.resize_with(row + 1, Vec::new);
        }
        let cells: &mut Vec<String> = &mut self.grid[row];
        if cells.len() <= column {
            cells.resize_with(column + 1, String::new);
        }
        cells[column] = value.to_string();
        Ok(())
    }

    fn clear_column(&mut self, column: u32, from_row: u32) -> Result<(), PersistenceError> {
        let (first, index): (usize, usize) = Self::slot(Cell {
            row: from_row,
            column,
        })?;
        for cells in self.grid.iter_mut().skip(first) {
            if let Some(value) = cells.get_mut(index) {
                value.clear();
            }
        }
        Ok(())
    }

    fn last_row(&self) -> u32 {
        self.grid
            .iter()
            .rposition(|cells| cells.iter().any(|value| !value.is_empty()))
            .map_or(0, |index| u32::try_from(index + 1).unwrap_or(u32::MAX))
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let count: usize = usize::try_from(self.last_row()).unwrap_or(usize::MAX);
        self.grid.iter().take(count).cloned().collect()
    }
}
