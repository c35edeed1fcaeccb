// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::PersistenceError;
use crate::layout::Cell;
use crate::sheet::{MemorySheet, Sheet};

/// A sheet backed by a headerless CSV file.
///
/// The file is loaded once on open and rewritten after every change, so
/// the operator can edit inputs between runs with any spreadsheet tool.
#[derive(Debug)]
pub struct CsvSheet {
    path: PathBuf,
    cells: MemorySheet,
}

impl CsvSheet {
    /// Opens the sheet at `path`, starting empty if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Csv` if the file cannot be read or parsed.
    pub fn open(path: &Path) -> Result<Self, PersistenceError> {
        if !path.exists() {
            info!(path = %path.display(), "Sheet file not found, starting empty");
            return Ok(Self {
                path: path.to_path_buf(),
                cells: MemorySheet::new(),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record: csv::StringRecord = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        info!(path = %path.display(), rows = rows.len(), "Loaded sheet");
        Ok(Self {
            path: path.to_path_buf(),
            cells: MemorySheet::from_rows(rows),
        })
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the backing file from the in-memory cells.
    ///
    /// Rows are padded to a common width so blank rows survive a reload.
    fn flush(&self) -> Result<(), PersistenceError> {
        let rows: Vec<Vec<String>> = self.cells.rows();
        let width: usize = rows.iter().map(Vec::len).max().unwrap_or(0).max(1);

        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        for cells in &rows {
            let mut padded: Vec<&str> = cells.iter().map(String::as_str).collect();
            padded.resize(width, "");
            writer.write_record(&padded)?;
        }
        writer.flush()?;

        debug!(path = %self.path.display(), rows = rows.len(), "Saved sheet");
        Ok(())
    }
}

impl Sheet for CsvSheet {
    fn get(&self, cell: Cell) -> String {
        self.cells.get(cell)
    }

    fn set(&mut self, cell: Cell, value: &str) -> Result<(), PersistenceError> {
        self.cells.set(cell, value)?;
        self.flush()
    }

    fn clear_column(&mut self, column: u32, from_row: u32) -> Result<(), PersistenceError> {
        self.cells.clear_column(column, from_row)?;
        self.flush()
    }

    fn last_row(&self) -> u32 {
        self.cells.last_row()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.cells.rows()
    }
}
