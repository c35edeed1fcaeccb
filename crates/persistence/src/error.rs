// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors raised by the row stores.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading or writing the backing file failed.
    #[error("Sheet file error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not valid CSV.
    #[error("Sheet CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A cell address outside the sheet was used.
    #[error("Invalid cell address: row {row}, column {column}")]
    InvalidCell {
        /// 1-based row.
        row: u32,
        /// 1-based column.
        column: u32,
    },
}
