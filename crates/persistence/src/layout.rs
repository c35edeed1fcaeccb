// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Column and cell positions of the planning sheet.
//!
//! All positions are 1-based, row 1 holds the headers, the region cell
//! and the debug cell. Data rows start at row 2.

/// A column of the data rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// A: cluster id written by the workflow.
    ClusterId,
    /// B: cluster name written by the workflow.
    ClusterName,
    /// C: SKU entered by the operator.
    Sku,
    /// D: quantity entered by the operator.
    Quantity,
    /// E: operation id, or the row's error message.
    OperationId,
    /// F: warehouse selection status.
    WarehouseStatus,
    /// G: chosen warehouse id, or a continuation error.
    WarehouseId,
    /// I: the chosen timeslot.
    Timeslot,
}

impl Column {
    /// Columns cleared at the start of every run.
    pub const OUTPUTS: [Self; 5] = [
        Self::ClusterId,
        Self::ClusterName,
        Self::OperationId,
        Self::WarehouseStatus,
        Self::WarehouseId,
    ];

    /// Returns the 1-based column index.
    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Self::ClusterId => 1,
            Self::ClusterName => 2,
            Self::Sku => 3,
            Self::Quantity => 4,
            Self::OperationId => 5,
            Self::WarehouseStatus => 6,
            Self::WarehouseId => 7,
            Self::Timeslot => 9,
        }
    }

    /// Returns the header the workflow writes above this column, if any.
    #[must_use]
    pub const fn header(self) -> Option<&'static str> {
        match self {
            Self::ClusterId => Some("Cluster ID"),
            Self::ClusterName => Some("Cluster Name"),
            Self::OperationId => Some("Operation ID"),
            Self::WarehouseStatus => Some("Warehouse Name"),
            Self::WarehouseId => Some("Warehouse ID"),
            Self::Sku | Self::Quantity | Self::Timeslot => None,
        }
    }
}

/// A single addressed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// 1-based row.
    pub row: u32,
    /// 1-based column.
    pub column: u32,
}

impl Cell {
    /// Last column of the planning area.
    pub const LAST_COLUMN: u32 = Column::Timeslot.index();

    /// Highest row the operator may edit.
    pub const MAX_ROW: u32 = 10_000;

    /// `H1`: the region the operator plans for.
    pub const REGION: Self = Self { row: 1, column: 8 };

    /// `I1`: raw output of the last timeslot lookup.
    pub const DEBUG: Self = Self { row: 1, column: 9 };
}
