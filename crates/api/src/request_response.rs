// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};
use supply_plan_domain::{
    ClusterId, DraftId, OperationId, RowIndex, TimeslotOption, WarehouseId, WarehouseOption,
};
use supply_plan_persistence::SelectionToken;

/// A warehouse offered to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseChoice {
    /// The warehouse id; `None` when the API omitted it, which makes the
    /// entry unselectable.
    pub id: Option<WarehouseId>,
    /// The warehouse name or its placeholder.
    pub name: String,
    /// `"<name> (ID: <id>)"`.
    pub label: String,
}

impl From<&WarehouseOption> for WarehouseChoice {
    fn from(option: &WarehouseOption) -> Self {
        Self {
            id: option.id,
            name: option.name.clone(),
            label: option.label(),
        }
    }
}

/// Prompt asking the operator to pick a warehouse for one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehousePrompt {
    /// Token to answer with.
    pub token: SelectionToken,
    /// The row the draft belongs to.
    pub row: RowIndex,
    /// The calculation handle of the draft.
    pub operation_id: OperationId,
    /// The warehouses to choose from.
    pub options: Vec<WarehouseChoice>,
}

/// Prompt asking the operator to pick a timeslot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeslotPrompt {
    /// Token to answer with.
    pub token: SelectionToken,
    /// The row the draft belongs to.
    pub row: RowIndex,
    /// The warehouse the slots belong to.
    pub warehouse_id: WarehouseId,
    /// The draft the slots were looked up for.
    pub draft_id: DraftId,
    /// The slots, formatted in the display timezone.
    pub slots: Vec<TimeslotOption>,
}

/// Answer to a warehouse prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseChosenRequest {
    /// The prompt's token.
    pub token: String,
    /// The chosen warehouse.
    pub warehouse_id: i64,
}

/// Answer to a timeslot prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeslotChosenRequest {
    /// The prompt's token.
    pub token: String,
    /// The row the prompt was shown for.
    pub row: u32,
    /// The warehouse the prompt was shown for.
    pub warehouse_id: i64,
    /// The chosen slot's value, its start timestamp.
    pub slot: String,
}

/// Final result of one row's selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOutcome {
    /// The row.
    pub row: RowIndex,
    /// The chosen warehouse.
    pub warehouse_id: WarehouseId,
    /// The chosen slot's start timestamp.
    pub slot: String,
}

/// What happened to one cluster row during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RowOutcome {
    /// A warehouse prompt was presented.
    AwaitingWarehouse {
        /// Token of the outstanding prompt.
        token: SelectionToken,
    },
    /// The calculation offered no warehouse.
    NoWarehouses,
    /// The calculation returned no cluster.
    NoClusters,
    /// The row failed; the message was written to the sheet.
    Failed {
        /// The message written to the Operation ID cell.
        message: String,
    },
}

/// Report entry for one cluster row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowReport {
    /// The row.
    pub row: RowIndex,
    /// The cluster processed in this row.
    pub cluster_id: ClusterId,
    /// The outcome.
    #[serde(flatten)]
    pub outcome: RowOutcome,
}

/// Summary of a workflow run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowReport {
    /// The region read from the sheet, trimmed.
    pub region: String,
    /// The cluster the region resolved to.
    pub cluster_id: ClusterId,
    /// One entry per cluster returned for the region.
    pub rows: Vec<RowReport>,
}

/// One entry of the region mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    /// The region name as entered in the sheet.
    pub name: String,
    /// The marketplace cluster id.
    pub cluster_id: ClusterId,
}

/// The sheet's current cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetView {
    /// Rows from row 1, each as its cells from column A.
    pub rows: Vec<Vec<String>>,
}
