// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operator choices the workflow is waiting on, keyed by token.

use serde::{Deserialize, Serialize};
use supply_plan_domain::{DraftId, OperationId, RowIndex, TimeslotOption, WarehouseId, WarehouseOption};
use time::OffsetDateTime;
use tracing::debug;

/// Correlation key of one pending operator choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionToken(String);

impl SelectionToken {
    /// Generates a fresh token of the form `sel_<unix-nanos>_<random>`.
    #[must_use]
    pub fn generate() -> Self {
        let timestamp: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos();
        Self(format!("sel_{timestamp}_{}", rand::random::<u64>()))
    }

    /// Wraps a token received from the operator.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the token text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SelectionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The context a pending choice resumes with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum PendingSelection {
    /// The calculation succeeded and a warehouse must be picked.
    AwaitingWarehouse {
        /// The sheet row the draft belongs to.
        row: RowIndex,
        /// The calculation handle, used to look up the draft id.
        operation_id: OperationId,
        /// The warehouses offered.
        options: Vec<WarehouseOption>,
    },
    /// A warehouse was picked and a timeslot must be chosen.
    AwaitingTimeslot {
        /// The sheet row the draft belongs to.
        row: RowIndex,
        /// The chosen warehouse.
        warehouse_id: WarehouseId,
        /// The resolved draft.
        draft_id: DraftId,
        /// The slots offered.
        slots: Vec<TimeslotOption>,
    },
}

impl PendingSelection {
    /// Returns the row the selection belongs to.
    #[must_use]
    pub const fn row(&self) -> RowIndex {
        match self {
            Self::AwaitingWarehouse { row, .. } | Self::AwaitingTimeslot { row, .. } => *row,
        }
    }

    /// Returns a short name of the stage, for logs.
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::AwaitingWarehouse { .. } => "awaiting_warehouse",
            Self::AwaitingTimeslot { .. } => "awaiting_timeslot",
        }
    }
}

/// A registered selection with its token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingEntry {
    /// The token the operator answers with.
    pub token: SelectionToken,
    /// When the selection was registered, ISO 8601.
    pub created_at: String,
    /// The stage and its context.
    #[serde(flatten)]
    pub selection: PendingSelection,
}

/// Outstanding selections in registration order.
///
/// Any number of selections may be outstanding at once; each is removed
/// when its stage completes, or all at once when a new run starts.
#[derive(Debug, Clone, Default)]
pub struct PendingSelections {
    entries: Vec<PendingEntry>,
}

impl PendingSelections {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers `selection` under a fresh token and returns the token.
    pub fn register(&mut self, selection: PendingSelection) -> SelectionToken {
        let token: SelectionToken = SelectionToken::generate();
        let created_at: String = OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| String::from("unknown"));

        debug!(%token, stage = selection.stage(), row = %selection.row(), "Registered pending selection");
        self.entries.push(PendingEntry {
            token: token.clone(),
            created_at,
            selection,
        });
        token
    }

    /// Returns the entry for `token` without consuming it.
    #[must_use]
    pub fn get(&self, token: &SelectionToken) -> Option<&PendingEntry> {
        self.entries.iter().find(|entry| &entry.token == token)
    }

    /// Removes and returns the entry for `token`.
    pub fn take(&mut self, token: &SelectionToken) -> Option<PendingEntry> {
        let index: usize = self.entries.iter().position(|entry| &entry.token == token)?;
        let entry: PendingEntry = self.entries.remove(index);
        debug!(%token, stage = entry.selection.stage(), "Consumed pending selection");
        Some(entry)
    }

    /// Drops every outstanding entry and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let dropped: usize = self.entries.len();
        self.entries.clear();
        if dropped > 0 {
            debug!(dropped, "Discarded pending selections");
        }
        dropped
    }

    /// Returns every outstanding entry, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[PendingEntry] {
        &self.entries
    }

    /// Returns the number of outstanding entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing is outstanding.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
