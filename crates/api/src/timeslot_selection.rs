// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use supply_plan_domain::{
    DraftId, RowIndex, Timeslot, TimeslotOption, WarehouseId, format_timeslot,
};
use supply_plan_persistence::{Column, PendingSelection, SelectionToken};
use tracing::info;

use crate::error::ApiError;
use crate::request_response::{SelectionOutcome, TimeslotChosenRequest, TimeslotPrompt};
use crate::workflow::WorkflowOrchestrator;

pub(crate) const WAREHOUSE_SELECTED: &str = "Warehouse selected";

impl WorkflowOrchestrator {
    /// Formats `slots` for display and presents them for `row`.
    pub(crate) fn bridge_timeslot_choice(
        &mut self,
        row: RowIndex,
        warehouse_id: WarehouseId,
        draft_id: DraftId,
        slots: &[Timeslot],
    ) -> TimeslotPrompt {
        let options: Vec<TimeslotOption> = slots
            .iter()
            .map(|slot| format_timeslot(slot, self.timezone))
            .collect();

        let token: SelectionToken = self.pending.register(PendingSelection::AwaitingTimeslot {
            row,
            warehouse_id,
            draft_id,
            slots: options.clone(),
        });

        let prompt: TimeslotPrompt = TimeslotPrompt {
            token,
            row,
            warehouse_id,
            draft_id,
            slots: options,
        };
        self.presenter.present_timeslots(&prompt);
        info!(
            %row,
            %warehouse_id,
            token = %prompt.token,
            count = prompt.slots.len(),
            "Presented timeslot choice"
        );
        prompt
    }

    /// Records the operator's timeslot choice.
    ///
    /// # Errors
    ///
    /// - `ApiError::NoPendingSelection` if the token is unknown
    /// - `ApiError::SelectionMismatch` if the token awaits a warehouse, or
    ///   the row or warehouse differ from the prompt's
    /// - `ApiError::InvalidInput` if the slot was not offered
    /// - `ApiError::Persistence` if the sheet cannot be updated
    pub fn on_timeslot_chosen(
        &mut self,
        request: TimeslotChosenRequest,
    ) -> Result<SelectionOutcome, ApiError> {
        let token: SelectionToken = SelectionToken::new(&request.token);
        let row: RowIndex = RowIndex::new(request.row);
        let warehouse_id: WarehouseId = WarehouseId::new(request.warehouse_id);

        match self.pending.get(&token).map(|entry| &entry.selection) {
            None => Err(ApiError::NoPendingSelection {
                token: request.token.clone(),
            }),
            Some(PendingSelection::AwaitingWarehouse { .. }) => Err(ApiError::SelectionMismatch {
                token: request.token.clone(),
                message: String::from("a warehouse choice is pending for this token"),
            }),
            Some(PendingSelection::AwaitingTimeslot {
                row: expected_row,
                warehouse_id: expected_warehouse,
                slots,
                ..
            }) => {
                if *expected_row != row || *expected_warehouse != warehouse_id {
                    Err(ApiError::SelectionMismatch {
                        token: request.token.clone(),
                        message: format!(
                            "expected row {expected_row} and warehouse {expected_warehouse}, got row {row} and warehouse {warehouse_id}"
                        ),
                    })
                } else if slots.iter().any(|slot| slot.value == request.slot) {
                    Ok(())
                } else {
                    Err(ApiError::InvalidInput {
                        field: String::from("slot"),
                        message: format!("Timeslot '{}' was not offered", request.slot),
                    })
                }
            }
        }?;

        self.pending.take(&token);

        self.sheet
            .write(row, Column::WarehouseStatus, WAREHOUSE_SELECTED)?;
        self.sheet
            .write(row, Column::WarehouseId, &warehouse_id.to_string())?;
        self.sheet.write(
            row,
            Column::Timeslot,
            &format!("Selected timeslot: {}", request.slot),
        )?;
        info!(%row, %warehouse_id, slot = %request.slot, "Timeslot selected");

        Ok(SelectionOutcome {
            row,
            warehouse_id,
            slot: request.slot,
        })
    }
}
