// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Warehouse prompt and the continuation that runs once it is answered.

use supply_plan::{DraftInfo, TimeslotLookup};
use supply_plan_domain::{
    DraftId, OperationId, RowIndex, TimeslotWindow, WarehouseId, WarehouseOption,
};
use supply_plan_persistence::{Cell, Column, PendingSelection, SelectionToken};
use tracing::{debug, error, info, warn};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    RowOutcome, TimeslotPrompt, WarehouseChoice, WarehouseChosenRequest, WarehousePrompt,
};
use crate::workflow::WorkflowOrchestrator;

pub(crate) const NO_CLUSTERS: &str = "No clusters found";
pub(crate) const NO_WAREHOUSES: &str = "No warehouses found";

impl WorkflowOrchestrator {
    /// Presents the warehouses of a successful calculation for `row`.
    ///
    /// Only the first calculated cluster is consulted.
    pub(crate) fn bridge_warehouse_choice(
        &mut self,
        row: RowIndex,
        operation_id: OperationId,
        info: &DraftInfo,
    ) -> Result<RowOutcome, ApiError> {
        if info.clusters.is_empty() {
            info!(%row, %operation_id, "Calculation returned no clusters");
            self.sheet.write(row, Column::WarehouseStatus, NO_CLUSTERS)?;
            self.sheet.write(row, Column::WarehouseId, "")?;
            return Ok(RowOutcome::NoClusters);
        }

        let options: Vec<WarehouseOption> = info.warehouse_options();
        if options.is_empty() {
            info!(%row, %operation_id, "No warehouses to present");
            self.sheet
                .write(row, Column::WarehouseStatus, NO_WAREHOUSES)?;
            return Ok(RowOutcome::NoWarehouses);
        }
        debug!(%row, ?options, "Built warehouse options");

        let choices: Vec<WarehouseChoice> = options.iter().map(WarehouseChoice::from).collect();
        let token: SelectionToken = self.pending.register(PendingSelection::AwaitingWarehouse {
            row,
            operation_id: operation_id.clone(),
            options,
        });

        let prompt: WarehousePrompt = WarehousePrompt {
            token: token.clone(),
            row,
            operation_id,
            options: choices,
        };
        self.presenter.present_warehouses(&prompt);
        info!(%row, %token, count = prompt.options.len(), "Presented warehouse choice");

        Ok(RowOutcome::AwaitingWarehouse { token })
    }

    /// Continues a row once the operator has picked a warehouse.
    ///
    /// The draft id is looked up, the warehouse's timeslots are fetched
    /// and a timeslot prompt is presented. A failure in any of these steps
    /// is written to the row's Warehouse ID cell and alerted; the pending
    /// warehouse selection is consumed either way.
    ///
    /// # Errors
    ///
    /// - `ApiError::NoPendingSelection` if the token is unknown
    /// - `ApiError::SelectionMismatch` if the token awaits a timeslot
    /// - `ApiError::InvalidInput` if the warehouse was not offered
    /// - `ApiError::Remote` if the draft or its timeslots cannot be fetched
    /// - `ApiError::Persistence` if the sheet cannot be updated
    pub async fn on_warehouse_chosen(
        &mut self,
        request: WarehouseChosenRequest,
    ) -> Result<TimeslotPrompt, ApiError> {
        let token: SelectionToken = SelectionToken::new(&request.token);
        let warehouse_id: WarehouseId = WarehouseId::new(request.warehouse_id);

        let (row, operation_id): (RowIndex, OperationId) =
            match self.pending.get(&token).map(|entry| &entry.selection) {
                None => {
                    return Err(ApiError::NoPendingSelection {
                        token: request.token,
                    });
                }
                Some(PendingSelection::AwaitingTimeslot { .. }) => {
                    return Err(ApiError::SelectionMismatch {
                        token: request.token,
                        message: String::from("a timeslot choice is pending for this token"),
                    });
                }
                Some(PendingSelection::AwaitingWarehouse {
                    row,
                    operation_id,
                    options,
                }) => {
                    if !options.iter().any(|option| option.id == Some(warehouse_id)) {
                        return Err(ApiError::InvalidInput {
                            field: String::from("warehouse_id"),
                            message: format!("Warehouse {warehouse_id} was not offered for row {row}"),
                        });
                    }
                    (*row, operation_id.clone())
                }
            };

        self.pending.take(&token);
        info!(%row, %warehouse_id, %operation_id, "Warehouse chosen");

        match self
            .continue_with_warehouse(row, &operation_id, warehouse_id)
            .await
        {
            Ok(prompt) => Ok(prompt),
            Err(err) => {
                let message: String = format!("Error: {}", err.detail());
                error!(%row, %warehouse_id, error = %err, "Warehouse continuation failed");
                if let Err(write_err) = self.sheet.write(row, Column::WarehouseId, &message) {
                    warn!(%row, error = %write_err, "Could not record continuation failure");
                }
                self.presenter.alert(&message);
                Err(err)
            }
        }
    }

    async fn continue_with_warehouse(
        &mut self,
        row: RowIndex,
        operation_id: &OperationId,
        warehouse_id: WarehouseId,
    ) -> Result<TimeslotPrompt, ApiError> {
        let draft_id: DraftId = self
            .client
            .resolve_draft_id(operation_id)
            .await
            .map_err(translate_core_error)?;

        let lookup: TimeslotLookup = self.fetch_timeslots_logged(draft_id, warehouse_id).await?;
        Ok(self.bridge_timeslot_choice(row, warehouse_id, draft_id, &lookup.slots))
    }

    /// Fetches timeslots and records the raw outcome in the debug cell.
    async fn fetch_timeslots_logged(
        &mut self,
        draft_id: DraftId,
        warehouse_id: WarehouseId,
    ) -> Result<TimeslotLookup, ApiError> {
        let window: TimeslotWindow =
            TimeslotWindow::from_now().map_err(translate_domain_error)?;
        debug!(%draft_id, %warehouse_id, ?window, "Requesting timeslots");

        match self
            .client
            .fetch_timeslots(draft_id, warehouse_id, window)
            .await
        {
            Ok(lookup) => {
                self.sheet.set(Cell::DEBUG, &lookup.raw_response)?;
                Ok(lookup)
            }
            Err(err) => {
                self.sheet.set(Cell::DEBUG, &format!("ERROR: {err}"))?;
                Err(translate_core_error(err))
            }
        }
    }
}
