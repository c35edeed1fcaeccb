// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The batch run: region lookup, per-cluster drafts and calculations.

use chrono_tz::Tz;
use std::sync::Arc;
use supply_plan::{ClusterRecord, DraftInfo, SellerClient};
use supply_plan_domain::{
    ClusterId, DraftInputs, OperationId, RowIndex, regions, resolve, validate_draft_inputs,
};
use supply_plan_persistence::{Cell, Column, PendingSelections, Sheet};
use tracing::{error, info, warn};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::presenter::SelectionPresenter;
use crate::request_response::{RegionEntry, RowOutcome, RowReport, SheetView, WorkflowReport};

/// Drives the supply planning workflow over one sheet.
///
/// The orchestrator owns the sheet and the pending selections; callers
/// serialize access to it, so only one command runs at a time.
pub struct WorkflowOrchestrator {
    pub(crate) client: SellerClient,
    pub(crate) sheet: Box<dyn Sheet>,
    pub(crate) presenter: Arc<dyn SelectionPresenter>,
    pub(crate) pending: PendingSelections,
    pub(crate) timezone: Tz,
}

impl WorkflowOrchestrator {
    /// Creates an orchestrator with no pending selections.
    ///
    /// # Arguments
    ///
    /// * `client` - Seller API client
    /// * `sheet` - Row store holding inputs and progress
    /// * `presenter` - Shows prompts and alerts to the operator
    /// * `timezone` - Timezone timeslots are displayed in
    #[must_use]
    pub fn new(
        client: SellerClient,
        sheet: Box<dyn Sheet>,
        presenter: Arc<dyn SelectionPresenter>,
        timezone: Tz,
    ) -> Self {
        Self {
            client,
            sheet,
            presenter,
            pending: PendingSelections::new(),
            timezone,
        }
    }

    /// Returns the sheet.
    #[must_use]
    pub fn sheet(&self) -> &dyn Sheet {
        self.sheet.as_ref()
    }

    /// Returns a copy of the sheet's cells.
    #[must_use]
    pub fn sheet_view(&self) -> SheetView {
        SheetView {
            rows: self.sheet.rows(),
        }
    }

    /// Writes one operator-entered cell, such as the region or a SKU.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the row is outside
    /// `1..=Cell::MAX_ROW` or the column outside `1..=Cell::LAST_COLUMN`,
    /// or `ApiError::Persistence` if the sheet cannot be written.
    pub fn update_cell(&mut self, row: u32, column: u32, value: &str) -> Result<(), ApiError> {
        if !(1..=Cell::MAX_ROW).contains(&row) {
            return Err(ApiError::InvalidInput {
                field: String::from("row"),
                message: format!("Row must be between 1 and {}, got {row}", Cell::MAX_ROW),
            });
        }
        if !(1..=Cell::LAST_COLUMN).contains(&column) {
            return Err(ApiError::InvalidInput {
                field: String::from("column"),
                message: format!(
                    "Column must be between 1 and {}, got {column}",
                    Cell::LAST_COLUMN
                ),
            });
        }

        self.sheet.set(Cell { row, column }, value)?;
        info!(row, column, "Updated sheet cell");
        Ok(())
    }

    /// Returns the outstanding selections.
    #[must_use]
    pub const fn pending(&self) -> &PendingSelections {
        &self.pending
    }

    /// Runs the batch over every cluster of the sheet's region.
    ///
    /// Selections left over from an earlier run are discarded, then output
    /// columns are cleared and headers written. Failures of a single row,
    /// including failed sheet writes, are recorded in the report and the
    /// remaining rows are still processed.
    ///
    /// # Errors
    ///
    /// - `ApiError::Setup` if the region is unknown or the cluster list
    ///   cannot be fetched
    /// - `ApiError::Persistence` if the headers cannot be written
    pub async fn run_workflow(&mut self) -> Result<WorkflowReport, ApiError> {
        let discarded: usize = self.pending.clear();
        if discarded > 0 {
            info!(discarded, "Discarded selections of the previous run");
        }
        self.prepare_sheet()?;

        let region: String = self.sheet.get(Cell::REGION).trim().to_string();
        info!(%region, "Read region from sheet");

        let cluster_id: ClusterId = resolve(&region).map_err(|e| {
            error!(%region, error = %e, "Region lookup failed");
            translate_domain_error(e)
        })?;
        info!(%region, %cluster_id, "Resolved region");

        let clusters: Vec<ClusterRecord> =
            self.client.fetch_clusters(cluster_id).await.map_err(|e| {
                error!(%cluster_id, error = %e, "Cluster lookup failed");
                translate_core_error(e)
            })?;

        if clusters.is_empty() {
            info!(%cluster_id, "No clusters found in the response");
        }

        let mut rows: Vec<RowReport> = Vec::with_capacity(clusters.len());
        for (index, cluster) in clusters.iter().enumerate() {
            let row: RowIndex = RowIndex::for_cluster_index(index);
            let outcome: RowOutcome = self.process_cluster(row, cluster).await;
            rows.push(RowReport {
                row,
                cluster_id: cluster.id,
                outcome,
            });
        }

        info!(%region, rows = rows.len(), "Workflow run finished");
        Ok(WorkflowReport {
            region,
            cluster_id,
            rows,
        })
    }

    fn prepare_sheet(&mut self) -> Result<(), ApiError> {
        for column in Column::OUTPUTS {
            self.sheet
                .clear_column(column.index(), RowIndex::FIRST_DATA.value())?;
            if let Some(header) = column.header() {
                self.sheet.write(RowIndex::HEADER, column, header)?;
            }
        }
        Ok(())
    }

    async fn process_cluster(&mut self, row: RowIndex, cluster: &ClusterRecord) -> RowOutcome {
        info!(%row, cluster_id = %cluster.id, name = %cluster.name, "Processing cluster");

        match self.plan_row(row, cluster).await {
            Ok(outcome) => outcome,
            Err(err) => {
                let message: String =
                    format!("Error processing cluster {}: {}", cluster.id, err.detail());
                warn!(%row, cluster_id = %cluster.id, error = %err, "Row failed");
                if let Err(write_err) = self.sheet.write(row, Column::OperationId, &message) {
                    warn!(%row, error = %write_err, "Could not record row failure");
                }
                RowOutcome::Failed { message }
            }
        }
    }

    async fn plan_row(
        &mut self,
        row: RowIndex,
        cluster: &ClusterRecord,
    ) -> Result<RowOutcome, ApiError> {
        self.sheet
            .write(row, Column::ClusterId, &cluster.id.to_string())?;
        self.sheet.write(row, Column::ClusterName, &cluster.name)?;

        let (operation_id, info): (OperationId, DraftInfo) =
            self.draft_and_calculate(row, cluster.id).await?;
        self.bridge_warehouse_choice(row, operation_id, &info)
    }

    async fn draft_and_calculate(
        &mut self,
        row: RowIndex,
        cluster_id: ClusterId,
    ) -> Result<(OperationId, DraftInfo), ApiError> {
        let sku: String = self.sheet.read(row, Column::Sku);
        let quantity: String = self.sheet.read(row, Column::Quantity);
        let inputs: DraftInputs =
            validate_draft_inputs(row, &sku, &quantity).map_err(translate_domain_error)?;

        let operation_id: OperationId = self
            .client
            .create_draft(cluster_id, inputs)
            .await
            .map_err(translate_core_error)?;
        self.sheet
            .write(row, Column::OperationId, operation_id.value())?;

        let info: DraftInfo = self
            .client
            .poll_calculation(&operation_id)
            .await
            .map_err(translate_core_error)?;
        Ok((operation_id, info))
    }
}

/// Lists the regions the workflow can plan for.
#[must_use]
pub fn list_regions() -> Vec<RegionEntry> {
    regions()
        .into_iter()
        .map(|(name, cluster_id)| RegionEntry {
            name: name.to_string(),
            cluster_id,
        })
        .collect()
}
