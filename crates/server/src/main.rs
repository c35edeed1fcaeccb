// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod live;
mod transport;

use axum::{
    Json, Router,
    extract::{FromRef, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use supply_plan::{SellerClient, TokioSleeper};
use supply_plan_api::{
    ApiError, RegionEntry, SelectionOutcome, SheetView, TimeslotChosenRequest, TimeslotPrompt,
    WarehouseChosenRequest, WorkflowOrchestrator, WorkflowReport, list_regions,
};
use supply_plan_persistence::{CsvSheet, MemorySheet, PendingEntry, Sheet};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::config::{Args, Config};
use crate::live::{LiveEvent, LiveEventBroadcaster, LivePresenter, live_events_handler};
use crate::transport::ReqwestTransport;

/// Application state shared across handlers.
///
/// The orchestrator sits behind a Mutex so only one command runs at a time.
#[derive(Clone)]
struct AppState {
    /// The workflow, its sheet and its pending selections.
    workflow: Arc<Mutex<WorkflowOrchestrator>>,
    /// Publishes prompts and results to the operator UI.
    broadcaster: Arc<LiveEventBroadcaster>,
}

impl FromRef<AppState> for Arc<LiveEventBroadcaster> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.broadcaster.clone()
    }
}

/// API request for writing one sheet cell.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateCellApiRequest {
    /// 1-based row.
    row: u32,
    /// 1-based column.
    column: u32,
    /// The new cell text.
    value: String,
}

/// Generic write response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WriteResponse {
    /// Whether the operation succeeded.
    success: bool,
    /// Optional message.
    message: Option<String>,
}

/// API response for listing regions.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ListRegionsApiResponse {
    /// Every region with its cluster id.
    regions: Vec<RegionEntry>,
}

/// API response for listing outstanding selections.
#[derive(Debug, Clone, Serialize)]
struct ListSelectionsApiResponse {
    /// Pending selections, oldest first.
    selections: Vec<PendingEntry>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::NoPendingSelection { .. } => StatusCode::NOT_FOUND,
            ApiError::SelectionMismatch { .. } | ApiError::InvalidInput { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Setup { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Remote { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Persistence { .. } => {
                error!(error = %err, "Sheet update failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/workflow/run` endpoint.
///
/// Runs the batch over the sheet's region.
async fn handle_run_workflow(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<WorkflowReport>, HttpError> {
    info!("Handling run_workflow request");

    let mut workflow = app_state.workflow.lock().await;
    let report: WorkflowReport = workflow.run_workflow().await?;
    drop(workflow);

    info!(
        region = %report.region,
        cluster_id = %report.cluster_id,
        rows = report.rows.len(),
        "Workflow run completed"
    );
    app_state
        .broadcaster
        .broadcast(&LiveEvent::WorkflowCompleted {
            report: report.clone(),
        });

    Ok(Json(report))
}

/// Handler for POST `/selections/warehouse` endpoint.
///
/// Resumes a row with the operator's warehouse and returns the timeslot
/// prompt for it.
async fn handle_warehouse_chosen(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<WarehouseChosenRequest>,
) -> Result<Json<TimeslotPrompt>, HttpError> {
    info!(
        token = %req.token,
        warehouse_id = req.warehouse_id,
        "Handling warehouse selection"
    );

    let mut workflow = app_state.workflow.lock().await;
    let prompt: TimeslotPrompt = workflow.on_warehouse_chosen(req).await?;
    drop(workflow);

    Ok(Json(prompt))
}

/// Handler for POST `/selections/timeslot` endpoint.
///
/// Records the operator's timeslot for a row.
async fn handle_timeslot_chosen(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<TimeslotChosenRequest>,
) -> Result<Json<SelectionOutcome>, HttpError> {
    info!(
        token = %req.token,
        row = req.row,
        warehouse_id = req.warehouse_id,
        slot = %req.slot,
        "Handling timeslot selection"
    );

    let mut workflow = app_state.workflow.lock().await;
    let outcome: SelectionOutcome = workflow.on_timeslot_chosen(req)?;
    drop(workflow);

    app_state
        .broadcaster
        .broadcast(&LiveEvent::TimeslotSelected {
            outcome: outcome.clone(),
        });

    Ok(Json(outcome))
}

/// Handler for GET `/selections` endpoint.
async fn handle_list_selections(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListSelectionsApiResponse> {
    let workflow = app_state.workflow.lock().await;
    let selections: Vec<PendingEntry> = workflow.pending().entries().to_vec();
    drop(workflow);

    Json(ListSelectionsApiResponse { selections })
}

/// Handler for GET `/regions` endpoint.
async fn handle_list_regions() -> Json<ListRegionsApiResponse> {
    Json(ListRegionsApiResponse {
        regions: list_regions(),
    })
}

/// Handler for GET `/sheet` endpoint.
async fn handle_get_sheet(AxumState(app_state): AxumState<AppState>) -> Json<SheetView> {
    let workflow = app_state.workflow.lock().await;
    let view: SheetView = workflow.sheet_view();
    drop(workflow);

    Json(view)
}

/// Handler for POST `/sheet/cells` endpoint.
///
/// Writes one operator input cell.
async fn handle_update_cell(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<UpdateCellApiRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(row = req.row, column = req.column, "Handling update_cell request");

    let mut workflow = app_state.workflow.lock().await;
    workflow.update_cell(req.row, req.column, &req.value)?;
    drop(workflow);

    Ok(Json(WriteResponse {
        success: true,
        message: Some(format!("Updated cell ({}, {})", req.row, req.column)),
    }))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/workflow/run", post(handle_run_workflow))
        .route("/selections", get(handle_list_selections))
        .route("/selections/warehouse", post(handle_warehouse_chosen))
        .route("/selections/timeslot", post(handle_timeslot_chosen))
        .route("/regions", get(handle_list_regions))
        .route("/sheet", get(handle_get_sheet))
        .route("/sheet/cells", post(handle_update_cell))
        .route("/live", get(live_events_handler))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Supply Plan Server");

    let config: Config = Config::from_args(args).inspect_err(|e| {
        error!(error = %e, "Invalid configuration");
    })?;

    let transport: ReqwestTransport = ReqwestTransport::new(config.request_timeout)?;
    let client: SellerClient = SellerClient::new(
        Arc::new(transport),
        Arc::new(TokioSleeper),
        &config.base_url,
        config.credentials.clone(),
    );

    // Sheet storage (in-memory or CSV file based on CLI argument)
    let sheet: Box<dyn Sheet> = if let Some(path) = &config.sheet_path {
        info!("Using CSV sheet at: {}", path.display());
        Box::new(CsvSheet::open(path)?)
    } else {
        warn!("No sheet file given, using an in-memory sheet");
        Box::new(MemorySheet::new())
    };

    let broadcaster: Arc<LiveEventBroadcaster> = Arc::new(LiveEventBroadcaster::new());
    let presenter: Arc<LivePresenter> = Arc::new(LivePresenter::new(broadcaster.clone()));
    let workflow: WorkflowOrchestrator =
        WorkflowOrchestrator::new(client, sheet, presenter, config.timezone);

    let app_state: AppState = AppState {
        workflow: Arc::new(Mutex::new(workflow)),
        broadcaster,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", config.port).parse()?;
    info!(base_url = %config.base_url, timezone = %config.timezone, "Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
