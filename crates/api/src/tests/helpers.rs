// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use supply_plan::{
    CoreError, Credentials, Endpoint, HttpRequest, HttpResponse, SellerClient, Sleeper, Transport,
};
use supply_plan_persistence::{Cell, MemorySheet, PersistenceError, Sheet};

use crate::{SelectionPresenter, TimeslotPrompt, WarehousePrompt, WorkflowOrchestrator};

/// Transport that answers each endpoint from its own script.
#[derive(Clone, Default)]
pub struct RouteTransport {
    routes: Arc<Mutex<HashMap<&'static str, VecDeque<HttpResponse>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl RouteTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, endpoint: Endpoint, status: u16, body: &str) -> Self {
        self.routes
            .lock()
            .unwrap()
            .entry(endpoint.path())
            .or_default()
            .push_back(HttpResponse::new(status, body));
        self
    }

    pub fn calls_to(&self, endpoint: Endpoint) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url.ends_with(endpoint.path()))
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RouteTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, CoreError> {
        let path: Option<&'static str> = self
            .routes
            .lock()
            .unwrap()
            .keys()
            .copied()
            .find(|path| request.url.ends_with(path));
        self.requests.lock().unwrap().push(request);

        path.and_then(|path| {
            self.routes
                .lock()
                .unwrap()
                .get_mut(path)
                .and_then(VecDeque::pop_front)
        })
        .ok_or_else(|| CoreError::Transport(String::from("no scripted response")))
    }
}

/// Sleeper that returns immediately.
pub struct InstantSleeper;

#[async_trait]
impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

/// Presenter that records everything shown to the operator.
#[derive(Default)]
pub struct RecordingPresenter {
    pub warehouse_prompts: Mutex<Vec<WarehousePrompt>>,
    pub timeslot_prompts: Mutex<Vec<TimeslotPrompt>>,
    pub alerts: Mutex<Vec<String>>,
}

impl SelectionPresenter for RecordingPresenter {
    fn present_warehouses(&self, prompt: &WarehousePrompt) {
        self.warehouse_prompts.lock().unwrap().push(prompt.clone());
    }

    fn present_timeslots(&self, prompt: &TimeslotPrompt) {
        self.timeslot_prompts.lock().unwrap().push(prompt.clone());
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

pub const URAL_CLUSTERS: &str = r#"{"clusters":[{"id":3,"name":"Урал","warehouses":[]}]}"#;

pub const OPERATION_BODY: &str = r#"{"operation_id":"op1"}"#;

pub const SUCCESS_BODY: &str = r#"{
    "status": "CALCULATION_STATUS_SUCCESS",
    "draft_id": 555,
    "clusters": [
        {"cluster_id": 3, "warehouses": [
            {"supply_warehouse": {"warehouse_id": 99, "name": "W1"}}
        ]}
    ]
}"#;

pub const TIMESLOTS_BODY: &str = r#"{
    "drop_off_warehouse_timeslots": [
        {"drop_off_warehouse_id": 99, "days": [
            {"timeslots": [
                {"from_in_timezone": "2026-01-20T09:00:00Z", "to_in_timezone": "2026-01-20T10:00:00Z"},
                {"from_in_timezone": "2026-01-20T12:00:00Z", "to_in_timezone": "2026-01-20T14:00:00Z"}
            ]}
        ]}
    ]
}"#;

/// Creates a sheet with `region` in H1 and one SKU/quantity pair per data row.
pub fn create_test_sheet(region: &str, inputs: &[(&str, &str)]) -> MemorySheet {
    let mut sheet: MemorySheet = MemorySheet::new();
    sheet.set(Cell::REGION, region).unwrap();
    for (offset, (sku, quantity)) in (2_u32..).zip(inputs) {
        sheet.set(Cell { row: offset, column: 3 }, sku).unwrap();
        sheet.set(Cell { row: offset, column: 4 }, quantity).unwrap();
    }
    sheet
}

/// Sheet whose writes to one row always fail.
pub struct RowFailingSheet {
    pub inner: MemorySheet,
    pub failing_row: u32,
}

impl Sheet for RowFailingSheet {
    fn get(&self, cell: Cell) -> String {
        self.inner.get(cell)
    }

    fn set(&mut self, cell: Cell, value: &str) -> Result<(), PersistenceError> {
        if cell.row == self.failing_row {
            return Err(PersistenceError::InvalidCell {
                row: cell.row,
                column: cell.column,
            });
        }
        self.inner.set(cell, value)
    }

    fn clear_column(&mut self, column: u32, from_row: u32) -> Result<(), PersistenceError> {
        self.inner.clear_column(column, from_row)
    }

    fn last_row(&self) -> u32 {
        self.inner.last_row()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.inner.rows()
    }
}

pub fn create_test_orchestrator(
    transport: &RouteTransport,
    sheet: MemorySheet,
) -> (WorkflowOrchestrator, Arc<RecordingPresenter>) {
    create_test_orchestrator_with_sheet(transport, Box::new(sheet))
}

pub fn create_test_orchestrator_with_sheet(
    transport: &RouteTransport,
    sheet: Box<dyn Sheet>,
) -> (WorkflowOrchestrator, Arc<RecordingPresenter>) {
    let client: SellerClient = SellerClient::new(
        Arc::new(transport.clone()),
        Arc::new(InstantSleeper),
        "https://seller.test",
        Credentials {
            client_id: String::from("client-1"),
            api_key: String::from("key-1"),
        },
    );
    let presenter: Arc<RecordingPresenter> = Arc::new(RecordingPresenter::default());
    let orchestrator: WorkflowOrchestrator = WorkflowOrchestrator::new(
        client,
        sheet,
        presenter.clone(),
        chrono_tz::Europe::Moscow,
    );
    (orchestrator, presenter)
}

/// Transport scripted for a successful single-row run in the Урал region.
pub fn create_ural_transport() -> RouteTransport {
    RouteTransport::new()
        .respond(Endpoint::ClusterList, 200, URAL_CLUSTERS)
        .respond(Endpoint::DraftCreate, 200, OPERATION_BODY)
        .respond(Endpoint::DraftCreateInfo, 200, SUCCESS_BODY)
}
