// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::{CoreError, Credentials, HttpRequest, HttpResponse, SellerClient, Sleeper, Transport};

/// Transport that replays scripted responses in order and records requests.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, CoreError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<HttpResponse, CoreError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn statuses(statuses: &[(u16, &str)]) -> Self {
        Self::new(
            statuses
                .iter()
                .map(|(status, body)| Ok(HttpResponse::new(*status, body)))
                .collect(),
        )
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, CoreError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CoreError::Transport(String::from("no scripted response"))))
    }
}

/// Sleeper that returns at once and records each requested delay.
#[derive(Clone, Default)]
pub struct RecordingSleeper {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

pub fn create_test_credentials() -> Credentials {
    Credentials {
        client_id: String::from("client-1"),
        api_key: String::from("key-1"),
    }
}

pub fn create_test_client(transport: &ScriptedTransport, sleeper: &RecordingSleeper) -> SellerClient {
    SellerClient::new(
        Arc::new(transport.clone()),
        Arc::new(sleeper.clone()),
        "https://seller.test/",
        create_test_credentials(),
    )
}

pub fn draft_info_body(status: &str) -> String {
    format!(r#"{{"status":"{status}"}}"#)
}

pub const SUCCESS_BODY: &str = r#"{
    "status": "CALCULATION_STATUS_SUCCESS",
    "draft_id": 555,
    "clusters": [
        {"cluster_id": 3, "warehouses": [
            {"supply_warehouse": {"warehouse_id": 99, "name": "W1"}}
        ]}
    ],
    "errors": []
}"#;
