// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `reqwest`-backed transport for the seller API.

use async_trait::async_trait;
use std::time::Duration;
use supply_plan::{CoreError, HttpRequest, HttpResponse, Transport};
use thiserror::Error;
use tracing::debug;

/// Errors raised while building the HTTP client.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The client could not be configured.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Sends seller API requests over HTTPS.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Build` if the TLS backend cannot be set up.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client: reqwest::Client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, CoreError> {
        let mut builder: reqwest::RequestBuilder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response: reqwest::Response = builder
            .json(&request.body)
            .send()
            .await
            .map_err(|e| CoreError::Transport(e.to_string()))?;
        let status: u16 = response.status().as_u16();
        let body: String = response
            .text()
            .await
            .map_err(|e| CoreError::Transport(e.to_string()))?;

        debug!(url = %request.url, status, "Seller API responded");
        Ok(HttpResponse { status, body })
    }
}
