// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Injected I/O seams: the HTTP transport and the retry timer.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::CoreError;

/// A JSON POST request to the seller API.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Absolute request URL.
    pub url: String,
    /// Header name/value pairs.
    pub headers: Vec<(String, String)>,
    /// The JSON body.
    pub body: serde_json::Value,
}

/// The raw outcome of an HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body text.
    pub body: String,
}

impl HttpResponse {
    /// Status returned on success.
    pub const OK: u16 = 200;
    /// Status returned when rate limited.
    pub const TOO_MANY_REQUESTS: u16 = 429;

    /// Creates a response.
    #[must_use]
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// Sends JSON POST requests.
///
/// Implementations must not fail on non-2xx statuses; the caller inspects
/// the status. Only failures that produce no response at all are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Posts `request` and returns the status and body.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Transport` if no response was received.
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, CoreError>;
}

/// Blocks the workflow between attempts.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Waits for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
