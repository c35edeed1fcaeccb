// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed-delay retry policies and the retrying call helper.

use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::transport::{HttpResponse, Sleeper};

/// Which failures a retried call may retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryOn {
    /// Only 429 responses and transport/decode failures are retried; any
    /// other non-200 status fails immediately.
    RateLimitOnly,
    /// Every failed attempt is retried.
    AnyFailure,
}

/// Attempt cap, fixed delay and retry predicate for one kind of call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Fixed delay between attempts. No backoff, no jitter.
    pub delay: Duration,
    /// Which failures are retried.
    pub retry_on: RetryOn,
}

impl RetryPolicy {
    /// Creates a policy.
    #[must_use]
    pub const fn new(max_attempts: u32, delay_ms: u64, retry_on: RetryOn) -> Self {
        Self {
            max_attempts,
            delay: Duration::from_millis(delay_ms),
            retry_on,
        }
    }

    /// Draft creation: 3 attempts, 2 s apart, only rate limits retried.
    #[must_use]
    pub const fn draft_create() -> Self {
        Self::new(3, 2000, RetryOn::RateLimitOnly)
    }

    /// Calculation status polling: 5 polls, 5 s apart.
    #[must_use]
    pub const fn calculation_poll() -> Self {
        Self::new(5, 5000, RetryOn::AnyFailure)
    }

    /// Draft info lookup after a warehouse is chosen: 3 attempts, 2 s apart.
    #[must_use]
    pub const fn draft_info() -> Self {
        Self::new(3, 2000, RetryOn::AnyFailure)
    }

    /// Timeslot lookup: 3 attempts, 3 s apart.
    #[must_use]
    pub const fn timeslots() -> Self {
        Self::new(3, 3000, RetryOn::AnyFailure)
    }
}

/// The per-call policies a seller client uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicies {
    /// Policy for `draft/create`.
    pub draft_create: RetryPolicy,
    /// Policy for polling `draft/create/info`.
    pub calculation_poll: RetryPolicy,
    /// Policy for the post-selection `draft/create/info` lookup.
    pub draft_info: RetryPolicy,
    /// Policy for `draft/timeslot/info`.
    pub timeslots: RetryPolicy,
}

impl Default for RetryPolicies {
    fn default() -> Self {
        Self {
            draft_create: RetryPolicy::draft_create(),
            calculation_poll: RetryPolicy::calculation_poll(),
            draft_info: RetryPolicy::draft_info(),
            timeslots: RetryPolicy::timeslots(),
        }
    }
}

/// Repeats `send` until a 200 response parses, classifying each attempt.
///
/// - 200: the body is handed to `parse`; a parse failure counts as a
///   failed attempt.
/// - 429: always retried after the fixed delay.
/// - other statuses: retried only under `RetryOn::AnyFailure`.
/// - transport errors: always retried.
///
/// No delay follows the final attempt.
///
/// # Arguments
///
/// * `policy` - Attempt cap, delay and retry predicate
/// * `sleeper` - Timer used between attempts
/// * `call` - Short description of the call, for logs
/// * `send` - Performs one attempt
/// * `parse` - Decodes a 200 body
///
/// # Errors
///
/// Returns the non-retryable `CoreError::HttpStatus` under
/// `RetryOn::RateLimitOnly`, or `CoreError::RetriesExhausted` once the
/// attempt cap is reached.
pub async fn retry_call<T, F, Fut, P>(
    policy: &RetryPolicy,
    sleeper: &dyn Sleeper,
    call: &str,
    mut send: F,
    parse: P,
) -> Result<T, CoreError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<HttpResponse, CoreError>>,
    P: Fn(&str) -> Result<T, CoreError>,
{
    let mut last_error: Option<CoreError> = None;

    for attempt in 1..=policy.max_attempts {
        debug!(attempt, max_attempts = policy.max_attempts, call, "Sending request");

        let error: CoreError = match send().await {
            Ok(response) if response.status == HttpResponse::OK => match parse(&response.body) {
                Ok(value) => return Ok(value),
                Err(err) => err,
            },
            Ok(response) if response.status == HttpResponse::TOO_MANY_REQUESTS => {
                CoreError::HttpStatus {
                    status: response.status,
                    body: response.body,
                }
            }
            Ok(response) => {
                let err: CoreError = CoreError::HttpStatus {
                    status: response.status,
                    body: response.body,
                };
                if policy.retry_on == RetryOn::RateLimitOnly {
                    warn!(attempt, call, error = %err, "Non-retryable response");
                    return Err(err);
                }
                err
            }
            Err(err) => err,
        };

        warn!(attempt, call, error = %error, "Attempt failed");
        last_error = Some(error);

        if attempt < policy.max_attempts {
            debug!(call, delay = ?policy.delay, "Waiting before retry");
            sleeper.sleep(policy.delay).await;
        }
    }

    Err(CoreError::RetriesExhausted {
        attempts: policy.max_attempts,
        last_error: last_error.map_or_else(|| String::from("no attempts made"), |e| e.to_string()),
    })
}
