// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Polling of the asynchronous draft feasibility calculation.

use supply_plan_domain::{CalculationStatus, OperationId, aggregate_errors};
use tracing::{debug, info, warn};

use crate::client::{SellerClient, decode};
use crate::error::CoreError;
use crate::transport::HttpResponse;
use crate::wire::{DraftInfo, DraftInfoRequest, Endpoint};

/// What a single poll observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollStep {
    /// The calculation is still running.
    Pending,
    /// The calculation reached a terminal status.
    Done(CalculationOutcome),
}

/// Terminal outcome of a calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculationOutcome {
    /// The draft is feasible; the payload carries the cluster tree.
    Success(DraftInfo),
    /// The calculation failed; the message aggregates every reason.
    Failed(String),
}

/// Classifies one `draft/create/info` payload.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` wrapping
/// `DomainError::UnknownCalculationStatus` for undocumented statuses.
pub fn classify(info: DraftInfo) -> Result<PollStep, CoreError> {
    match info.calculation_status()? {
        CalculationStatus::InProgress => Ok(PollStep::Pending),
        CalculationStatus::Success => Ok(PollStep::Done(CalculationOutcome::Success(info))),
        CalculationStatus::Failed => Ok(PollStep::Done(CalculationOutcome::Failed(
            aggregate_errors(&info.errors),
        ))),
    }
}

impl SellerClient {
    /// Polls the calculation of `operation_id` until it is terminal.
    ///
    /// Each poll that is still in progress, or that failed at the HTTP or
    /// decoding level, consumes an attempt and waits the fixed delay before
    /// the next one. `FAILED` and unknown statuses end polling at once.
    ///
    /// # Errors
    ///
    /// - `CoreError::CalculationFailed` with the aggregated reasons
    /// - `CoreError::DomainViolation` for an unknown status
    /// - `CoreError::PollTimeout` if the last poll was still in progress
    /// - `CoreError::RetriesExhausted` if the last poll errored
    pub async fn poll_calculation(&self, operation_id: &OperationId) -> Result<DraftInfo, CoreError> {
        let policy = self.policies.calculation_poll;
        let request: DraftInfoRequest = DraftInfoRequest {
            operation_id: operation_id.clone(),
        };
        let mut last_error: Option<CoreError> = None;

        for attempt in 1..=policy.max_attempts {
            debug!(attempt, %operation_id, "Checking calculation status");

            match self.poll_once(&request).await {
                Ok(PollStep::Done(CalculationOutcome::Success(info))) => {
                    info!(attempt, %operation_id, "Calculation succeeded");
                    return Ok(info);
                }
                Ok(PollStep::Done(CalculationOutcome::Failed(reasons))) => {
                    warn!(%operation_id, %reasons, "Calculation failed");
                    return Err(CoreError::CalculationFailed(reasons));
                }
                Ok(PollStep::Pending) => {
                    info!(attempt, %operation_id, "Calculation in progress");
                    last_error = None;
                }
                Err(err @ CoreError::DomainViolation(_)) => {
                    warn!(%operation_id, error = %err, "Unrecognized calculation status");
                    return Err(err);
                }
                Err(err) => {
                    warn!(attempt, %operation_id, error = %err, "Status check failed");
                    last_error = Some(err);
                }
            }

            if attempt < policy.max_attempts {
                self.sleeper.sleep(policy.delay).await;
            }
        }

        Err(last_error.map_or_else(
            || CoreError::PollTimeout {
                operation_id: operation_id.clone(),
                attempts: policy.max_attempts,
            },
            |err| CoreError::RetriesExhausted {
                attempts: policy.max_attempts,
                last_error: err.to_string(),
            },
        ))
    }

    async fn poll_once(&self, request: &DraftInfoRequest) -> Result<PollStep, CoreError> {
        let response: HttpResponse = self.post(Endpoint::DraftCreateInfo, request).await?;
        if response.status != HttpResponse::OK {
            return Err(CoreError::HttpStatus {
                status: response.status,
                body: response.body,
            });
        }
        classify(decode::<DraftInfo>(&response.body)?)
    }
}
