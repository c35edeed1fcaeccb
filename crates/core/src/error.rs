// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use supply_plan_domain::{DomainError, OperationId};

/// Errors that can occur while talking to the seller API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The request never produced an HTTP response.
    Transport(String),
    /// The API answered with a status other than 200.
    HttpStatus {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },
    /// A 200 response body could not be decoded.
    Decode(String),
    /// The cluster list request failed. Not retried.
    ClusterFetchFailed(String),
    /// Every attempt of a retried call failed.
    RetriesExhausted {
        /// The number of attempts made.
        attempts: u32,
        /// The error of the final attempt.
        last_error: String,
    },
    /// The draft calculation finished with validation errors.
    CalculationFailed(String),
    /// The calculation was still in progress after the last poll.
    PollTimeout {
        /// The operation that was polled.
        operation_id: OperationId,
        /// The number of polls made.
        attempts: u32,
    },
    /// The draft info response carried no draft id.
    DraftNotFound {
        /// The operation the draft was looked up by.
        operation_id: OperationId,
    },
    /// The timeslot lookup returned no slots at all.
    NoTimeslotsAvailable,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "{err}"),
            Self::Transport(msg) => write!(f, "Request failed: {msg}"),
            Self::HttpStatus { status, body } => write!(f, "API error {status}: {body}"),
            Self::Decode(msg) => write!(f, "Malformed API response: {msg}"),
            Self::ClusterFetchFailed(msg) => write!(f, "Failed to fetch cluster list: {msg}"),
            Self::RetriesExhausted {
                attempts,
                last_error,
            } => {
                write!(f, "Gave up after {attempts} attempts: {last_error}")
            }
            Self::CalculationFailed(reasons) => write!(f, "Calculation failed. {reasons}"),
            Self::PollTimeout {
                operation_id,
                attempts,
            } => {
                write!(
                    f,
                    "Calculation for operation {operation_id} still in progress after {attempts} polls"
                )
            }
            Self::DraftNotFound { operation_id } => {
                write!(
                    f,
                    "Draft not found or deleted for operation {operation_id}"
                )
            }
            Self::NoTimeslotsAvailable => write!(f, "No timeslots available in the API response"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
