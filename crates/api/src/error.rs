// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use supply_plan::CoreError;
use supply_plan_domain::DomainError;
use supply_plan_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No selection is pending under the given token.
    NoPendingSelection {
        /// The token the operator answered with.
        token: String,
    },
    /// The answer does not match the pending selection.
    SelectionMismatch {
        /// The token the operator answered with.
        token: String,
        /// What did not match.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The run could not start: unknown region or cluster lookup failure.
    Setup {
        /// A description of the failure.
        message: String,
    },
    /// The seller API failed or returned an unusable result.
    Remote {
        /// A description of the failure.
        message: String,
    },
    /// The sheet could not be updated.
    Persistence {
        /// A description of the failure.
        message: String,
    },
}

impl ApiError {
    /// Returns the bare description, without the variant prefix.
    ///
    /// This is the text written into sheet cells.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::NoPendingSelection { token } => token,
            Self::SelectionMismatch { message, .. }
            | Self::InvalidInput { message, .. }
            | Self::Setup { message }
            | Self::Remote { message }
            | Self::Persistence { message } => message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPendingSelection { token } => {
                write!(f, "No pending selection for token '{token}'")
            }
            Self::SelectionMismatch { token, message } => {
                write!(f, "Selection '{token}' does not match: {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Setup { message } => write!(f, "Workflow setup failed: {message}"),
            Self::Remote { message } => write!(f, "Seller API error: {message}"),
            Self::Persistence { message } => write!(f, "Sheet update failed: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(&err)
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownRegion(_) | DomainError::TimestampFormat(_) => ApiError::Setup {
            message: err.to_string(),
        },
        DomainError::InvalidInput { field, .. } => ApiError::InvalidInput {
            field: field.to_string(),
            message: err.to_string(),
        },
        DomainError::UnknownCalculationStatus(_) => ApiError::Remote {
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::ClusterFetchFailed(_) => ApiError::Setup {
            message: err.to_string(),
        },
        CoreError::Transport(_)
        | CoreError::HttpStatus { .. }
        | CoreError::Decode(_)
        | CoreError::RetriesExhausted { .. }
        | CoreError::CalculationFailed(_)
        | CoreError::PollTimeout { .. }
        | CoreError::DraftNotFound { .. }
        | CoreError::NoTimeslotsAvailable => ApiError::Remote {
            message: err.to_string(),
        },
    }
}

/// Translates a sheet storage error into an API error.
#[must_use]
pub fn translate_persistence_error(err: &PersistenceError) -> ApiError {
    ApiError::Persistence {
        message: err.to_string(),
    }
}
