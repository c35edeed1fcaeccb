// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Write;
use std::str::FromStr;

/// Lifecycle of the remote draft feasibility calculation.
///
/// Valid transitions are:
/// - `InProgress` → `InProgress` (repoll)
/// - `InProgress` → `Success`
/// - `InProgress` → `Failed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationStatus {
    /// The calculation has not finished yet.
    InProgress,
    /// The calculation finished and the draft is feasible.
    Success,
    /// The calculation finished with validation errors.
    Failed,
}

impl FromStr for CalculationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CALCULATION_STATUS_IN_PROGRESS" => Ok(Self::InProgress),
            "CALCULATION_STATUS_SUCCESS" => Ok(Self::Success),
            "CALCULATION_STATUS_FAILED" => Ok(Self::Failed),
            _ => Err(DomainError::UnknownCalculationStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for CalculationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl CalculationStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "CALCULATION_STATUS_IN_PROGRESS",
            Self::Success => "CALCULATION_STATUS_SUCCESS",
            Self::Failed => "CALCULATION_STATUS_FAILED",
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Per-item validation reasons attached to a failed calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemValidation {
    /// The offending SKU.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: i64,
    /// Human-readable reasons.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reasons: Vec<String>,
}

/// One error entry of a failed calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculationError {
    /// Top-level message, if any.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Item-level validation failures.
    #[serde(default, deserialize_with = "null_as_default")]
    pub items_validation: Vec<ItemValidation>,
}

/// Concatenates calculation errors into one operator-facing message.
///
/// The output keeps the API order: each entry's message, then its
/// `SKU <sku>: <reason>, <reason>.` items.
#[must_use]
pub fn aggregate_errors(errors: &[CalculationError]) -> String {
    let mut message: String = String::from("Errors: ");
    for error in errors {
        if let Some(text) = error.error_message.as_deref().filter(|t| !t.is_empty()) {
            let _ = write!(message, "{text}. ");
        }
        for item in &error.items_validation {
            let _ = write!(message, "SKU {}: {}. ", item.sku, item.reasons.join(", "));
        }
    }
    message
}
