// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::RowIndex;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The region name is not part of the fixed region mapping.
    UnknownRegion(String),
    /// A row input cell does not hold a positive integer.
    InvalidInput {
        /// The sheet row the input was read from.
        row: RowIndex,
        /// The input field name (`SKU` or `Quantity`).
        field: &'static str,
        /// The raw cell value.
        value: String,
    },
    /// The calculation status string is not one the seller API documents.
    UnknownCalculationStatus(String),
    /// A timestamp could not be rendered for the seller API.
    TimestampFormat(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRegion(region) => {
                write!(f, "No cluster id found for region: {region}")
            }
            Self::InvalidInput { row, field, value } => {
                write!(f, "Invalid {field} value '{value}' for row {row}")
            }
            Self::UnknownCalculationStatus(status) => {
                write!(f, "Unknown calculation status: {status}")
            }
            Self::TimestampFormat(msg) => write!(f, "Cannot format timestamp: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
