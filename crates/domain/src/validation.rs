// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Quantity, RowIndex, Sku};

/// Validated draft inputs read from one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftInputs {
    /// The SKU to supply.
    pub sku: Sku,
    /// The number of items.
    pub quantity: Quantity,
}

/// Validates the raw SKU and quantity cells of a row.
///
/// Both cells must hold positive integers. Validation runs before any
/// network call so a bad row never reaches the seller API.
///
/// # Arguments
///
/// * `row` - The row the cells were read from
/// * `sku` - The raw SKU cell value
/// * `quantity` - The raw quantity cell value
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` naming the first invalid field.
pub fn validate_draft_inputs(
    row: RowIndex,
    sku: &str,
    quantity: &str,
) -> Result<DraftInputs, DomainError> {
    let invalid = |field: &'static str, value: &str| DomainError::InvalidInput {
        row,
        field,
        value: value.to_string(),
    };

    let parsed_sku: Sku = sku
        .trim()
        .parse::<u64>()
        .ok()
        .and_then(Sku::new)
        .ok_or_else(|| invalid("SKU", sku))?;

    let parsed_quantity: Quantity = quantity
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(Quantity::new)
        .ok_or_else(|| invalid("Quantity", quantity))?;

    Ok(DraftInputs {
        sku: parsed_sku,
        quantity: parsed_quantity,
    })
}
