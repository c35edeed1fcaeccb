// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calculation;
mod error;
mod region;
mod timeslot;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use calculation::{CalculationError, CalculationStatus, ItemValidation, aggregate_errors};
pub use error::DomainError;
pub use region::{REGION_CLUSTERS, regions, resolve};
pub use timeslot::{Timeslot, TimeslotOption, TimeslotWindow, format_timeslot};
pub use types::{
    ClusterId, DROP_OFF_WAREHOUSE_ID, DraftId, DraftType, OperationId, Quantity, RowIndex, Sku,
    WarehouseId, WarehouseOption,
};
pub use validation::{DraftInputs, validate_draft_inputs};
