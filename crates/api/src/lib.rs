// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operator-facing boundary of the supply planning workflow.
//!
//! [`WorkflowOrchestrator`] runs the batch over the sheet and suspends on
//! operator choices. Each choice is registered under a token and shown
//! through a [`SelectionPresenter`]; the operator's answer resumes the
//! row via [`WorkflowOrchestrator::on_warehouse_chosen`] or
//! [`WorkflowOrchestrator::on_timeslot_chosen`].

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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod presenter;
mod request_response;
mod timeslot_selection;
mod warehouse_selection;
mod workflow;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use presenter::SelectionPresenter;
pub use request_response::{
    RegionEntry, RowOutcome, RowReport, SelectionOutcome, SheetView, TimeslotChosenRequest,
    TimeslotPrompt, WarehouseChoice, WarehouseChosenRequest, WarehousePrompt, WorkflowReport,
};
pub use workflow::{WorkflowOrchestrator, list_regions};
