// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage for the supply planning workflow.
//!
//! ## Sheet
//!
//! The workflow reads its inputs from, and reports progress into, a grid
//! of text cells laid out like the operator's planning spreadsheet (see
//! [`layout`]). Two stores implement [`Sheet`]:
//!
//! - [`MemorySheet`] for tests and ephemeral runs
//! - [`CsvSheet`] backed by a headerless CSV file, rewritten on every change
//!
//! ## Pending selections
//!
//! [`PendingSelections`] holds the operator choices the workflow is
//! suspended on. Nothing in it is persisted across restarts.

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

mod csv_sheet;
mod error;
pub mod layout;
mod pending;
mod sheet;

#[cfg(test)]
mod tests;

pub use csv_sheet::CsvSheet;
pub use error::PersistenceError;
pub use layout::{Cell, Column};
pub use pending::{PendingEntry, PendingSelection, PendingSelections, SelectionToken};
pub use sheet::{MemorySheet, Sheet};
