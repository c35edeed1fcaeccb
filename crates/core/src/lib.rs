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

mod client;
mod error;
mod poller;
mod retry;
mod timeslots;
mod transport;
mod wire;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use client::{Credentials, DEFAULT_BASE_URL, SellerClient};
pub use error::CoreError;
pub use poller::{CalculationOutcome, PollStep, classify};
pub use retry::{RetryOn, RetryPolicies, RetryPolicy, retry_call};
pub use timeslots::TimeslotLookup;
pub use transport::{HttpRequest, HttpResponse, Sleeper, TokioSleeper, Transport};
pub use wire::{
    CalculatedWarehouse, ClusterInfo, ClusterListRequest, ClusterListResponse, ClusterRecord,
    DayTimeslots, DraftCreateRequest, DraftCreateResponse, DraftInfo, DraftInfoRequest, DraftItem,
    Endpoint, SlotWindow, SupplyWarehouse, TimeslotInfoRequest, TimeslotInfoResponse,
    WarehouseRef, WarehouseTimeslots,
};
