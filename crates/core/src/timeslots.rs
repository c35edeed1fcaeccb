// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use supply_plan_domain::{DraftId, Timeslot, TimeslotWindow, WarehouseId};
use tracing::info;

use crate::client::{SellerClient, decode};
use crate::error::CoreError;
use crate::retry::retry_call;
use crate::wire::{Endpoint, TimeslotInfoRequest, TimeslotInfoResponse};

/// Result of a successful timeslot lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeslotLookup {
    /// The flattened slots, never empty.
    pub slots: Vec<Timeslot>,
    /// The raw response body, kept for the debug cell.
    pub raw_response: String,
}

impl SellerClient {
    /// Fetches the timeslots of `warehouse_id` for a draft within `window`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::RetriesExhausted` once attempts run out, or
    /// `CoreError::NoTimeslotsAvailable` if the response holds no slots.
    pub async fn fetch_timeslots(
        &self,
        draft_id: DraftId,
        warehouse_id: WarehouseId,
        window: TimeslotWindow,
    ) -> Result<TimeslotLookup, CoreError> {
        let request: TimeslotInfoRequest = TimeslotInfoRequest {
            date_from: window.date_from,
            date_to: window.date_to,
            draft_id,
            warehouse_ids: vec![warehouse_id],
        };
        let call: String = format!("draft/timeslot/info draft={draft_id} warehouse={warehouse_id}");

        let (parsed, raw_response): (TimeslotInfoResponse, String) = retry_call(
            &self.policies.timeslots,
            self.sleeper.as_ref(),
            &call,
            || self.post(Endpoint::DraftTimeslotInfo, &request),
            |body: &str| decode::<TimeslotInfoResponse>(body).map(|p| (p, body.to_string())),
        )
        .await?;

        let slots: Vec<Timeslot> = parsed.flatten();
        if slots.is_empty() {
            return Err(CoreError::NoTimeslotsAvailable);
        }

        info!(%draft_id, %warehouse_id, count = slots.len(), "Received timeslots");
        Ok(TimeslotLookup {
            slots,
            raw_response,
        })
    }
}
