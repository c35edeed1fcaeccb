// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::json;
use supply_plan_domain::{DraftId, Timeslot, TimeslotWindow, WarehouseId};

use crate::tests::helpers::{RecordingSleeper, ScriptedTransport, create_test_client};
use crate::{CoreError, SellerClient, TimeslotInfoResponse, TimeslotLookup};

const TWO_BY_TWO: &str = r#"{
    "drop_off_warehouse_timeslots": [
        {"drop_off_warehouse_id": 10, "days": [
            {"timeslots": [{"from_in_timezone": "2026-01-20T09:00:00Z", "to_in_timezone": "2026-01-20T10:00:00Z"}]},
            {"timeslots": [{"from_in_timezone": "2026-01-21T09:00:00Z", "to_in_timezone": "2026-01-21T10:00:00Z"}]}
        ]},
        {"drop_off_warehouse_id": 20, "days": [
            {"timeslots": [{"from_in_timezone": "2026-01-20T12:00:00Z", "to_in_timezone": "2026-01-20T13:00:00Z"}]},
            {"timeslots": [{"from_in_timezone": "2026-01-21T12:00:00Z", "to_in_timezone": "2026-01-21T13:00:00Z"}]}
        ]}
    ]
}"#;

fn create_test_window() -> TimeslotWindow {
    TimeslotWindow {
        date_from: String::from("2026-01-19T08:00:00Z"),
        date_to: String::from("2026-01-26T08:00:00Z"),
    }
}

#[test]
fn test_flatten_yields_one_entry_per_slot_with_warehouse() {
    let response: TimeslotInfoResponse = serde_json::from_str(TWO_BY_TWO).unwrap();

    let slots: Vec<Timeslot> = response.flatten();

    assert_eq!(slots.len(), 4);
    let warehouses: Vec<Option<WarehouseId>> = slots.iter().map(|s| s.warehouse_id).collect();
    assert_eq!(
        warehouses,
        vec![
            Some(WarehouseId::new(10)),
            Some(WarehouseId::new(10)),
            Some(WarehouseId::new(20)),
            Some(WarehouseId::new(20)),
        ]
    );
    assert_eq!(slots[2].from, "2026-01-20T12:00:00Z");
    assert_eq!(slots[2].to, "2026-01-20T13:00:00Z");
}

#[test]
fn test_flatten_is_idempotent() {
    let response: TimeslotInfoResponse = serde_json::from_str(TWO_BY_TWO).unwrap();
    assert_eq!(response.flatten(), response.flatten());
}

#[test]
fn test_flatten_tolerates_missing_levels() {
    let response: TimeslotInfoResponse = serde_json::from_str(
        r#"{"drop_off_warehouse_timeslots": [{"days": null}, {"days": [{}]}]}"#,
    )
    .unwrap();
    assert!(response.flatten().is_empty());
}

#[tokio::test]
async fn test_fetch_timeslots_sends_window_and_keeps_raw_body() {
    let transport: ScriptedTransport =
        ScriptedTransport::statuses(&[(503, "busy"), (200, TWO_BY_TWO)]);
    let sleeper: RecordingSleeper = RecordingSleeper::default();
    let client: SellerClient = create_test_client(&transport, &sleeper);

    let lookup: TimeslotLookup = client
        .fetch_timeslots(DraftId::new(555), WarehouseId::new(99), create_test_window())
        .await
        .unwrap();

    assert_eq!(lookup.slots.len(), 4);
    assert_eq!(lookup.raw_response, TWO_BY_TWO);
    assert_eq!(sleeper.sleeps().len(), 1);
    assert_eq!(
        transport.requests()[1].body,
        json!({
            "date_from": "2026-01-19T08:00:00Z",
            "date_to": "2026-01-26T08:00:00Z",
            "draft_id": 555,
            "warehouse_ids": [99]
        })
    );
}

#[tokio::test]
async fn test_fetch_timeslots_empty_response_is_an_error() {
    let transport: ScriptedTransport =
        ScriptedTransport::statuses(&[(200, r#"{"drop_off_warehouse_timeslots":[]}"#)]);
    let sleeper: RecordingSleeper = RecordingSleeper::default();
    let client: SellerClient = create_test_client(&transport, &sleeper);

    let result: Result<TimeslotLookup, CoreError> = client
        .fetch_timeslots(DraftId::new(555), WarehouseId::new(99), create_test_window())
        .await;

    assert_eq!(result, Err(CoreError::NoTimeslotsAvailable));
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_fetch_timeslots_gives_up_after_three_attempts() {
    let transport: ScriptedTransport =
        ScriptedTransport::statuses(&[(500, "a"), (500, "b"), (500, "c")]);
    let sleeper: RecordingSleeper = RecordingSleeper::default();
    let client: SellerClient = create_test_client(&transport, &sleeper);

    let result: Result<TimeslotLookup, CoreError> = client
        .fetch_timeslots(DraftId::new(555), WarehouseId::new(99), create_test_window())
        .await;

    assert_eq!(
        result,
        Err(CoreError::RetriesExhausted {
            attempts: 3,
            last_error: String::from("API error 500: c"),
        })
    );
    assert_eq!(sleeper.sleeps().len(), 2);
}
