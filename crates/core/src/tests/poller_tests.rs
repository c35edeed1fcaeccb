// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;
use supply_plan_domain::{DomainError, OperationId};

use crate::tests::helpers::{
    RecordingSleeper, SUCCESS_BODY, ScriptedTransport, create_test_client, draft_info_body,
};
use crate::{CalculationOutcome, CoreError, DraftInfo, PollStep, SellerClient, classify};

const IN_PROGRESS: &str = "CALCULATION_STATUS_IN_PROGRESS";

fn operation() -> OperationId {
    OperationId::new("op1")
}

#[tokio::test]
async fn test_poll_returns_success_payload_after_two_sleeps() {
    let pending: String = draft_info_body(IN_PROGRESS);
    let transport: ScriptedTransport = ScriptedTransport::statuses(&[
        (200, pending.as_str()),
        (200, pending.as_str()),
        (200, SUCCESS_BODY),
    ]);
    let sleeper: RecordingSleeper = RecordingSleeper::default();
    let client: SellerClient = create_test_client(&transport, &sleeper);

    let info: DraftInfo = client.poll_calculation(&operation()).await.unwrap();

    assert_eq!(info.clusters.len(), 1);
    assert_eq!(info.warehouse_options()[0].label(), "W1 (ID: 99)");
    assert_eq!(
        sleeper.sleeps(),
        vec![Duration::from_millis(5000), Duration::from_millis(5000)]
    );
    assert_eq!(transport.call_count(), 3);
    assert!(
        transport
            .requests()
            .iter()
            .all(|r| r.url.ends_with("/v1/draft/create/info"))
    );
}

#[tokio::test]
async fn test_poll_failed_status_aggregates_reasons() {
    let body: &str = r#"{
        "status": "CALCULATION_STATUS_FAILED",
        "errors": [{"error_message": "x", "items_validation": [{"sku": 1, "reasons": ["bad"]}]}]
    }"#;
    let transport: ScriptedTransport = ScriptedTransport::statuses(&[(200, body)]);
    let sleeper: RecordingSleeper = RecordingSleeper::default();
    let client: SellerClient = create_test_client(&transport, &sleeper);

    let err: CoreError = client.poll_calculation(&operation()).await.unwrap_err();

    match &err {
        CoreError::CalculationFailed(message) => {
            assert!(message.contains('x'));
            assert!(message.contains("SKU 1: bad"));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(transport.call_count(), 1);
    assert!(sleeper.sleeps().is_empty());
}

#[tokio::test]
async fn test_poll_unknown_status_stops_immediately() {
    let unknown: String = draft_info_body("CALCULATION_STATUS_MYSTERY");
    let transport: ScriptedTransport =
        ScriptedTransport::statuses(&[(200, unknown.as_str()), (200, SUCCESS_BODY)]);
    let sleeper: RecordingSleeper = RecordingSleeper::default();
    let client: SellerClient = create_test_client(&transport, &sleeper);

    let result: Result<DraftInfo, CoreError> = client.poll_calculation(&operation()).await;

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::UnknownCalculationStatus(String::from("CALCULATION_STATUS_MYSTERY"))
        ))
    );
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_poll_times_out_while_in_progress() {
    let pending: String = draft_info_body(IN_PROGRESS);
    let transport: ScriptedTransport = ScriptedTransport::statuses(&[
        (200, pending.as_str()),
        (200, pending.as_str()),
        (200, pending.as_str()),
        (200, pending.as_str()),
        (200, pending.as_str()),
        (200, SUCCESS_BODY),
    ]);
    let sleeper: RecordingSleeper = RecordingSleeper::default();
    let client: SellerClient = create_test_client(&transport, &sleeper);

    let result: Result<DraftInfo, CoreError> = client.poll_calculation(&operation()).await;

    assert_eq!(
        result,
        Err(CoreError::PollTimeout {
            operation_id: operation(),
            attempts: 5,
        })
    );
    assert_eq!(transport.call_count(), 5);
    assert_eq!(sleeper.sleeps().len(), 4);
}

#[tokio::test]
async fn test_poll_retries_http_errors_then_succeeds() {
    let transport: ScriptedTransport =
        ScriptedTransport::statuses(&[(500, "oops"), (200, SUCCESS_BODY)]);
    let sleeper: RecordingSleeper = RecordingSleeper::default();
    let client: SellerClient = create_test_client(&transport, &sleeper);

    let info: DraftInfo = client.poll_calculation(&operation()).await.unwrap();

    assert_eq!(info.status, "CALCULATION_STATUS_SUCCESS");
    assert_eq!(sleeper.sleeps().len(), 1);
}

#[tokio::test]
async fn test_poll_exhausts_on_persistent_errors() {
    let transport: ScriptedTransport = ScriptedTransport::statuses(&[
        (500, "oops"),
        (500, "oops"),
        (500, "oops"),
        (500, "oops"),
        (500, "oops"),
    ]);
    let sleeper: RecordingSleeper = RecordingSleeper::default();
    let client: SellerClient = create_test_client(&transport, &sleeper);

    let err: CoreError = client.poll_calculation(&operation()).await.unwrap_err();

    assert_eq!(
        err,
        CoreError::RetriesExhausted {
            attempts: 5,
            last_error: String::from("API error 500: oops"),
        }
    );
}

#[test]
fn test_classify_maps_each_status() {
    let pending: DraftInfo = serde_json::from_str(&draft_info_body(IN_PROGRESS)).unwrap();
    assert_eq!(classify(pending), Ok(PollStep::Pending));

    let success: DraftInfo = serde_json::from_str(SUCCESS_BODY).unwrap();
    assert!(matches!(
        classify(success),
        Ok(PollStep::Done(CalculationOutcome::Success(_)))
    ));

    let failed: DraftInfo =
        serde_json::from_str(&draft_info_body("CALCULATION_STATUS_FAILED")).unwrap();
    assert_eq!(
        classify(failed),
        Ok(PollStep::Done(CalculationOutcome::Failed(String::from(
            "Errors: "
        ))))
    );
}
