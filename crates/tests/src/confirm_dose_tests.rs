use api_client::workflow::confirm_and_reload;
use api_client::AdherenceApi;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{next_pending_dose, ConfirmDoseRequest};

use crate::common::{stub_backend, Backend};

#[tokio::test]
async fn confirm_posts_expected_body() {
    let (client, backend) = stub_backend(Backend::default()).await;

    let status = client.today_status("1").await.unwrap();
    let next = next_pending_dose(&status).unwrap();
    client
        .confirm_dose(&ConfirmDoseRequest::for_dose("1", next))
        .await
        .unwrap();

    let backend = backend.lock().unwrap();
    assert_eq!(
        backend.confirm_bodies,
        vec![json!({
            "user_id": 1,
            "medication_id": "C",
            "scheduled_time_iso": "2024-01-01T12:00:00Z"
        })]
    );
}

#[tokio::test]
async fn confirm_then_reload_calls_today_exactly_once() {
    let (client, backend) = stub_backend(Backend::default()).await;

    let before = client.today_status("1").await.unwrap();
    let dose = next_pending_dose(&before).unwrap().clone();
    let after = confirm_and_reload(&client, "1", &dose).await.unwrap();

    // One initial load plus one reload.
    assert_eq!(backend.lock().unwrap().today_queries.len(), 2);
    assert_eq!(after.taken, 2);

    // The next pending dose moves on to the evening one.
    let next = next_pending_dose(&after).unwrap();
    assert_eq!(next.medication_id.to_string(), "B");
}

#[tokio::test]
async fn failed_confirm_does_not_reload() {
    let backend = Backend {
        confirm_failure: Some(StatusCode::UNPROCESSABLE_ENTITY),
        ..Default::default()
    };
    let (client, backend) = stub_backend(backend).await;

    let before = client.today_status("1").await.unwrap();
    let dose = next_pending_dose(&before).unwrap().clone();
    let err = confirm_and_reload(&client, "1", &dose).await.unwrap_err();

    assert_eq!(err.status, Some(422));
    assert_eq!(err.endpoint, "/api/senior/confirm");
    assert_eq!(backend.lock().unwrap().today_queries.len(), 1);
}

#[tokio::test]
async fn confirm_ignores_response_body() {
    let (client, _backend) = stub_backend(Backend::default()).await;

    let status = client.today_status("1").await.unwrap();
    let next = next_pending_dose(&status).unwrap();
    // The stub answers with an unrelated JSON object; success is all that matters.
    assert!(client
        .confirm_dose(&ConfirmDoseRequest::for_dose("1", next))
        .await
        .is_ok());
}
