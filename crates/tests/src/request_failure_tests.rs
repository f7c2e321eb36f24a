use api_client::AdherenceApi;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::REQUEST_FAILED_MESSAGE;

use crate::common::{stub_backend, unreachable_client, Backend};

#[tokio::test]
async fn client_errors_are_request_failures() {
    let backend = Backend {
        today_failure: Some(StatusCode::NOT_FOUND),
        ..Default::default()
    };
    let (client, _backend) = stub_backend(backend).await;

    let err = client.today_status("1").await.unwrap_err();
    assert_eq!(err.status, Some(404));
    assert_eq!(err.friendly_message(), REQUEST_FAILED_MESSAGE);
}

#[tokio::test]
async fn server_errors_are_request_failures() {
    let backend = Backend {
        dashboard_failure: Some(StatusCode::INTERNAL_SERVER_ERROR),
        ..Default::default()
    };
    let (client, _backend) = stub_backend(backend).await;

    let err = client.caregiver_dashboard("1").await.unwrap_err();
    assert_eq!(err.status, Some(500));
    assert_eq!(err.endpoint, "/api/caregiver/dashboard");
    assert_eq!(err.friendly_message(), REQUEST_FAILED_MESSAGE);
}

#[tokio::test]
async fn unreachable_backend_is_a_request_failure() {
    let client = unreachable_client();

    let err = client.today_status("1").await.unwrap_err();
    assert_eq!(err.status, None);
    assert_eq!(err.friendly_message(), REQUEST_FAILED_MESSAGE);
}

#[tokio::test]
async fn malformed_body_is_a_request_failure() {
    let backend = Backend {
        today: json!("definitely not a status"),
        ..Default::default()
    };
    let (client, _backend) = stub_backend(backend).await;

    let err = client.today_status("1").await.unwrap_err();
    assert_eq!(err.status, None);
    assert!(err.detail.starts_with("invalid response body"));
    assert_eq!(err.friendly_message(), REQUEST_FAILED_MESSAGE);
}
