use api_client::{ApiClient, ClientConfig};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Everything the stub backend saw, plus the data it serves.
#[derive(Debug)]
pub struct Backend {
    /// Body of `GET /api/senior/today`. Confirmations mark matching items taken.
    pub today: Value,
    pub dashboard: Value,
    /// When set, the endpoint answers with this status and an error body.
    pub today_failure: Option<StatusCode>,
    pub confirm_failure: Option<StatusCode>,
    pub dashboard_failure: Option<StatusCode>,
    pub today_queries: Vec<HashMap<String, String>>,
    pub dashboard_queries: Vec<HashMap<String, String>>,
    pub confirm_bodies: Vec<Value>,
}

impl Default for Backend {
    fn default() -> Self {
        Self {
            today: example_today(),
            dashboard: example_dashboard(),
            today_failure: None,
            confirm_failure: None,
            dashboard_failure: None,
            today_queries: Vec::new(),
            dashboard_queries: Vec::new(),
            confirm_bodies: Vec::new(),
        }
    }
}

pub type Shared = Arc<Mutex<Backend>>;

/// Three doses: A taken at 08:00, B pending at 20:00, C pending at 12:00.
pub fn example_today() -> Value {
    json!({
        "taken": 1,
        "total_doses": 3,
        "items": [
            {"medication_id": "A", "scheduled_time": "2024-01-01T08:00:00Z", "status": "taken"},
            {"medication_id": "B", "scheduled_time": "2024-01-01T20:00:00Z", "status": "pending"},
            {"medication_id": "C", "scheduled_time": "2024-01-01T12:00:00Z", "status": "pending"}
        ]
    })
}

pub fn example_dashboard() -> Value {
    json!({
        "history": [
            {"id": 11, "medication_id": 1, "scheduled_time": "2024-01-01T08:00:00Z", "status": "taken"},
            {"id": 12, "medication_id": 2, "scheduled_time": null, "status": "missed"}
        ],
        "missed": [
            {"id": 12, "medication_id": 2, "scheduled_time": null, "status": "missed"}
        ],
        "inventory_alerts": [
            {"medication_id": 2, "name": "Lisinopril", "current_count": 1, "low_threshold": 5}
        ]
    })
}

async fn today(
    State(backend): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let mut backend = backend.lock().unwrap();
    backend.today_queries.push(query);
    match backend.today_failure {
        Some(status) => (status, Json(json!({"detail": "stub failure"}))),
        None => (StatusCode::OK, Json(backend.today.clone())),
    }
}

async fn confirm(
    State(backend): State<Shared>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut backend = backend.lock().unwrap();
    backend.confirm_bodies.push(body.clone());
    if let Some(status) = backend.confirm_failure {
        return (status, Json(json!({"detail": "stub failure"})));
    }

    let mut newly_taken = 0;
    if let Some(items) = backend.today["items"].as_array_mut() {
        for item in items.iter_mut() {
            if item["medication_id"] == body["medication_id"]
                && item["scheduled_time"] == body["scheduled_time_iso"]
                && item["status"] != "taken"
            {
                item["status"] = json!("taken");
                newly_taken += 1;
            }
        }
    }
    let taken = backend.today["taken"].as_i64().unwrap_or(0) + newly_taken;
    backend.today["taken"] = json!(taken);

    (StatusCode::OK, Json(json!({"ok": true})))
}

async fn dashboard(
    State(backend): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let mut backend = backend.lock().unwrap();
    backend.dashboard_queries.push(query);
    match backend.dashboard_failure {
        Some(status) => (status, Json(json!({"detail": "stub failure"}))),
        None => (StatusCode::OK, Json(backend.dashboard.clone())),
    }
}

/// Serve a stub of the adherence backend on an ephemeral local port and
/// return a client pointed at it together with the shared backend state.
pub async fn stub_backend(backend: Backend) -> (ApiClient, Shared) {
    let shared: Shared = Arc::new(Mutex::new(backend));

    let router = Router::new()
        .route("/api/senior/today", get(today))
        .route("/api/senior/confirm", post(confirm))
        .route("/api/caregiver/dashboard", get(dashboard))
        .with_state(shared.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("Stub backend has no address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub backend crashed");
    });

    let config = ClientConfig::new(format!("http://{}/", addr));
    (ApiClient::new(&config), shared)
}

/// A client whose base URL refuses connections.
pub fn unreachable_client() -> ApiClient {
    ApiClient::new(&ClientConfig::new("http://127.0.0.1:1"))
}
