use api_client::{ApiClient, ClientConfig};
use axum::{
    extract::State,
    http::Uri,
    routing::{get, post},
    Json, Router,
};
use dioxus::prelude::*;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Render a root component to HTML without a browser.
pub fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Drive effects and spawned requests until the dom stops producing work.
pub async fn run_until_idle(dom: &mut VirtualDom) {
    dom.render_immediate_to_vec();
    for _ in 0..50 {
        let work = tokio::time::timeout(Duration::from_millis(250), dom.wait_for_work());
        if work.await.is_err() {
            break;
        }
        dom.render_immediate_to_vec();
    }
}

#[derive(Debug, Default)]
struct Served {
    today: Value,
    requests: Vec<String>,
}

/// Minimal adherence backend recording every request as `METHOD path?query`,
/// with the JSON body appended for confirmations.
#[derive(Clone)]
pub struct StubBackend {
    served: Arc<Mutex<Served>>,
    config: ClientConfig,
}

impl StubBackend {
    pub async fn start(today: Value) -> Self {
        let served = Arc::new(Mutex::new(Served {
            today,
            requests: Vec::new(),
        }));

        let router = Router::new()
            .route("/api/senior/today", get(today_status))
            .route("/api/senior/confirm", post(confirm))
            .route("/api/caregiver/dashboard", get(dashboard))
            .with_state(served.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().expect("Stub backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Stub backend crashed");
        });

        Self {
            served,
            config: ClientConfig::new(format!("http://{addr}")),
        }
    }

    pub fn config(&self) -> ClientConfig {
        self.config.clone()
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.config)
    }

    pub fn requests(&self) -> Vec<String> {
        self.served.lock().unwrap().requests.clone()
    }

    /// Requests whose path starts with `prefix`, e.g. `"GET /api/senior/today"`.
    pub fn count(&self, prefix: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.starts_with(prefix))
            .count()
    }
}

fn record(served: &Mutex<Served>, method: &str, uri: &Uri) {
    served
        .lock()
        .unwrap()
        .requests
        .push(format!("{method} {uri}"));
}

async fn today_status(State(served): State<Arc<Mutex<Served>>>, uri: Uri) -> Json<Value> {
    record(&served, "GET", &uri);
    let today = served.lock().unwrap().today.clone();
    Json(today)
}

async fn confirm(
    State(served): State<Arc<Mutex<Served>>>,
    uri: Uri,
    Json(body): Json<Value>,
) -> Json<Value> {
    served
        .lock()
        .unwrap()
        .requests
        .push(format!("POST {uri} {body}"));
    Json(json!({"ok": true}))
}

async fn dashboard(State(served): State<Arc<Mutex<Served>>>, uri: Uri) -> Json<Value> {
    record(&served, "GET", &uri);
    Json(json!({"history": [], "missed": [], "inventory_alerts": []}))
}

/// One pending dose at noon for medication "C", nothing taken yet.
pub fn one_pending_today() -> Value {
    json!({
        "taken": 0,
        "total_doses": 1,
        "items": [
            {"medication_id": "C", "scheduled_time": "2024-01-01T12:00:00Z", "status": "pending"}
        ]
    })
}

pub fn all_taken_today() -> Value {
    json!({
        "taken": 1,
        "total_doses": 1,
        "items": [
            {"medication_id": "A", "scheduled_time": "2024-01-01T08:00:00Z", "status": "taken"}
        ]
    })
}
