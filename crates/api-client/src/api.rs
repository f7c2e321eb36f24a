use serde::de::DeserializeOwned;
use shared_types::{ConfirmDoseRequest, DailyStatus, DashboardSnapshot, RequestError};

use crate::config::ClientConfig;

pub const TODAY_PATH: &str = "/api/senior/today";
pub const CONFIRM_PATH: &str = "/api/senior/confirm";
pub const DASHBOARD_PATH: &str = "/api/caregiver/dashboard";

/// Endpoints of the adherence backend consumed by the views.
///
/// Implemented over HTTP by [`ApiClient`]; tests substitute recording fakes.
#[allow(async_fn_in_trait)]
pub trait AdherenceApi {
    /// `GET /api/senior/today?user_id=..`
    async fn today_status(&self, user_id: &str) -> Result<DailyStatus, RequestError>;

    /// `POST /api/senior/confirm`. The response body is ignored.
    async fn confirm_dose(&self, request: &ConfirmDoseRequest) -> Result<(), RequestError>;

    /// `GET /api/caregiver/dashboard?patient_id=..`
    async fn caregiver_dashboard(&self, patient_id: &str)
        -> Result<DashboardSnapshot, RequestError>;
}

/// JSON-over-HTTP client for the adherence backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RequestError> {
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| RequestError::transport(path, e))?;

        let response = ensure_success(path, response)?;
        response
            .json::<T>()
            .await
            .map_err(|e| RequestError::decode(path, e))
    }
}

/// Treat every non-2xx status as a failed request. Error bodies are not read.
fn ensure_success(
    path: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, RequestError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RequestError::status(path, status.as_u16()))
    }
}

impl AdherenceApi for ApiClient {
    #[tracing::instrument(skip(self))]
    async fn today_status(&self, user_id: &str) -> Result<DailyStatus, RequestError> {
        let result = self
            .get_json::<DailyStatus>(TODAY_PATH, &[("user_id", user_id)])
            .await;
        match &result {
            Ok(status) => tracing::info!(
                taken = status.taken,
                total = status.total_doses,
                items = status.items.len(),
                "Loaded daily status"
            ),
            Err(e) => tracing::warn!(error = %e, "Failed to load daily status"),
        }
        result
    }

    #[tracing::instrument(skip(self), fields(medication_id = %request.medication_id))]
    async fn confirm_dose(&self, request: &ConfirmDoseRequest) -> Result<(), RequestError> {
        let response = self
            .http
            .post(self.url(CONFIRM_PATH))
            .json(request)
            .send()
            .await
            .map_err(|e| RequestError::transport(CONFIRM_PATH, e));

        match response.and_then(|r| ensure_success(CONFIRM_PATH, r)) {
            Ok(_) => {
                tracing::info!(scheduled = %request.scheduled_time_iso, "Dose confirmed");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to confirm dose");
                Err(e)
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn caregiver_dashboard(
        &self,
        patient_id: &str,
    ) -> Result<DashboardSnapshot, RequestError> {
        let result = self
            .get_json::<DashboardSnapshot>(DASHBOARD_PATH, &[("patient_id", patient_id)])
            .await;
        match &result {
            Ok(snapshot) => tracing::info!(
                history = snapshot.history.len(),
                missed = snapshot.missed.len(),
                alerts = snapshot.inventory_alerts.len(),
                "Loaded caregiver dashboard"
            ),
            Err(e) => tracing::warn!(error = %e, "Failed to load caregiver dashboard"),
        }
        result
    }
}
