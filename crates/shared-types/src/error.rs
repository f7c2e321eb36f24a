use serde::{Deserialize, Serialize};
use std::fmt;

/// The message shown to users for every failed request.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed. Please try again.";

/// A backend call that did not succeed.
///
/// This is the only error the client knows about. Non-2xx statuses, network
/// failures and undecodable bodies all collapse into it; the extra fields
/// exist for logging, not for branching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestError {
    /// API path that was called, e.g. `/api/senior/today`.
    pub endpoint: String,
    /// HTTP status when the server answered with a non-2xx code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub detail: String,
}

impl RequestError {
    pub fn status(endpoint: impl Into<String>, status: u16) -> Self {
        Self {
            endpoint: endpoint.into(),
            status: Some(status),
            detail: format!("server responded with status {}", status),
        }
    }

    pub fn transport(endpoint: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self {
            endpoint: endpoint.into(),
            status: None,
            detail: detail.to_string(),
        }
    }

    pub fn decode(endpoint: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self {
            endpoint: endpoint.into(),
            status: None,
            detail: format!("invalid response body: {}", detail),
        }
    }

    /// User-facing text. Identical for every failure.
    pub fn friendly_message(&self) -> &'static str {
        REQUEST_FAILED_MESSAGE
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request to {} failed: {}", self.endpoint, self.detail)
    }
}

impl std::error::Error for RequestError {}
