use serde::{Deserialize, Serialize};

use crate::common::Identifier;
use crate::dose::DoseStatus;

/// A past dose outcome shown to caregivers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Backend-assigned id, used as the list key.
    pub id: Identifier,
    pub medication_id: Identifier,
    #[serde(default)]
    pub scheduled_time: Option<String>,
    pub status: DoseStatus,
}

/// A medication whose remaining count is at or below its low threshold.
///
/// The backend decides which medications are flagged; the client only displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryAlert {
    pub medication_id: Identifier,
    #[serde(alias = "display_name")]
    pub name: String,
    #[serde(alias = "count")]
    pub current_count: i64,
    #[serde(alias = "threshold")]
    pub low_threshold: i64,
}

/// Response body of `GET /api/caregiver/dashboard`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Last 30 days.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    /// Last 7 days.
    #[serde(default)]
    pub missed: Vec<HistoryEntry>,
    #[serde(default)]
    pub inventory_alerts: Vec<InventoryAlert>,
}
