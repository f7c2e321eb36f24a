use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::common::{parse_timestamp, Identifier};

/// Status of a single scheduled dose as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoseStatus {
    Pending,
    Taken,
    Missed,
    /// Any status string this client does not know about.
    #[serde(other)]
    Unknown,
}

impl DoseStatus {
    /// Human-readable label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            DoseStatus::Pending => "Pending",
            DoseStatus::Taken => "Taken",
            DoseStatus::Missed => "Missed",
            DoseStatus::Unknown => "Unknown",
        }
    }

    pub fn is_taken(&self) -> bool {
        matches!(self, DoseStatus::Taken)
    }
}

/// One scheduled administration of a medication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseItem {
    pub medication_id: Identifier,
    /// ISO-8601 timestamp exactly as sent by the backend.
    pub scheduled_time: String,
    pub status: DoseStatus,
}

impl DoseItem {
    pub fn scheduled_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.scheduled_time)
    }
}

/// Current-day adherence status for one patient.
///
/// Response body of `GET /api/senior/today`. Replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyStatus {
    #[serde(default)]
    pub taken: u32,
    #[serde(default)]
    pub total_doses: u32,
    #[serde(default)]
    pub items: Vec<DoseItem>,
}

impl DailyStatus {
    /// True when no item is left unconfirmed.
    pub fn all_confirmed(&self) -> bool {
        next_pending_dose(self).is_none()
    }

    /// Fraction of today's doses taken, in percent (0 when nothing is scheduled).
    pub fn taken_percent(&self) -> f64 {
        if self.total_doses == 0 {
            return 0.0;
        }
        let pct = f64::from(self.taken) / f64::from(self.total_doses) * 100.0;
        pct.min(100.0)
    }
}

/// Ordering key: parseable times first, by instant; unparseable times last.
fn schedule_key(item: &DoseItem) -> (bool, Option<DateTime<FixedOffset>>) {
    match item.scheduled_at() {
        Some(at) => (false, Some(at)),
        None => (true, None),
    }
}

/// The earliest dose of the day that has not been taken yet.
///
/// Items with equal scheduled times resolve to the one that appears first in
/// the backend's list.
pub fn next_pending_dose(status: &DailyStatus) -> Option<&DoseItem> {
    status
        .items
        .iter()
        .filter(|item| !item.status.is_taken())
        .min_by_key(|item| schedule_key(item))
}

/// Request body for `POST /api/senior/confirm`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmDoseRequest {
    pub user_id: Identifier,
    pub medication_id: Identifier,
    pub scheduled_time_iso: String,
}

impl ConfirmDoseRequest {
    /// Build the confirmation for `dose`, echoing its medication id and
    /// scheduled time verbatim.
    pub fn for_dose(user_id: &str, dose: &DoseItem) -> Self {
        Self {
            user_id: user_identifier(user_id),
            medication_id: dose.medication_id.clone(),
            scheduled_time_iso: dose.scheduled_time.clone(),
        }
    }
}

/// Interpret a user-typed identifier: integers are sent as JSON numbers,
/// anything else as a string.
pub fn user_identifier(input: &str) -> Identifier {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(n) => Identifier::Number(n),
        Err(_) => Identifier::Text(trimmed.to_string()),
    }
}
