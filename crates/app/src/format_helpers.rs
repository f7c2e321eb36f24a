//! Display formatting for backend timestamps and statuses.
//!
//! Times are shown in the offset the backend sent them in. Unparseable
//! values are shown as received rather than hidden.

use shared_types::{parse_timestamp, DoseStatus};
use shared_ui::BadgeVariant;

/// "8:00 AM"
pub fn format_time_of_day(iso: &str) -> String {
    match parse_timestamp(iso) {
        Some(at) => at.format("%-I:%M %p").to_string(),
        None => iso.to_string(),
    }
}

/// "Jan 1, 2024 8:00 AM"
pub fn format_datetime_human(iso: &str) -> String {
    match parse_timestamp(iso) {
        Some(at) => at.format("%b %-d, %Y %-I:%M %p").to_string(),
        None => iso.to_string(),
    }
}

/// Like [`format_datetime_human`] but for nullable history times.
pub fn format_optional_datetime(iso: Option<&str>) -> String {
    match iso {
        Some(s) if !s.trim().is_empty() => format_datetime_human(s),
        _ => "Unscheduled".to_string(),
    }
}

pub fn dose_status_variant(status: DoseStatus) -> BadgeVariant {
    match status {
        DoseStatus::Taken => BadgeVariant::Success,
        DoseStatus::Pending => BadgeVariant::Warning,
        DoseStatus::Missed => BadgeVariant::Danger,
        DoseStatus::Unknown => BadgeVariant::Neutral,
    }
}
