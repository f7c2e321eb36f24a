use api_client::{AdherenceApi, ApiClient, ClientConfig};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdRefreshCw;
use dioxus_free_icons::Icon;
use shared_types::{DashboardSnapshot, HistoryEntry, InventoryAlert};
use shared_ui::components::{
    Alert, AlertVariant, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, Input, PageActions, PageHeader, PageTitle,
    SkeletonList,
};

use crate::format_helpers::{dose_status_variant, format_optional_datetime};
use crate::resource::{use_async_resource, AsyncResource, ResourceStatus};

pub const HISTORY_EMPTY_TEXT: &str = "No history in the last 30 days.";
pub const MISSED_EMPTY_TEXT: &str = "No missed doses in the last 7 days.";
pub const INVENTORY_EMPTY_TEXT: &str = "No low inventory alerts.";
const ENTER_ID_TEXT: &str = "Enter a patient ID to load the dashboard.";

/// Fetch state and refresh action behind [`CaregiverView`].
#[derive(Clone, Copy)]
pub struct DashboardHandle {
    pub dashboard: AsyncResource<DashboardSnapshot>,
    /// Reload for the given identifier. Blank identifiers clear instead.
    pub refresh: Callback<String>,
}

/// Load the dashboard whenever `patient_id` changes.
pub fn use_dashboard(patient_id: Signal<String>) -> DashboardHandle {
    let api = use_context::<ApiClient>();
    let dashboard = use_async_resource::<DashboardSnapshot>();

    let refresh = use_callback(move |id: String| {
        let id = id.trim().to_string();
        if id.is_empty() {
            dashboard.clear();
            return;
        }
        let api = api.clone();
        dashboard.run(async move { api.caregiver_dashboard(&id).await });
    });

    use_effect(move || {
        let id = patient_id.read().clone();
        refresh.call(id);
    });

    DashboardHandle { dashboard, refresh }
}

/// Caregiver-facing view: read-only history, recent misses, and low-stock alerts.
#[component]
pub fn CaregiverView() -> Element {
    let config = use_context::<ClientConfig>();
    let mut patient_id = use_signal(|| config.default_user_id.clone());
    let DashboardHandle { dashboard, refresh } = use_dashboard(patient_id);

    let state = dashboard.snapshot();
    let loading = state.is_loading();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./views.css") }

        div { class: "view caregiver-view",
            PageHeader {
                PageTitle { subtitle: "Adherence overview", "Caregiver dashboard" }
                PageActions {
                    Input {
                        field_id: "caregiver-patient-id",
                        label: "Patient ID",
                        value: patient_id.read().clone(),
                        on_input: move |evt: FormEvent| patient_id.set(evt.value()),
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        busy: loading,
                        onclick: move |_| refresh.call(patient_id.peek().clone()),
                        Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 18, height: 18 }
                        "Refresh"
                    }
                }
            }

            match state.status() {
                ResourceStatus::Idle => rsx! {
                    Card { CardContent { p { class: "view-hint", "{ENTER_ID_TEXT}" } } }
                },
                ResourceStatus::Loading => rsx! {
                    div { class: "panel-grid view-loading",
                        for i in 0..3 {
                            Card { key: "{i}", CardContent { SkeletonList { rows: 4 } } }
                        }
                    }
                },
                ResourceStatus::Success(snapshot) => rsx! {
                    DashboardPanels { snapshot: snapshot.clone() }
                },
                ResourceStatus::Error { message, stale } => rsx! {
                    Alert { variant: AlertVariant::Error, "{message}" }
                    if let Some(snapshot) = stale {
                        DashboardPanels { snapshot: snapshot.clone() }
                    }
                },
            }
        }
    }
}

#[component]
fn DashboardPanels(snapshot: DashboardSnapshot) -> Element {
    rsx! {
        div { class: "panel-grid",
            MissedPanel { entries: snapshot.missed.clone() }
            InventoryPanel { alerts: snapshot.inventory_alerts.clone() }
            HistoryPanel { entries: snapshot.history.clone() }
        }
    }
}

#[component]
pub fn HistoryPanel(entries: Vec<HistoryEntry>) -> Element {
    rsx! {
        Card { class: "panel history-panel",
            CardHeader {
                CardTitle { count: entries.len(), "History" }
                CardDescription { "Last 30 days" }
            }
            CardContent {
                EntryList { entries: entries.clone(), empty_text: HISTORY_EMPTY_TEXT }
            }
        }
    }
}

#[component]
pub fn MissedPanel(entries: Vec<HistoryEntry>) -> Element {
    rsx! {
        Card { class: "panel missed-panel",
            CardHeader {
                CardTitle { count: entries.len(), "Missed doses" }
                CardDescription { "Last 7 days" }
            }
            CardContent {
                EntryList { entries: entries.clone(), empty_text: MISSED_EMPTY_TEXT }
            }
        }
    }
}

#[component]
fn EntryList(entries: Vec<HistoryEntry>, empty_text: &'static str) -> Element {
    if entries.is_empty() {
        return rsx! {
            p { class: "empty-state", "{empty_text}" }
        };
    }

    rsx! {
        ul { class: "entry-list",
            for entry in entries.iter().cloned() {
                EntryRow { key: "{entry.id}", entry: entry }
            }
        }
    }
}

#[component]
fn EntryRow(entry: HistoryEntry) -> Element {
    let when = format_optional_datetime(entry.scheduled_time.as_deref());
    let label = entry.status.label();

    rsx! {
        li { class: "entry-row",
            span { class: "entry-time", "{when}" }
            span { class: "entry-medication", "Medication {entry.medication_id}" }
            Badge { variant: dose_status_variant(entry.status), "{label}" }
        }
    }
}

#[component]
pub fn InventoryPanel(alerts: Vec<InventoryAlert>) -> Element {
    rsx! {
        Card { class: "panel inventory-panel",
            CardHeader {
                CardTitle { count: alerts.len(), "Inventory alerts" }
                CardDescription { "At or below refill threshold" }
            }
            CardContent {
                if alerts.is_empty() {
                    p { class: "empty-state", "{INVENTORY_EMPTY_TEXT}" }
                } else {
                    ul { class: "entry-list",
                        for alert in alerts.iter().cloned() {
                            InventoryRow { key: "{alert.medication_id}", alert: alert }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InventoryRow(alert: InventoryAlert) -> Element {
    let variant = if alert.current_count <= 0 {
        BadgeVariant::Danger
    } else {
        BadgeVariant::Warning
    };

    rsx! {
        li { class: "entry-row",
            span { class: "entry-medication", "{alert.name}" }
            span { class: "inventory-count",
                "{alert.current_count} / {alert.low_threshold}"
            }
            Badge { variant: variant, "Low" }
        }
    }
}
