use api_client::workflow::confirm_and_reload;
use api_client::{AdherenceApi, ApiClient, ClientConfig};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdRefreshCw};
use dioxus_free_icons::Icon;
use shared_types::{next_pending_dose, DailyStatus, DoseItem};
use shared_ui::components::{
    Alert, AlertVariant, Badge, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, Input, PageActions, PageHeader, PageTitle, ProgressBar, SkeletonList,
};

use crate::format_helpers::{dose_status_variant, format_time_of_day};
use crate::resource::{use_async_resource, AsyncResource, ResourceState, ResourceStatus};

pub const ALL_CONFIRMED_TEXT: &str = "All of today's doses are confirmed.";
pub const NO_DOSES_TEXT: &str = "No doses are scheduled for today.";
const ENTER_ID_TEXT: &str = "Enter a patient ID to see today's doses.";

/// Today's status together with the patient it was loaded for.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientDay {
    pub user_id: String,
    pub status: DailyStatus,
}

/// The patient and dose a Confirm click would submit.
///
/// `None` before the first load, while a request is in flight, when every
/// dose is already taken, and when the snapshot on screen belongs to a
/// different patient than `current_id`.
pub fn confirm_target(
    state: &ResourceState<PatientDay>,
    current_id: &str,
) -> Option<(String, DoseItem)> {
    if state.is_loading() {
        return None;
    }
    let day = state.data()?;
    if day.user_id != current_id.trim() {
        return None;
    }
    let dose = next_pending_dose(&day.status)?;
    Some((day.user_id.clone(), dose.clone()))
}

/// Fetch state and actions behind [`PatientView`].
#[derive(Clone, Copy)]
pub struct PatientDayHandle {
    pub day: AsyncResource<PatientDay>,
    /// Reload for the given identifier. Blank identifiers clear instead.
    pub load: Callback<String>,
    /// Confirm the next pending dose, then reload.
    pub confirm: Callback<()>,
}

/// Load today's status whenever `user_id` changes and expose confirm.
pub fn use_patient_day(user_id: Signal<String>) -> PatientDayHandle {
    let api = use_context::<ApiClient>();
    let day = use_async_resource::<PatientDay>();

    let load_api = api.clone();
    let load = use_callback(move |id: String| {
        let id = id.trim().to_string();
        if id.is_empty() {
            day.clear();
            return;
        }
        let api = load_api.clone();
        day.run(async move {
            let status = api.today_status(&id).await?;
            Ok(PatientDay {
                user_id: id,
                status,
            })
        });
    });

    // Fetch on mount and after every identifier edit.
    use_effect(move || {
        let id = user_id.read().clone();
        load.call(id);
    });

    let confirm = use_callback(move |_: ()| {
        let current = user_id.peek().clone();
        let Some((id, dose)) = day.peek_with(|state| confirm_target(state, &current)) else {
            tracing::debug!("Confirm ignored, nothing pending for this patient");
            return;
        };
        let api = api.clone();
        day.run(async move {
            let status = confirm_and_reload(&api, &id, &dose).await?;
            Ok(PatientDay {
                user_id: id,
                status,
            })
        });
    });

    PatientDayHandle { day, load, confirm }
}

/// Patient-facing view: today's doses and a one-tap confirmation of the next one.
#[component]
pub fn PatientView() -> Element {
    let config = use_context::<ClientConfig>();
    let mut user_id = use_signal(|| config.default_user_id.clone());
    let PatientDayHandle { day, load, confirm } = use_patient_day(user_id);

    let state = day.snapshot();
    let loading = state.is_loading();
    let can_confirm = confirm_target(&state, &user_id.read()).is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./views.css") }

        div { class: "view patient-view",
            PageHeader {
                PageTitle { subtitle: "Today's medication schedule", "My doses" }
                PageActions {
                    Input {
                        field_id: "patient-user-id",
                        label: "Patient ID",
                        value: user_id.read().clone(),
                        on_input: move |evt: FormEvent| user_id.set(evt.value()),
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        busy: loading,
                        onclick: move |_| load.call(user_id.peek().clone()),
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
                    Card { class: "view-loading", CardContent { SkeletonList { rows: 3 } } }
                },
                ResourceStatus::Success(day) => rsx! {
                    PatientDayPanels {
                        status: day.status.clone(),
                        can_confirm: can_confirm,
                        on_confirm: move |_| confirm.call(()),
                    }
                },
                ResourceStatus::Error { message, stale } => rsx! {
                    Alert { variant: AlertVariant::Error, "{message}" }
                    if let Some(day) = stale {
                        PatientDayPanels {
                            status: day.status.clone(),
                            can_confirm: can_confirm,
                            on_confirm: move |_| confirm.call(()),
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn PatientDayPanels(
    status: DailyStatus,
    can_confirm: bool,
    on_confirm: EventHandler<()>,
) -> Element {
    let next = next_pending_dose(&status).cloned();

    rsx! {
        DailySummary {
            taken: status.taken,
            total: status.total_doses,
            percent: status.taken_percent(),
        }
        NextDoseCard {
            next: next,
            can_confirm: can_confirm,
            on_confirm: move |_| on_confirm.call(()),
        }
        DoseList { items: status.items.clone() }
    }
}

#[component]
fn DailySummary(taken: u32, total: u32, percent: f64) -> Element {
    rsx! {
        Card {
            ProgressBar {
                label: "Taken today",
                value_text: "{taken} / {total}",
                percent: percent,
            }
        }
    }
}

/// The earliest unconfirmed dose with its Confirm button.
#[component]
pub fn NextDoseCard(
    #[props(!optional)] next: Option<DoseItem>,
    can_confirm: bool,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        Card { class: "next-dose-card",
            CardHeader {
                CardTitle { "Next dose" }
            }
            CardContent {
                match &next {
                    Some(dose) => {
                        let time = format_time_of_day(&dose.scheduled_time);
                        rsx! {
                            p { class: "next-dose-medication", "Medication {dose.medication_id}" }
                            p { class: "next-dose-time", "Scheduled for {time}" }
                        }
                    }
                    None => rsx! {
                        Alert { "{ALL_CONFIRMED_TEXT}" }
                    },
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: next.is_none() || !can_confirm,
                    onclick: move |_| on_confirm.call(()),
                    Icon::<LdCheck> { icon: LdCheck, width: 20, height: 20 }
                    "I took it"
                }
            }
        }
    }
}

/// Today's doses in the order the backend listed them.
#[component]
pub fn DoseList(items: Vec<DoseItem>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { count: items.len(), "Today" }
                CardDescription { "Every dose scheduled for today." }
            }
            CardContent {
                if items.is_empty() {
                    p { class: "empty-state", "{NO_DOSES_TEXT}" }
                } else {
                    ul { class: "dose-list",
                        for (i, item) in items.iter().cloned().enumerate() {
                            DoseRow { key: "{i}", item: item }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DoseRow(item: DoseItem) -> Element {
    let time = format_time_of_day(&item.scheduled_time);
    let label = item.status.label();

    rsx! {
        li { class: "dose-row",
            span { class: "dose-time", "{time}" }
            span { class: "dose-medication", "Medication {item.medication_id}" }
            Badge { variant: dose_status_variant(item.status), "{label}" }
        }
    }
}
