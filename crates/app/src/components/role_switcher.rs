use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdUser, LdUsers};
use dioxus_free_icons::Icon;
use shared_ui::components::{Button, ButtonVariant};

/// Which audience the app is currently serving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Role {
    /// The person taking the medication.
    #[default]
    Patient,
    /// Someone monitoring a patient's adherence.
    Caregiver,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Caregiver => "Caregiver",
        }
    }
}

/// Two-button toggle between the patient and caregiver views.
///
/// Switching only flips the signal; the parent mounts the selected view
/// from scratch, so nothing is cached across switches.
#[component]
pub fn RoleSwitcher(role: Signal<Role>) -> Element {
    let current = *role.read();
    let variant = |r: Role| {
        if r == current {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Secondary
        }
    };
    let pressed = |r: Role| if r == current { "true" } else { "false" };

    rsx! {
        nav { class: "role-switcher", "aria-label": "Choose view",
            Button {
                variant: variant(Role::Patient),
                aria_pressed: pressed(Role::Patient),
                onclick: move |_| role.set(Role::Patient),
                Icon::<LdUser> { icon: LdUser, width: 18, height: 18 }
                "{Role::Patient.label()}"
            }
            Button {
                variant: variant(Role::Caregiver),
                aria_pressed: pressed(Role::Caregiver),
                onclick: move |_| role.set(Role::Caregiver),
                Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                "{Role::Caregiver.label()}"
            }
        }
    }
}
