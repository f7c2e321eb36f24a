use api_client::{ApiClient, ClientConfig};
use dioxus::prelude::*;

mod components;
mod format_helpers;
mod resource;
mod views;

#[cfg(test)]
mod test_support;

use components::role_switcher::{Role, RoleSwitcher};
use views::{CaregiverView, PatientView};

const APP_NAME: &str = "DoseWatch";

const APP_CSS: Asset = asset!("/assets/app.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    // Configuration is resolved once and injected; views never read the environment.
    let config = use_context_provider(|| {
        let config = ClientConfig::from_env();
        tracing::info!(platform = client_platform(), "Starting {APP_NAME}");
        config
    });
    use_context_provider(|| ApiClient::new(&config));

    let role = use_signal(Role::default);

    rsx! {
        document::Title { "{APP_NAME}" }
        document::Link { rel: "stylesheet", href: APP_CSS }
        Shell { role: role }
    }
}

/// Header with the role switcher and the view for the selected role.
///
/// Expects `ClientConfig` and `ApiClient` in context.
#[component]
fn Shell(role: Signal<Role>) -> Element {
    rsx! {
        header { class: "app-shell-header",
            h1 { class: "app-name", "{APP_NAME}" }
            RoleSwitcher { role: role }
        }

        main {
            match role() {
                Role::Patient => rsx! { PatientView {} },
                Role::Caregiver => rsx! { CaregiverView {} },
            }
        }
    }
}
