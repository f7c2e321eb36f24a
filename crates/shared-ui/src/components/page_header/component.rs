use dioxus::prelude::*;

/// View header: title, optional subtitle, and trailing actions.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            {children}
        }
    }
}

#[component]
pub fn PageTitle(#[props(default)] subtitle: Option<String>, children: Element) -> Element {
    rsx! {
        div { class: "page-title-block",
            h1 { class: "page-title", {children} }
            if let Some(text) = subtitle {
                p { class: "page-subtitle", "{text}" }
            }
        }
    }
}

/// Container for the identifier field and action buttons.
#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}
