use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress-indicator", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}

/// Labelled bar, e.g. "Taken today" with "2 / 3" on the right.
#[component]
pub fn ProgressBar(label: String, value_text: String, percent: f64) -> Element {
    let percent = percent.clamp(0.0, 100.0);

    rsx! {
        div { class: "progress-row",
            div { class: "progress-label-row",
                span { class: "progress-label", "{label}" }
                span { class: "progress-value", "{value_text}" }
            }
            Progress {
                value: Some(percent),
                ProgressIndicator {}
            }
        }
    }
}
