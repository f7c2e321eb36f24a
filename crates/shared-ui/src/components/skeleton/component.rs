use dioxus::prelude::*;

/// Pulsing placeholder shown while the first response is pending.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "aria-hidden": "true",
            ..merged,
        }
    }
}

/// A stack of `rows` skeleton bars, announced once as "Loading".
#[component]
pub fn SkeletonList(#[props(default = 3)] rows: usize) -> Element {
    rsx! {
        div { class: "skeleton-list", role: "status",
            span { class: "visually-hidden", "Loading" }
            for i in 0..rows {
                Skeleton { key: "{i}" }
            }
        }
    }
}
