use dioxus::prelude::*;

/// Catch-all page; `segments` are the unmatched path segments.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        section { class: "page page-not-found",
            h1 { {crate::t!("not-found-title")} }
            p { {crate::t!("not-found-detail", path = path.as_str())} }
            Link { class: "button button--primary", to: "/", {crate::t!("not-found-back")} }
        }
    }
}
