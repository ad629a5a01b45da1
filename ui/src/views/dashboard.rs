use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-dashboard",
            h1 { {crate::t!("dashboard-title")} }
            p { {crate::t!("dashboard-intro")} }
            p { class: "page__hint", {crate::t!("dashboard-hint")} }
        }
    }
}
