use dioxus::prelude::*;

#[component]
pub fn Jobs() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-jobs",
            h1 { {crate::t!("jobs-title")} }
            p { {crate::t!("jobs-intro")} }
        }
    }
}
