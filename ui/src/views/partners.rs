use dioxus::prelude::*;

#[component]
pub fn Partners() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-partners",
            h1 { {crate::t!("partners-title")} }
            p { {crate::t!("partners-intro")} }
        }
    }
}
