use dioxus::prelude::*;

use crate::core::theme::ThemeConfig;

#[component]
pub fn Settings() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let swatches: Vec<(u16, String)> = ThemeConfig::embedded()
        .palette("brand")
        .map(|palette| {
            palette
                .iter()
                .map(|(shade, color)| (shade, color.to_string()))
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-settings",
            h1 { {crate::t!("settings-title")} }
            p { {crate::t!("settings-intro")} }

            h2 { {crate::t!("settings-palette-heading")} }
            ul { class: "palette",
                for (shade, color) in swatches {
                    li { key: "{shade}", class: "palette__swatch",
                        span {
                            class: "palette__chip",
                            style: "background-color: var(--color-brand-{shade})",
                        }
                        span { class: "palette__shade", "brand.{shade}" }
                        code { class: "palette__hex", "{color}" }
                    }
                }
            }
        }
    }
}
