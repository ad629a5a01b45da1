use crate::core::theme::ThemeConfig;
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

/// Document-level styling: the shared theme stylesheet plus the configured
/// color palettes as `--color-<family>-<shade>` custom properties.
#[component]
pub fn ThemeStyles() -> Element {
    let variables = ThemeConfig::embedded().css_variables();

    rsx! {
        document::Style { "{variables}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
    }
}
