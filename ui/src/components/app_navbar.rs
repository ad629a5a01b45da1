use crate::components::NavLink;
use crate::core::nav::LinkDescriptor;
use crate::i18n;
use crate::t;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Primary sections of the console, in navbar order.
///
/// `ui` does not know any platform's `Route` enum; platforms map each section
/// to a route string and build the `LinkDescriptor`s themselves:
/// ```ignore
/// let links = NavSection::ALL
///     .iter()
///     .map(|s| LinkDescriptor::new(route_for(*s).to_string(), s.label()))
///     .collect::<Vec<_>>();
/// rsx! { AppNavbar { links, current_route: use_route::<Route>().to_string() } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavSection {
    Dashboard,
    Jobs,
    Partners,
    Settings,
}

impl NavSection {
    pub const ALL: [NavSection; 4] = [
        NavSection::Dashboard,
        NavSection::Jobs,
        NavSection::Partners,
        NavSection::Settings,
    ];

    /// Localized label in the currently selected language.
    pub fn label(self) -> String {
        match self {
            NavSection::Dashboard => t!("nav-dashboard"),
            NavSection::Jobs => t!("nav-jobs"),
            NavSection::Partners => t!("nav-partners"),
            NavSection::Settings => t!("nav-settings"),
        }
    }
}

/// Localized application header: brand, navigation links and locale switcher.
///
/// Every link is classified against `current_route` on each render; the
/// parent layout is responsible for re-rendering when the route changes.
/// The language selector updates the optional `Signal<String>` context
/// provided by the platform so the rest of the tree re-renders too.
#[component]
pub fn AppNavbar(links: Vec<LinkDescriptor>, current_route: String) -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Reactive dependency on the global language code (if provided)
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    tracing::debug!(
        lang = %lang_marker,
        current_route = %current_route,
        links = links.len(),
        "navbar render"
    );

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(error = %err, lang = %val, "language switch failed"),
        }
    };

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Bayflow" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                nav {
                    class: "navbar__links",
                    aria_label: t!("nav-primary-label"),
                    for link in links {
                        NavLink {
                            key: "{link.target}",
                            link: link.clone(),
                            current_route: current_route.clone(),
                        }
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
