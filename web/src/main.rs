use dioxus::prelude::*;

use ui::components::{AppNavbar, NavSection, ThemeStyles};
use ui::views::{Dashboard, Jobs, NotFound, Partners, Settings};
use ui::LinkDescriptor;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Dashboard {},
    #[route("/jobs")]
    Jobs {},
    #[route("/partners")]
    Partners {},
    #[route("/settings")]
    Settings {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn section_route(section: NavSection) -> Route {
    match section {
        NavSection::Dashboard => Route::Dashboard {},
        NavSection::Jobs => Route::Jobs {},
        NavSection::Partners => Route::Partners {},
        NavSection::Settings => Route::Settings {},
    }
}

fn nav_links() -> Vec<LinkDescriptor> {
    NavSection::ALL
        .iter()
        .map(|section| LinkDescriptor::new(section_route(*section).to_string(), section.label()))
        .collect()
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppNavbar updates it on language selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        ThemeStyles {}
        Router::<Route> {}
    }
}

/// Web layout around the shared navbar. This is the only place that reads the
/// router: the current route is rendered to its path and handed to the navbar.
///
/// Link labels are localized here, so the layout also subscribes to the
/// language signal and rebuilds them after a language switch.
#[component]
fn WebNavbar() -> Element {
    let route = use_route::<Route>();
    let current_route = route.to_string();
    let lang = try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_else(ui::i18n::current_language);
    tracing::debug!(%lang, %current_route, "web layout render");

    rsx! {
        AppNavbar { links: nav_links(), current_route }
        Outlet::<Route> {}
    }
}
