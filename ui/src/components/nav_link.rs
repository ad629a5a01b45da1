use crate::core::nav::LinkDescriptor;
use dioxus::prelude::*;

/// One navigation link, styled by whether it points at `current_route`.
///
/// `current_route` is supplied by the caller on every render (the platform
/// layout reads it from its router), so the link re-evaluates its state on
/// each navigation without consulting any ambient router context.
#[component]
pub fn NavLink(link: LinkDescriptor, current_route: String) -> Element {
    let rendered = link.render(&current_route);

    tracing::debug!(
        target_route = %rendered.href,
        state = %rendered.state,
        "nav link render"
    );

    rsx! {
        Link {
            class: "{rendered.class()}",
            to: rendered.href.clone(),
            "{rendered.text}"
        }
    }
}
