//! Active-link detection through the crate's public API.

use ui::{render, LinkDescriptor, PresentationState};

#[test]
fn dashboard_scenario() {
    let link = render("/dashboard", "Dashboard", "/dashboard");
    assert_eq!(link.href, "/dashboard");
    assert_eq!(link.text, "Dashboard");
    assert_eq!(link.classifier(), "active");
    assert_eq!(link.class(), "navbar__link navbar__link--active");
}

#[test]
fn settings_scenario() {
    let link = render("/settings", "Settings", "/dashboard");
    assert_eq!(link.href, "/settings");
    assert_eq!(link.text, "Settings");
    assert_eq!(link.classifier(), "inactive");
    assert_eq!(link.class(), "navbar__link navbar__link--inactive");
}

#[test]
fn trailing_slash_is_not_normalized() {
    assert_eq!(render("/foo", "Foo", "/foo/").state, PresentationState::Inactive);
}

#[test]
fn empty_target_degrades_to_inactive() {
    assert_eq!(render("", "Nowhere", "/").classifier(), "inactive");
    // equality still holds for two empty strings
    assert_eq!(render("", "Nowhere", "").classifier(), "active");
}

#[test]
fn exactly_one_link_is_active_per_route() {
    let links = [
        LinkDescriptor::new("/", "Dashboard"),
        LinkDescriptor::new("/jobs", "Jobs"),
        LinkDescriptor::new("/partners", "Partners"),
        LinkDescriptor::new("/settings", "Settings"),
    ];

    for current in ["/", "/jobs", "/partners", "/settings"] {
        let active: Vec<_> = links
            .iter()
            .map(|l| l.render(current))
            .filter(|r| r.state.is_active())
            .map(|r| r.href)
            .collect();
        assert_eq!(active, vec![current.to_string()]);
    }

    // off-menu routes leave every link inactive
    assert!(links.iter().all(|l| !l.render("/jobs/42").state.is_active()));
}

#[test]
fn state_follows_route_changes() {
    let link = LinkDescriptor::new("/jobs", "Jobs");
    let history = ["/", "/jobs", "/partners", "/jobs"];
    let states: Vec<_> = history.iter().map(|r| link.render(r).classifier()).collect();
    assert_eq!(states, vec!["inactive", "active", "inactive", "active"]);
}
