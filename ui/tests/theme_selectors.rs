/*!
Stylesheet lint for the shared UI crate.

- Every class written in a `class: "..."` literal of a content file (the
  globs in `assets/theme/theme.json`) must have a selector in the shipped CSS.
- The navigation link classes produced by `PresentationState` must be styled.
- The stylesheets must not be truncated or empty.

Substring checks only; if you rename a class, update the markup and CSS together.
*/

use std::fs;
use std::path::Path;

use ui::{PresentationState, ThemeConfig};

const NAVBAR_CSS: &str = include_str!("../assets/styling/navbar.css");
const MAIN_CSS: &str = include_str!("../assets/theme/main.css");

fn stylesheets() -> String {
    format!("{MAIN_CSS}\n{NAVBAR_CSS}")
}

/// True if `css` contains `.class` not followed by another identifier character.
fn has_selector(css: &str, class: &str) -> bool {
    let needle = format!(".{class}");
    css.match_indices(&needle).any(|(at, _)| {
        css[at + needle.len()..]
            .chars()
            .next()
            .map_or(true, |c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
    })
}

/// Static class names from `class: "..."` literals; interpolated values are skipped.
fn literal_classes(source: &str) -> Vec<String> {
    source
        .split("class: \"")
        .skip(1)
        .filter_map(|rest| rest.split_once('"').map(|(value, _)| value))
        .filter(|value| !value.contains('{'))
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}

#[test]
fn content_files_include_the_nav_link_component() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let files = ThemeConfig::embedded()
        .content_files(root)
        .expect("content patterns resolve");

    assert!(files.iter().any(|f| f.ends_with("src/components/nav_link.rs")));
    assert!(files.iter().any(|f| f.ends_with("assets/styling/navbar.css")));
    assert!(
        files.windows(2).all(|w| w[0] < w[1]),
        "content files should be sorted and unique"
    );
}

#[test]
fn every_literal_class_has_a_selector() {
    let css = stylesheets();
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let files = ThemeConfig::embedded()
        .content_files(root)
        .expect("content patterns resolve");

    let mut missing = Vec::new();
    let mut seen = 0usize;
    for file in files.iter().filter(|f| f.extension().is_some_and(|e| e == "rs")) {
        let source = fs::read_to_string(file).unwrap_or_default();
        for class in literal_classes(&source) {
            seen += 1;
            if !has_selector(&css, &class) {
                missing.push(format!("{class} ({})", file.display()));
            }
        }
    }

    assert!(seen > 0, "no class literals found in content files");
    assert!(
        missing.is_empty(),
        "classes without a selector in the shipped CSS:\n{}",
        missing.join("\n")
    );
}

#[test]
fn nav_link_states_are_styled() {
    for state in [PresentationState::Active, PresentationState::Inactive] {
        for class in state.css_class().split_whitespace() {
            assert!(
                has_selector(NAVBAR_CSS, class),
                "navbar.css has no selector for `{class}` ({state})"
            );
        }
    }
}

#[test]
fn stylesheets_are_not_trivially_empty() {
    for (name, css) in [("main.css", MAIN_CSS), ("navbar.css", NAVBAR_CSS)] {
        let non_ws = css.chars().filter(|c| !c.is_whitespace()).count();
        assert!(
            non_ws > 500,
            "{name} looks truncated ({non_ws} non-whitespace chars)"
        );
    }
    assert!(MAIN_CSS.contains("body {"));
    assert!(MAIN_CSS.contains("@media (max-width: 720px)"));
}

#[test]
fn selector_matching_respects_class_boundaries() {
    let css = ".page-dashboard { color: red; }";
    assert!(has_selector(css, "page-dashboard"));
    assert!(!has_selector(css, "page"));
    assert!(!has_selector(css, "page-dash"));
}

#[test]
fn brand_variables_cover_the_palette_used_by_the_css() {
    let vars = ThemeConfig::embedded().css_variables();
    for shade in [50, 100, 500, 600, 700] {
        let name = format!("--color-brand-{shade}");
        assert!(vars.contains(&name), "missing {name}");
    }
}
