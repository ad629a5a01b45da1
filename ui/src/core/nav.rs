//! Active-link detection for navigation links.
//!
//! Everything here is a pure function of its inputs. The current route is
//! always passed in by the caller (the platform layout reads it from its
//! router); nothing in this module looks up ambient routing state.

use std::fmt;

/// Presentation state of a navigation link relative to the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresentationState {
    Active,
    Inactive,
}

impl PresentationState {
    /// `Active` iff `target` and `current_route` are byte-for-byte equal.
    ///
    /// No normalization is applied: `/jobs` and `/jobs/` differ, as do
    /// `/Jobs` and `/jobs`, and query strings are compared verbatim.
    pub fn classify(target: &str, current_route: &str) -> Self {
        if target == current_route {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Style classifier: `"active"` or `"inactive"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Full class attribute for the link, classifier as BEM modifier.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Active => "navbar__link navbar__link--active",
            Self::Inactive => "navbar__link navbar__link--inactive",
        }
    }
}

impl fmt::Display for PresentationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A navigation link to render: destination route plus visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDescriptor {
    pub target: String,
    pub label: String,
}

impl LinkDescriptor {
    pub fn new<T: Into<String>, L: Into<String>>(target: T, label: L) -> Self {
        Self {
            target: target.into(),
            label: label.into(),
        }
    }

    pub fn render(&self, current_route: &str) -> RenderedLink {
        render(&self.target, &self.label, current_route)
    }
}

/// Output of [`render`]: what the link component puts on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLink {
    pub href: String,
    pub text: String,
    pub state: PresentationState,
}

impl RenderedLink {
    pub fn classifier(&self) -> &'static str {
        self.state.as_str()
    }

    pub fn class(&self) -> &'static str {
        self.state.css_class()
    }
}

pub fn render(target: &str, label: &str, current_route: &str) -> RenderedLink {
    RenderedLink {
        href: target.to_string(),
        text: label.to_string(),
        state: PresentationState::classify(target, current_route),
    }
}
