//! Reusable UI components. Platform crates own the `Route` enum; everything
//! here takes routes as plain strings.

pub mod app_navbar;
pub use app_navbar::AppNavbar;
pub use app_navbar::NavSection;

mod nav_link;
pub use nav_link::NavLink;

mod theme_styles;
pub use theme_styles::ThemeStyles;
