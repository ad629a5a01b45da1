//! Shared UI crate for the Bayflow console. Components here are route-agnostic:
//! platform crates own the `Route` enum and pass the current route down.

pub mod components;
pub mod core;
pub mod i18n;
pub mod views;

pub use crate::core::nav::{render, LinkDescriptor, PresentationState, RenderedLink};
pub use crate::core::theme::{ThemeConfig, ThemeError};
