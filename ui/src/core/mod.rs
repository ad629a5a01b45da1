//! Platform-independent logic shared by every view.

pub mod nav;
pub mod theme;
