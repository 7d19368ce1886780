//! Shared UI crate for Folio. Content, the publication view model and every page live here.

use dioxus::prelude::*;

pub mod content;
pub mod core;
pub mod i18n;
pub mod publications;
pub mod views;

pub mod components {
    // Localized site header (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod footer;
    pub use footer::{SiteFooter, SiteHead};

    mod notice;
    pub use notice::ContentUnavailable;
}


/// Unified site theme. Platform crates link it from their root component.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
