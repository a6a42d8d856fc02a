//! Shared UI crate for the ARCHEIN landing page. Everything the web and
//! desktop shells render lives here.

use dioxus::prelude::*;

pub mod core;
pub mod effects;
pub mod i18n;
pub mod views;

pub mod components {
    // Fixed top bar with the language switch (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    mod backdrop;
    pub use backdrop::BlueprintBackground;

    mod cards;
    pub use cards::{forward_arrow, CourseCard, WorkshopCard};

    mod logo;
    pub use logo::{Logo, LogoSource};

    mod reveal;
    pub use reveal::Reveal;
}

/// Shared theme, linked as an asset by the web shell.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The same theme as text, for shells that inline it.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

#[cfg(test)]
#[path = "tests/i18n_completeness.rs"]
mod i18n_completeness;
