//! Shared UI crate for the clinical data viewer. Screens, modals and the formatting core
//! live here; the `web` and `desktop` crates only launch and route.

use dioxus::prelude::*;

pub mod components;
pub mod core;
pub mod i18n;
pub mod modals;
pub mod table;
pub mod views;

/// Application theme (tables, modals, search bar, badges).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Theme source, for launchers that inline styles instead of linking them.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
