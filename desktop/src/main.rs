#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use api::{ApiClient, ApiConfig};
#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use tracing::info;

use ui::components::{register_nav, AppNavbar, NavBuilder};
use ui::views::{DataViewer, Deidentified};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    DataViewer {},
    #[route("/deidentified")]
    Deidentified {},
}

// Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.
const MAIN_CSS_INLINE: &str = ui::THEME_CSS_INLINE;

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Clinical Data Viewer – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                ),
        )
        .launch(App);
}

fn nav_viewer(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::DataViewer {}, "{label}" })
}
fn nav_deidentified(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Deidentified {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar updates this via context on language selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    // Reads DATAVIEWER_API_BASE_URL (and `.env`) once at startup.
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        info!(base_url = config.base_url(), "data viewer starting");
        ApiClient::new(config)
    });

    register_nav(NavBuilder {
        viewer: nav_viewer,
        deidentified: nav_deidentified,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed on the language so the routed subtree remounts with fresh strings.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// A desktop-specific layout around the shared navbar, so the links can use this
/// crate's `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
