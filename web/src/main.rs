use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;
use tracing::info;

use ui::components::{register_nav, AppNavbar, NavBuilder};
use ui::views::{DataViewer, Deidentified};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    DataViewer {},
    #[route("/deidentified")]
    Deidentified {},
}

fn nav_viewer(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::DataViewer {},
        "{label}"
    })
}
fn nav_deidentified(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Deidentified {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            viewer: nav_viewer,
            deidentified: nav_deidentified,
        });
    }

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    // One client for the whole app; the base URL is fixed at build time on the web.
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        info!(base_url = config.base_url(), "data viewer starting");
        ApiClient::new(config)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared navbar, so the links can use this crate's
/// `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
