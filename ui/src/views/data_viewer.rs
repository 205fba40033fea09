use api::DataView;
use dioxus::prelude::*;

use crate::table::TableScreen;

#[component]
pub fn DataViewer() -> Element {
    // Subscribe to the global language code (if provided) so the page re-renders
    // when the locale changes.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-viewer",
            h1 { {crate::t!("page-viewer-title")} }
            TableScreen { view: DataView::Identified }
        }
    }
}
