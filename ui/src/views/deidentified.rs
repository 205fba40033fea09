use api::DataView;
use dioxus::prelude::*;

use crate::table::TableScreen;

#[component]
pub fn Deidentified() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-deidentified",
            h1 { {crate::t!("page-deidentified-title")} }
            p { class: "page__intro", {crate::t!("page-deidentified-intro")} }
            TableScreen { view: DataView::Deidentified }
        }
    }
}
