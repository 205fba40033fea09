use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading",
            div { class: "loading__spinner", aria_hidden: "true" }
            p { class: "loading__text", {t!("loading")} }
        }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "error-message", role: "alert",
            p { "{message}" }
        }
    }
}
