use dioxus::prelude::*;

use crate::t;

/// Overlay + dialog shell shared by every modal. Clicking the backdrop closes it.
#[component]
pub fn ModalFrame(
    title: String,
    #[props(default)] class: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content {class}",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal-header",
                    h2 { "{title}" }
                    button {
                        r#type: "button",
                        class: "modal-close",
                        aria_label: t!("modal-close"),
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}
